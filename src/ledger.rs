//! # Causal History Ledger
//!
//! The RETRO protocol's bookkeeping core: an append-only record of committed
//! turns that can be retro-causally edited. A scheduled "time quake" erases
//! the move made a fixed number of turns in the past from the *ledger only* -
//! the physical board is never touched - and the resulting divergence between
//! recorded history and observed reality is surfaced as a paradox report.
//!
//! The divergence is the entire point of the mechanic. The ledger must never
//! "repair" the board to match history, nor rewrite history to match the
//! board.
//!
//! ## Replay, not diffs
//!
//! Paradox detection replays the whole ledger from the initial position,
//! skipping erased turns, and compares the reconstruction against the live
//! board snapshot. Replaying from scratch keeps the comparison correct when
//! multiple quakes have erased multiple turns: an incremental diff would need
//! re-deriving after every later erasure anyway.

use crate::board::{Board, Color, Coord};
use thiserror::Error;

/// Errors the ledger can return. All of them are recoverable by the caller;
/// the usual response to `OutOfRange` early in a game is to skip the event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The retro-causal target turn does not exist (yet).
    #[error("retro-causal target out of range: current turn {current}, offset {offset}")]
    OutOfRange { current: usize, offset: usize },
    /// The comparison snapshot for a turn was evicted by the retention window.
    /// Indicates the window was configured smaller than the retro offset.
    #[error("board snapshot for turn {turn} is outside the retention window")]
    SnapshotUnavailable { turn: usize },
}

/// What a turn record says happened on that turn.
///
/// `Erased` is a terminal state reached from either of the other two by a
/// retro-causal event. It is distinct from `Pass`: a pass is something the
/// mover did, an erasure is something history did to the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum RecordedAction {
    /// A stone was placed at the cell.
    Play(Coord),
    /// The mover had no move (or declined) and passed.
    Pass,
    /// A retro-causal event removed this turn from history.
    Erased,
}

/// One committed turn.
///
/// Created immediately after the move applier updates the board; never
/// deleted. The snapshot payload is evicted once the record falls outside the
/// retention window, but the index, mover, and action stay for audit.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub turn_index: usize,
    pub mover: Color,
    pub action: RecordedAction,
    snapshot: Option<Board>,
}

impl TurnRecord {
    /// The retained post-turn board snapshot, if still inside the window.
    pub fn snapshot(&self) -> Option<&Board> {
        self.snapshot.as_ref()
    }
}

/// Outcome of one detected (or re-checked) temporal paradox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ParadoxReport {
    /// Turn whose action caused the check.
    pub trigger_turn: usize,
    /// Turn that was retro-causally modified.
    pub target_turn: usize,
    /// Cells where the replayed-from-ledger board disagrees with the live
    /// board. Zero is a valid, logged outcome ("checked, no paradox").
    pub cell_discrepancies: usize,
}

/// Result of [`CausalLedger::trigger_retrocausal_event`].
///
/// Both variants carry a full report so callers can always see the current
/// divergence; only `Erased` represents a fresh history edit (and only that
/// variant appended to the report log).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetroOutcome {
    /// The target turn was erased by this call.
    Erased(ParadoxReport),
    /// The target turn had already been erased; nothing changed, nothing was
    /// re-logged. The report content matches what a fresh check would say.
    AlreadyErased(ParadoxReport),
}

impl RetroOutcome {
    pub fn report(&self) -> &ParadoxReport {
        match self {
            RetroOutcome::Erased(r) | RetroOutcome::AlreadyErased(r) => r,
        }
    }
}

/// Ledger configuration. The event schedule and offset are deliberately NOT
/// here: the ledger only executes an offset when told to, the surrounding
/// loop owns the schedule (see [`crate::protocols::retro`]).
#[derive(Debug, Clone, Copy)]
pub struct LedgerConfig {
    /// How many trailing turns keep their board snapshot. Must be at least
    /// the maximum retro-causal offset + 1.
    pub snapshot_window: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig { snapshot_window: 16 }
    }
}

/// Append-only, selectively-mutable record of committed turns for one game.
///
/// Exactly one writer (the turn-commit loop) drives it; batch evaluation runs
/// one independent ledger per game.
#[derive(Debug, Clone)]
pub struct CausalLedger {
    config: LedgerConfig,
    records: Vec<TurnRecord>,
    reports: Vec<ParadoxReport>,
}

impl CausalLedger {
    pub fn new(config: LedgerConfig) -> Self {
        CausalLedger {
            config,
            records: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Appends a record for a committed turn and returns its index.
    ///
    /// `action` is `Some(cell)` for a placement, `None` for a pass. Legality
    /// was already enforced by the game master; the ledger trusts its input.
    /// Snapshots older than the retention window are evicted here.
    pub fn record_turn(&mut self, mover: Color, action: Option<Coord>, board: &Board) -> usize {
        if let Some(at) = action {
            debug_assert!(at.in_bounds());
        }
        let turn_index = self.records.len();
        self.records.push(TurnRecord {
            turn_index,
            mover,
            action: match action {
                Some(at) => RecordedAction::Play(at),
                None => RecordedAction::Pass,
            },
            snapshot: Some(board.clone()),
        });
        if turn_index + 1 > self.config.snapshot_window {
            let evict_before = turn_index + 1 - self.config.snapshot_window;
            for record in &mut self.records[..evict_before] {
                record.snapshot = None;
            }
        }
        turn_index
    }

    /// Fires a retro-causal event at `current` against the turn `offset`
    /// turns in the past.
    ///
    /// On a fresh target, marks its action `Erased` (the board is NOT
    /// modified), replays history, and appends + returns a paradox report.
    /// On an already-erased target, re-computes the same report without
    /// mutating anything or re-logging.
    ///
    /// Errors leave the ledger completely unchanged.
    pub fn trigger_retrocausal_event(
        &mut self,
        current: usize,
        offset: usize,
    ) -> Result<RetroOutcome, LedgerError> {
        if offset > current || current >= self.records.len() {
            return Err(LedgerError::OutOfRange { current, offset });
        }
        let target = current - offset;
        // Validate the comparison snapshot before mutating anything.
        let live = match &self.records[current].snapshot {
            Some(board) => board.clone(),
            None => return Err(LedgerError::SnapshotUnavailable { turn: current }),
        };

        let fresh = self.records[target].action != RecordedAction::Erased;
        if fresh {
            self.records[target].action = RecordedAction::Erased;
        }

        let replayed = self.replay_from(current)?;
        let report = ParadoxReport {
            trigger_turn: current,
            target_turn: target,
            cell_discrepancies: replayed.discrepancies(&live),
        };

        if fresh {
            self.reports.push(report);
            tracing::info!(
                trigger = current,
                target,
                discrepancies = report.cell_discrepancies,
                "time quake erased turn"
            );
            Ok(RetroOutcome::Erased(report))
        } else {
            tracing::debug!(trigger = current, target, "target already erased, no-op");
            Ok(RetroOutcome::AlreadyErased(report))
        }
    }

    /// Deterministically reconstructs the board as the ledger currently tells
    /// the story: from the initial position, apply every non-erased action in
    /// index order up to and including `turn_index`.
    ///
    /// Pure with respect to ledger state; repeated calls yield identical
    /// boards.
    pub fn replay_from(&self, turn_index: usize) -> Result<Board, LedgerError> {
        if turn_index >= self.records.len() {
            return Err(LedgerError::OutOfRange {
                current: turn_index,
                offset: 0,
            });
        }
        let mut board = Board::new();
        for record in &self.records[..=turn_index] {
            if let RecordedAction::Play(at) = record.action {
                board.apply(record.mover, at);
            }
        }
        Ok(board)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// The append-only paradox report log, in trigger order.
    pub fn reports(&self) -> &[ParadoxReport] {
        &self.reports
    }
}
