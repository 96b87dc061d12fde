//! # RETRO - Time Paradoxes
//!
//! Owns the time-quake schedule. Every `interval`-th turn the quake erases
//! the move made `offset` turns earlier from the causal ledger - never from
//! the board - and the resulting ledger/board divergence surfaces as a
//! paradox report. The ledger executes the erasure; this module only decides
//! *when* to ask for one.
//!
//! Defaults: a quake every 10th turn, reaching 5 turns into the past.
//! Both are configuration, not constants.

use crate::ledger::{CausalLedger, LedgerError, ParadoxReport, RetroOutcome};

#[derive(Debug, Clone, Copy)]
pub struct RetroConfig {
    /// A quake fires when `turn % interval == 0` (and turn > 0).
    pub interval: usize,
    /// How many turns into the past the quake reaches.
    pub offset: usize,
}

impl Default for RetroConfig {
    fn default() -> Self {
        RetroConfig {
            interval: 10,
            offset: 5,
        }
    }
}

impl RetroConfig {
    /// Whether the schedule calls for a quake on this turn.
    pub fn is_quake_turn(&self, turn: usize) -> bool {
        self.interval > 0 && turn > 0 && turn % self.interval == 0
    }
}

/// Fires a quake against the ledger if the schedule says so.
///
/// Early-game `OutOfRange` is the expected "not enough history yet" case and
/// becomes a logged skip. An already-erased target is a quiet no-op. Only a
/// fresh erasure yields a report here.
pub fn maybe_quake(
    config: &RetroConfig,
    turn: usize,
    ledger: &mut CausalLedger,
) -> Option<ParadoxReport> {
    if !config.is_quake_turn(turn) {
        return None;
    }
    match ledger.trigger_retrocausal_event(turn, config.offset) {
        Ok(RetroOutcome::Erased(report)) => Some(report),
        Ok(RetroOutcome::AlreadyErased(_)) => None,
        Err(LedgerError::OutOfRange { .. }) => {
            tracing::debug!(turn, offset = config.offset, "quake skipped, not enough history");
            None
        }
        Err(err) => {
            tracing::warn!(turn, %err, "quake failed");
            None
        }
    }
}
