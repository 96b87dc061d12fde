//! # Scoring Rubric and Match Reports
//!
//! Turns a finished game into numbers and a serializable record. The base
//! score is always the stone count; protocols add their own terms:
//!
//! - RETRO grants a fixed bonus per detected paradox, up to a cap
//!   (both sides earn it - surviving a fractured timeline is an achievement
//!   regardless of color).
//! - CONCEPT adds weighted aesthetics and ethics terms.
//!
//! The JSON match report is the externally consumed artifact; everything in
//! it is derived from the board, the ledger, and the protocol event tallies.

use crate::board::{Board, Color};
use crate::game_master::GameStatus;
use crate::ledger::ParadoxReport;
use crate::protocols::{concept, ConceptConfig, ProtocolKind};

#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Points per detected paradox (a report with at least one discrepancy).
    pub paradox_bonus: f64,
    /// Upper bound on the total paradox bonus.
    pub paradox_bonus_cap: f64,
    pub concept: ConceptConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            paradox_bonus: 5.0,
            paradox_bonus_cap: 15.0,
            concept: ConceptConfig::default(),
        }
    }
}

/// Bonus for detected paradoxes: zero-discrepancy reports were checks, not
/// paradoxes, and earn nothing.
pub fn paradox_bonus(config: &ScoringConfig, reports: &[ParadoxReport]) -> f64 {
    let detected = reports.iter().filter(|r| r.cell_discrepancies > 0).count();
    (detected as f64 * config.paradox_bonus).min(config.paradox_bonus_cap)
}

/// Per-side final score breakdown.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SideScore {
    pub stones: usize,
    pub paradox_bonus: f64,
    pub aesthetics: f64,
    pub ethics: f64,
    pub total: f64,
}

fn side_score(
    config: &ScoringConfig,
    protocol: ProtocolKind,
    board: &Board,
    color: Color,
    reports: &[ParadoxReport],
) -> SideScore {
    let (black, white) = board.counts();
    let stones = match color {
        Color::Black => black,
        Color::White => white,
    };
    let bonus = match protocol {
        ProtocolKind::Retro => paradox_bonus(config, reports),
        _ => 0.0,
    };
    let (aesthetics, ethics) = match protocol {
        ProtocolKind::Concept => (
            concept::aesthetics_score(board, color),
            concept::ethics_score(&config.concept, board, color),
        ),
        _ => (0.0, 0.0),
    };
    let total = stones as f64
        + bonus
        + aesthetics * config.concept.aesthetics_weight
        + ethics * config.concept.ethics_weight;
    SideScore {
        stones,
        paradox_bonus: bonus,
        aesthetics,
        ethics,
        total,
    }
}

/// The serialized result record for one finished game.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MatchReport {
    pub protocol: ProtocolKind,
    pub black_player: String,
    pub white_player: String,
    pub turns_played: usize,
    pub winner: Option<Color>,
    pub black: SideScore,
    pub white: SideScore,
    /// Full paradox log in trigger order (RETRO; empty otherwise).
    pub paradoxes: Vec<ParadoxReport>,
    /// Corrupted messages delivered (BABEL; zero otherwise).
    pub corrupted_messages: usize,
    /// Stones settled by decoherence events (SCHRODINGER; zero otherwise).
    pub collapses: usize,
}

impl MatchReport {
    #[allow(clippy::too_many_arguments)]
    pub fn compile(
        config: &ScoringConfig,
        protocol: ProtocolKind,
        board: &Board,
        status: GameStatus,
        turns_played: usize,
        black_player: &str,
        white_player: &str,
        paradoxes: Vec<ParadoxReport>,
        corrupted_messages: usize,
        collapses: usize,
    ) -> Self {
        let black = side_score(config, protocol, board, Color::Black, &paradoxes);
        let white = side_score(config, protocol, board, Color::White, &paradoxes);
        // Under CONCEPT the totals (stones plus weighted aesthetic/ethic
        // terms) decide the winner outright, whatever the referee's
        // stone-count verdict says. Elsewhere totals reduce to stones
        // (+ shared paradox bonus), so that verdict stands; totals only
        // break the tie when the game hit the turn cap.
        let by_totals = || {
            if black.total > white.total {
                Some(Color::Black)
            } else if white.total > black.total {
                Some(Color::White)
            } else {
                None
            }
        };
        let winner = if protocol == ProtocolKind::Concept {
            by_totals()
        } else {
            match status {
                GameStatus::Win(c) => Some(c),
                GameStatus::Draw => None,
                GameStatus::InProgress => by_totals(),
            }
        };
        MatchReport {
            protocol,
            black_player: black_player.to_string(),
            white_player: white_player.to_string(),
            turns_played,
            winner,
            black,
            white,
            paradoxes,
            corrupted_messages,
            collapses,
        }
    }

    /// Total number of detected paradoxes (discrepancies >= 1).
    pub fn paradox_count(&self) -> usize {
        self.paradoxes
            .iter()
            .filter(|r| r.cell_discrepancies > 0)
            .count()
    }
}
