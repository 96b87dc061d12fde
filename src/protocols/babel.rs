//! # BABEL - Communication Breakdown
//!
//! With configurable probability, the board view handed to the player is
//! corrupted before they see it: a few occupied cells report the wrong color.
//! Legal moves in the view are recomputed from the corrupted board, so a
//! deceived player can confidently pick a move the real board rejects.
//!
//! Only the view is touched. The authoritative board, the ledger, and the
//! opponent's perception are never affected by a corrupted message.

use crate::BoardView;
use rand::seq::index;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Debug, Clone, Copy)]
pub struct BabelConfig {
    /// Probability that a given view is corrupted at all.
    pub corruption_rate: f64,
    /// Upper bound on how many occupied cells get their color inverted.
    pub max_scrambled: usize,
}

impl Default for BabelConfig {
    fn default() -> Self {
        BabelConfig {
            corruption_rate: 0.30,
            max_scrambled: 3,
        }
    }
}

/// Maybe corrupts `view` in place. Returns true when corruption happened.
pub fn corrupt_view(
    config: &BabelConfig,
    view: &mut BoardView,
    rng: &mut Xoshiro256PlusPlus,
) -> bool {
    if !rng.gen_bool(config.corruption_rate) {
        return false;
    }
    let occupied = view.board.occupied();
    if occupied.is_empty() || config.max_scrambled == 0 {
        return false;
    }
    let scramble = rng.gen_range(1..=config.max_scrambled.min(occupied.len()));
    // Distinct cells: picking one twice would restore it, delivering a
    // "corrupted" message identical to the truth.
    for idx in index::sample(rng, occupied.len(), scramble) {
        let (at, color) = occupied[idx];
        view.board.set(at, Some(color.opponent()));
    }
    // The lie must be internally consistent: legal moves follow the story.
    view.legal_moves = view.board.legal_moves(view.color);
    tracing::debug!(mover = %view.color, cells = scramble, "babel corrupted the view");
    true
}
