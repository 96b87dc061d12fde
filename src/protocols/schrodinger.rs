//! # SCHRODINGER - Quantum Uncertainty
//!
//! Every placed stone enters superposition. On a scheduled decoherence event
//! the wave function collapses: each superposed stone still on the board
//! settles, flipping to the opposite color with configurable probability.
//! Unlike BABEL this mutates the real board - both players live with the
//! collapsed outcome.

use crate::board::{Board, Coord};
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Debug, Clone, Copy)]
pub struct QuantumConfig {
    /// Decoherence fires when `turn % collapse_interval == 0` (and turn > 0).
    pub collapse_interval: usize,
    /// Probability that a collapsing stone flips to the opposite color.
    pub flip_probability: f64,
}

impl Default for QuantumConfig {
    fn default() -> Self {
        QuantumConfig {
            collapse_interval: 8,
            flip_probability: 0.25,
        }
    }
}

/// One settled stone from a decoherence event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CollapseEvent {
    pub at: Coord,
    /// True when the stone flipped to the opposite color.
    pub flipped: bool,
}

/// Tracks which stones are currently in superposition for one game.
#[derive(Debug, Default)]
pub struct QuantumOverlay {
    superposed: Vec<Coord>,
}

impl QuantumOverlay {
    pub fn new() -> Self {
        QuantumOverlay::default()
    }

    /// Marks a freshly placed stone as superposed.
    pub fn on_place(&mut self, at: Coord) {
        if !self.superposed.contains(&at) {
            self.superposed.push(at);
        }
    }

    pub fn is_collapse_turn(&self, config: &QuantumConfig, turn: usize) -> bool {
        config.collapse_interval > 0 && turn > 0 && turn % config.collapse_interval == 0
    }

    /// Collapses every superposed stone still on the board, mutating `board`.
    /// Cells that emptied in the meantime (cannot happen in standard play,
    /// but history is flexible around here) just decohere silently.
    pub fn collapse(
        &mut self,
        config: &QuantumConfig,
        board: &mut Board,
        rng: &mut Xoshiro256PlusPlus,
    ) -> Vec<CollapseEvent> {
        let mut events = Vec::new();
        for at in self.superposed.drain(..) {
            let Some(color) = board.get(at) else { continue };
            let flipped = rng.gen_bool(config.flip_probability);
            if flipped {
                board.set(at, Some(color.opponent()));
            }
            events.push(CollapseEvent { at, flipped });
        }
        if !events.is_empty() {
            let flips = events.iter().filter(|e| e.flipped).count();
            tracing::info!(settled = events.len(), flips, "decoherence event");
        }
        events
    }

    pub fn superposed(&self) -> &[Coord] {
        &self.superposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn test_collapse_schedule() {
        let config = QuantumConfig::default();
        let overlay = QuantumOverlay::new();
        assert!(!overlay.is_collapse_turn(&config, 0));
        assert!(!overlay.is_collapse_turn(&config, 7));
        assert!(overlay.is_collapse_turn(&config, 8));
        assert!(overlay.is_collapse_turn(&config, 16));
    }

    #[test]
    fn test_collapse_settles_everything() {
        let config = QuantumConfig {
            collapse_interval: 8,
            flip_probability: 0.5,
        };
        let mut board = Board::new();
        let mut overlay = QuantumOverlay::new();
        board.apply(Color::Black, Coord(2, 3));
        overlay.on_place(Coord(2, 3));
        let events = overlay.collapse(&config, &mut board, &mut rng(5));
        assert_eq!(events.len(), 1);
        assert!(overlay.superposed().is_empty());
    }

    #[test]
    fn test_flip_probability_one_always_flips() {
        let config = QuantumConfig {
            collapse_interval: 8,
            flip_probability: 1.0,
        };
        let mut board = Board::new();
        let mut overlay = QuantumOverlay::new();
        board.apply(Color::Black, Coord(2, 3));
        overlay.on_place(Coord(2, 3));
        overlay.collapse(&config, &mut board, &mut rng(5));
        assert_eq!(board.get(Coord(2, 3)), Some(Color::White));
    }

    #[test]
    fn test_flip_probability_zero_never_flips() {
        let config = QuantumConfig {
            collapse_interval: 8,
            flip_probability: 0.0,
        };
        let mut board = Board::new();
        let mut overlay = QuantumOverlay::new();
        board.apply(Color::Black, Coord(2, 3));
        overlay.on_place(Coord(2, 3));
        let events = overlay.collapse(&config, &mut board, &mut rng(5));
        assert_eq!(board.get(Coord(2, 3)), Some(Color::Black));
        assert_eq!(events, vec![CollapseEvent { at: Coord(2, 3), flipped: false }]);
    }

    #[test]
    fn test_emptied_cell_decoheres_silently() {
        let config = QuantumConfig::default();
        let mut board = Board::new();
        let mut overlay = QuantumOverlay::new();
        overlay.on_place(Coord(0, 0)); // never actually occupied
        let events = overlay.collapse(&config, &mut board, &mut rng(5));
        assert!(events.is_empty());
        assert!(overlay.superposed().is_empty());
    }

    #[test]
    fn test_deterministic_under_seed() {
        let config = QuantumConfig::default();
        let run = |seed| {
            let mut board = Board::new();
            let mut overlay = QuantumOverlay::new();
            for at in [Coord(2, 3), Coord(2, 2), Coord(4, 5)] {
                board.set(at, Some(Color::Black));
                overlay.on_place(at);
            }
            overlay.collapse(&config, &mut board, &mut rng(seed))
        };
        assert_eq!(run(11), run(11));
    }
}
