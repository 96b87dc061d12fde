//! # CONCEPT - Aesthetics and Ethics
//!
//! A pure scoring overlay: play proceeds as standard Othello, but the final
//! score rewards beautiful and merciful play on top of raw stone count.
//!
//! - Aesthetics: how mirror-symmetric (left/right) a player's stones are.
//! - Ethics: a mercy factor that penalizes grinding the opponent below a
//!   survival threshold.
//!
//! Both terms are simple weighted sums over directly observable board
//! statistics; nothing here changes move legality.

use crate::board::{Board, Color, SIZE};

#[derive(Debug, Clone, Copy)]
pub struct ConceptConfig {
    /// Points multiplier for the aesthetics term (0..=1 score scaled by this).
    pub aesthetics_weight: f64,
    /// Points multiplier for the ethics term.
    pub ethics_weight: f64,
    /// Opponent stone count below which mercy starts degrading.
    pub mercy_threshold: usize,
}

impl Default for ConceptConfig {
    fn default() -> Self {
        ConceptConfig {
            aesthetics_weight: 10.0,
            ethics_weight: 10.0,
            mercy_threshold: 10,
        }
    }
}

/// Fraction of `color`'s stones whose left/right mirror cell also holds one
/// of `color`'s stones. 1.0 for a perfectly symmetric shape, 0.0 for none.
/// A player with no stones scores 0.0.
pub fn aesthetics_score(board: &Board, color: Color) -> f64 {
    let mut own = 0usize;
    let mut mirrored = 0usize;
    for (at, c) in board.occupied() {
        if c != color {
            continue;
        }
        own += 1;
        let mirror = crate::board::Coord(at.0, SIZE - 1 - at.1);
        if board.get(mirror) == Some(color) {
            mirrored += 1;
        }
    }
    if own == 0 {
        0.0
    } else {
        mirrored as f64 / own as f64
    }
}

/// Mercy factor for `color`: 1.0 while the opponent keeps at least
/// `mercy_threshold` stones, linearly degrading to 0.0 as the opponent is
/// wiped out.
pub fn ethics_score(config: &ConceptConfig, board: &Board, color: Color) -> f64 {
    if config.mercy_threshold == 0 {
        return 1.0;
    }
    let (black, white) = board.counts();
    let opponent_stones = match color {
        Color::Black => white,
        Color::White => black,
    };
    (opponent_stones as f64 / config.mercy_threshold as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_initial_position_has_no_mirror_pairs() {
        // The four starting stones are not mirror pairs per color
        // (D4 white mirrors E4 black), so symmetry is zero for both.
        let board = Board::new();
        assert_eq!(aesthetics_score(&board, Color::Black), 0.0);
        assert_eq!(aesthetics_score(&board, Color::White), 0.0);
    }

    #[test]
    fn test_mirror_pair_scores_one() {
        let mut board = Board::empty();
        board.set(Coord(3, 1), Some(Color::Black));
        board.set(Coord(3, 6), Some(Color::Black));
        assert_eq!(aesthetics_score(&board, Color::Black), 1.0);
    }

    #[test]
    fn test_partial_symmetry() {
        let mut board = Board::empty();
        board.set(Coord(2, 2), Some(Color::Black));
        board.set(Coord(2, 5), Some(Color::Black));
        board.set(Coord(4, 0), Some(Color::Black));
        board.set(Coord(4, 7), Some(Color::White)); // mirror is the opponent
        assert_eq!(aesthetics_score(&board, Color::Black), 2.0 / 3.0);
    }

    #[test]
    fn test_no_stones_scores_zero() {
        let board = Board::empty();
        assert_eq!(aesthetics_score(&board, Color::Black), 0.0);
    }

    #[test]
    fn test_mercy_proportional_below_threshold() {
        let config = ConceptConfig::default();
        let board = Board::new(); // 2 stones each, threshold 10
        assert_eq!(ethics_score(&config, &board, Color::Black), 0.2);
    }

    #[test]
    fn test_mercy_degrades_as_opponent_shrinks() {
        let config = ConceptConfig::default();
        let mut board = Board::empty();
        for c in 0..5 {
            board.set(Coord(0, c), Some(Color::White));
        }
        board.set(Coord(7, 7), Some(Color::Black));
        // White has 5 of the threshold 10: Black's mercy factor is 0.5.
        assert_eq!(ethics_score(&config, &board, Color::Black), 0.5);
        // Black has 1 stone: White's mercy factor is 0.1.
        assert_eq!(ethics_score(&config, &board, Color::White), 0.1);
    }

    #[test]
    fn test_mercy_caps_at_one() {
        let config = ConceptConfig {
            mercy_threshold: 2,
            ..ConceptConfig::default()
        };
        let board = Board::new();
        assert_eq!(ethics_score(&config, &board, Color::Black), 1.0);
    }
}
