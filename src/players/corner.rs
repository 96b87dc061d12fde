//! Positional baseline: corners above all, edges next, squares adjacent to
//! corners actively avoided. Uses the classic static weight table.

use crate::board::{Color, SIZE};
use crate::{Action, BoardView, Player};

/// Corner > edge > center weights; heavily negative next to corners.
const WEIGHTS: [[i32; SIZE]; SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

pub struct CornerPlayer {
    name: String,
}

impl CornerPlayer {
    pub fn new(color: Color) -> Self {
        CornerPlayer {
            name: format!("Corner-{}", color.letter()),
        }
    }
}

impl Player for CornerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &BoardView) -> Action {
        view.legal_moves
            .iter()
            .max_by_key(|&&at| WEIGHTS[at.0][at.1])
            .map(|&at| Action::Place(at))
            .unwrap_or(Action::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Coord};
    use crate::protocols::ProtocolKind;

    #[test]
    fn test_takes_the_corner_when_offered() {
        // A1 is legal for Black via the top row.
        let mut board = Board::empty();
        board.set(Coord(0, 1), Some(Color::White));
        board.set(Coord(0, 2), Some(Color::Black));
        board.set(Coord(5, 5), Some(Color::White));
        board.set(Coord(5, 6), Some(Color::Black));
        let view = BoardView::of(&board, Color::Black, ProtocolKind::Concept);
        assert!(view.legal_moves.contains(&Coord(0, 0)));
        let mut player = CornerPlayer::new(Color::Black);
        assert_eq!(player.decide(&view), Action::Place(Coord(0, 0)));
    }

    #[test]
    fn test_passes_without_moves() {
        let board = Board::empty();
        let view = BoardView::of(&board, Color::White, ProtocolKind::Concept);
        let mut player = CornerPlayer::new(Color::White);
        assert_eq!(player.decide(&view), Action::Pass);
    }
}
