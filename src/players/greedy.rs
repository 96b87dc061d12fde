//! Greedy baseline: always the move that flips the most stones right now.

use crate::board::Color;
use crate::{Action, BoardView, Player};

pub struct GreedyPlayer {
    name: String,
}

impl GreedyPlayer {
    pub fn new(color: Color) -> Self {
        GreedyPlayer {
            name: format!("Greedy-{}", color.letter()),
        }
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &BoardView) -> Action {
        view.legal_moves
            .iter()
            .max_by_key(|&&at| view.board.count_flips(view.color, at))
            .map(|&at| Action::Place(at))
            .unwrap_or(Action::Pass)
    }
}
