//! Uniformly random legal play. The weakest baseline and the fallback brain
//! behind the LLM adapter's recovery policy.

use crate::board::Color;
use crate::{Action, BoardView, Player};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub struct RandomPlayer {
    name: String,
    rng: Xoshiro256PlusPlus,
}

impl RandomPlayer {
    pub fn new(color: Color, seed: u64) -> Self {
        RandomPlayer {
            name: format!("Random-{}", color.letter()),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &BoardView) -> Action {
        if view.legal_moves.is_empty() {
            return Action::Pass;
        }
        let pick = self.rng.gen_range(0..view.legal_moves.len());
        Action::Place(view.legal_moves[pick])
    }
}
