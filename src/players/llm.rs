//! # Language-Model Player Adapter
//!
//! Plugs an externally hosted LLM into the arena by composition: the adapter
//! owns an injected transport closure that takes a rendered prompt string and
//! returns the provider's raw textual reply. No subclassing, no provider SDK
//! in this crate; an OpenAI/Anthropic/Google integration is a ~5-line closure
//! at the call site.
//!
//! Reply interpretation is split in two layers on purpose:
//! - [`parse_reply`] is a pure function from raw text to a tagged result and
//!   knows nothing about fallbacks;
//! - the recovery policy for unparseable or illegal replies lives in
//!   [`LlmPlayer::decide`] as an explicit [`FallbackPolicy`] value.

use crate::board::{Color, Coord};
use crate::{Action, BoardView, Player};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// The provider call failed (network, auth, provider-side error).
#[derive(Debug, Clone, Error)]
#[error("llm transport failed: {0}")]
pub struct TransportError(pub String);

/// A transport is any closure that turns a prompt into a raw reply.
pub type Transport = Box<dyn FnMut(&str) -> Result<String, TransportError> + Send>;

/// Result of parsing a raw LLM reply. No silent defaults: garbage stays
/// visible as `Unparseable` so the caller decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    Move(Coord),
    Pass,
    Unparseable(String),
}

/// Extracts a move from free-form reply text.
///
/// Accepts "PASS" anywhere in the reply, else the first algebraic cell like
/// "D3" (column A-H, row 1-8), case-insensitive. Pure function; identical
/// input always yields identical output.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let upper = raw.trim().to_uppercase();
    if upper.contains("PASS") {
        return ParsedReply::Pass;
    }
    static CELL: OnceLock<Regex> = OnceLock::new();
    let cell = CELL.get_or_init(|| Regex::new(r"([A-H])([1-8])").expect("static pattern"));
    if let Some(caps) = cell.captures(&upper) {
        let col = caps[1].chars().next().expect("matched A-H") as usize - 'A' as usize;
        let row = caps[2].parse::<usize>().expect("matched 1-8") - 1;
        return ParsedReply::Move(Coord(row, col));
    }
    ParsedReply::Unparseable(raw.to_string())
}

/// Renders the prompt handed to the transport.
pub fn render_prompt(view: &BoardView) -> String {
    format!(
        "You are playing Othello as {} ({}).\n\n\
         Current board state:\n{}\n\
         Current mode: {}\n\n\
         Choose your next move. Return ONLY the move in format \"D3\" or \"PASS\".\n\
         Valid moves are positions where you can flip opponent's stones.\n\n\
         Your move:",
        view.color,
        view.color.letter(),
        view.board.to_text(),
        view.mode,
    )
}

/// What to do when the reply is unusable (transport failure, unparseable
/// text, or a move that is not legal in the player's view).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Play a uniformly random legal move (pass if there is none).
    RandomLegal,
    /// Give the turn up.
    Pass,
}

/// An LLM-backed player: prompt out through the transport, reply parsed,
/// fallback policy applied one layer above the parser.
pub struct LlmPlayer {
    name: String,
    transport: Transport,
    fallback: FallbackPolicy,
    rng: Xoshiro256PlusPlus,
}

impl LlmPlayer {
    pub fn new(
        model_name: &str,
        color: Color,
        transport: Transport,
        fallback: FallbackPolicy,
        seed: u64,
    ) -> Self {
        LlmPlayer {
            name: format!("LLM-{}-{}", model_name, color.letter()),
            transport,
            fallback,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    fn fall_back(&mut self, view: &BoardView, why: &str) -> Action {
        tracing::warn!(player = %self.name, why, policy = ?self.fallback, "llm reply unusable");
        match self.fallback {
            FallbackPolicy::Pass => Action::Pass,
            FallbackPolicy::RandomLegal => {
                if view.legal_moves.is_empty() {
                    Action::Pass
                } else {
                    let pick = self.rng.gen_range(0..view.legal_moves.len());
                    Action::Place(view.legal_moves[pick])
                }
            }
        }
    }
}

impl Player for LlmPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &BoardView) -> Action {
        let prompt = render_prompt(view);
        let raw = match (self.transport)(&prompt) {
            Ok(raw) => raw,
            Err(err) => return self.fall_back(view, &err.to_string()),
        };
        match parse_reply(&raw) {
            ParsedReply::Pass => Action::Pass,
            ParsedReply::Move(at) if view.legal_moves.contains(&at) => Action::Place(at),
            ParsedReply::Move(_) => self.fall_back(view, "move not legal in view"),
            ParsedReply::Unparseable(_) => self.fall_back(view, "no move found in reply"),
        }
    }
}
