//! # Player Implementations
//!
//! Baseline opponents plus the language-model adapter. Every player is an
//! independent value satisfying the [`crate::Player`] capability trait; there
//! is no shared base type. Baselines mirror the classic trio:
//!
//! - [`random::RandomPlayer`]: uniform choice among legal moves
//! - [`greedy::GreedyPlayer`]: maximizes stones flipped this turn
//! - [`corner::CornerPlayer`]: static positional weights (corners > edges)
//! - [`llm::LlmPlayer`]: forwards a rendered prompt to an injected transport
//!   and parses the textual reply

pub mod corner;
pub mod greedy;
pub mod llm;
pub mod random;

pub use corner::CornerPlayer;
pub use greedy::GreedyPlayer;
pub use llm::{FallbackPolicy, LlmPlayer, ParsedReply, TransportError};
pub use random::RandomPlayer;
