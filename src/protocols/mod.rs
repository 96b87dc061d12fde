//! # Variant Protocols
//!
//! Four independent rule perturbations layered on the standard game. Each is
//! a small hook the arena loop invokes at a fixed point of the turn cycle;
//! protocols never talk to each other and carry their own configuration.
//!
//! - [`babel`]: corrupts the message (board view) handed to a player
//! - [`retro`]: schedules time quakes against the causal history ledger
//! - [`schrodinger`]: superposed stones that collapse on decoherence events
//! - [`concept`]: aesthetics and ethics terms in the final score

pub mod babel;
pub mod concept;
pub mod retro;
pub mod schrodinger;

pub use babel::BabelConfig;
pub use concept::ConceptConfig;
pub use retro::RetroConfig;
pub use schrodinger::QuantumConfig;

use std::fmt;

/// Which rule-set a game runs under. Fixed at game construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ProtocolKind {
    /// Communication breakdown: corrupted board views.
    Babel,
    /// Time paradoxes: retro-causal history erasure.
    Retro,
    /// Quantum uncertainty: superposition and collapse.
    Schrodinger,
    /// Aesthetics and ethics: victory is more than stone count.
    Concept,
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtocolKind::Babel => "BABEL",
            ProtocolKind::Retro => "RETRO",
            ProtocolKind::Schrodinger => "SCHRODINGER",
            ProtocolKind::Concept => "CONCEPT",
        };
        write!(f, "{}", name)
    }
}

impl ProtocolKind {
    pub const ALL: [ProtocolKind; 4] = [
        ProtocolKind::Babel,
        ProtocolKind::Retro,
        ProtocolKind::Schrodinger,
        ProtocolKind::Concept,
    ];
}
