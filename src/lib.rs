//! # Temporal Funhouse
//!
//! An educational Othello arena where four variant rule-sets ("protocols")
//! each distort the game in one way to stress-test an AI player's reasoning:
//!
//! - **BABEL**: the board view handed to a player is occasionally corrupted
//! - **RETRO**: scheduled time quakes erase past turns from the history
//!   ledger, producing detectable temporal paradoxes
//! - **SCHRODINGER**: placed stones sit in superposition and may collapse to
//!   the opposite color
//! - **CONCEPT**: victory is weighted by aesthetics and ethics, not just
//!   stone count
//!
//! The formally interesting piece is [`ledger::CausalLedger`], the RETRO
//! protocol's causal-integrity mechanism. Everything else is a conventional
//! board-game loop with pluggable [`Player`] implementations, including an
//! adapter for externally hosted language-model players.

pub mod arena;
pub mod board;
pub mod game_master;
pub mod ledger;
pub mod players;
pub mod protocols;
pub mod scoring;

use board::{Board, Color, Coord};
use protocols::ProtocolKind;

/// What a player chose to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Place(Coord),
    Pass,
}

/// Everything a player gets to see when deciding a move.
///
/// The board here is a copy, not the authoritative state: under the BABEL
/// protocol it may have been deliberately corrupted, and the legal moves are
/// derived from this copy so a deceived player reasons from what it was told.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub board: Board,
    pub color: Color,
    pub legal_moves: Vec<Coord>,
    pub mode: ProtocolKind,
}

impl BoardView {
    /// Undistorted view of a board for `color`.
    pub fn of(board: &Board, color: Color, mode: ProtocolKind) -> Self {
        BoardView {
            board: board.clone(),
            color,
            legal_moves: board.legal_moves(color),
            mode,
        }
    }
}

/// A player is anything that can pick an action from a board view.
///
/// Implementations take `&mut self` so they can own RNG state or a transport
/// connection; the arena gives each game its own player instances, so no
/// cross-game sharing is needed.
pub trait Player {
    /// Human-readable name used in logs and reports.
    fn name(&self) -> &str;
    /// Pick an action. Returning an illegal placement is allowed (a corrupted
    /// view can make that inevitable); the game master will reject it and the
    /// turn degrades to a pass.
    fn decide(&mut self, view: &BoardView) -> Action;
}
