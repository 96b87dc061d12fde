//! # Game Master - Authoritative Game State
//!
//! The single source of truth for one funhouse game. All moves are validated
//! here before they touch the physical board; players, protocols, and the
//! reporting layer only ever see clones or references.
//!
//! The active protocol is fixed at construction. There is no ambient
//! "current mode" that can be flipped mid-game: each run owns its own
//! configuration, master, and ledger instance.

use crate::board::{Board, Color, Coord};
use crate::protocols::ProtocolKind;

/// Result of attempting to commit a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The stone was placed; carries the cells flipped by the placement.
    Placed { flipped: Vec<Coord> },
    /// The mover passed (either voluntarily or because the submitted move
    /// was rejected).
    Passed,
    /// Move was rejected as invalid.
    Invalid { reason: MoveValidationError },
    /// Game is already over, no more moves allowed.
    GameOver,
}

/// Why a submitted move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveValidationError {
    /// Not in the set of legal placements for the side to move.
    IllegalMove,
    /// The game is already in a terminal state.
    GameAlreadyOver,
}

impl std::fmt::Display for MoveValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveValidationError::IllegalMove => write!(f, "illegal move"),
            MoveValidationError::GameAlreadyOver => write!(f, "game is already over"),
        }
    }
}

/// Current game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Game ended with a winner.
    Win(Color),
    Draw,
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Owns the authoritative board, the side to move, and the turn counter.
#[derive(Debug, Clone)]
pub struct GameMaster {
    board: Board,
    to_move: Color,
    turn_count: usize,
    protocol: ProtocolKind,
    status: GameStatus,
}

impl GameMaster {
    /// Fresh game under the given protocol. Black moves first.
    pub fn new(protocol: ProtocolKind) -> Self {
        GameMaster {
            board: Board::new(),
            to_move: Color::Black,
            turn_count: 0,
            protocol,
            status: GameStatus::InProgress,
        }
    }

    /// Validate a placement for the side to move without applying it.
    pub fn validate_move(&self, at: Coord) -> Result<(), MoveValidationError> {
        if self.status.is_game_over() {
            return Err(MoveValidationError::GameAlreadyOver);
        }
        if !self.board.is_valid_move(self.to_move, at) {
            return Err(MoveValidationError::IllegalMove);
        }
        Ok(())
    }

    /// Attempt to place a stone for the side to move.
    ///
    /// On success the stone is placed, sandwiched stones flip, the turn
    /// counter advances, and the turn passes to the opponent (even if the
    /// opponent has no move - forced passes are the arena loop's call, so
    /// they land in the ledger as explicit turns).
    pub fn try_place(&mut self, at: Coord) -> MoveResult {
        if let Err(reason) = self.validate_move(at) {
            if reason == MoveValidationError::GameAlreadyOver {
                return MoveResult::GameOver;
            }
            tracing::warn!(mover = %self.to_move, cell = %at, %reason, "move rejected");
            return MoveResult::Invalid { reason };
        }
        let flipped = self.board.apply(self.to_move, at);
        tracing::debug!(
            turn = self.turn_count,
            mover = %self.to_move,
            cell = %at,
            flips = flipped.len(),
            "stone placed"
        );
        self.advance();
        MoveResult::Placed { flipped }
    }

    /// Commit a pass for the side to move.
    pub fn pass(&mut self) -> MoveResult {
        if self.status.is_game_over() {
            return MoveResult::GameOver;
        }
        tracing::debug!(turn = self.turn_count, mover = %self.to_move, "pass");
        self.advance();
        MoveResult::Passed
    }

    fn advance(&mut self) {
        self.turn_count += 1;
        self.to_move = self.to_move.opponent();
        if self.board.is_game_over() {
            let (black, white) = self.board.counts();
            self.status = if black > white {
                GameStatus::Win(Color::Black)
            } else if white > black {
                GameStatus::Win(Color::White)
            } else {
                GameStatus::Draw
            };
        }
    }

    /// Re-evaluates terminal status after an out-of-band board mutation
    /// (a quantum collapse can open or close lines for both sides).
    pub fn refresh_status(&mut self) {
        if self.status.is_game_over() && !self.board.is_game_over() {
            self.status = GameStatus::InProgress;
        } else if !self.status.is_game_over() && self.board.is_game_over() {
            let (black, white) = self.board.counts();
            self.status = if black > white {
                GameStatus::Win(Color::Black)
            } else if white > black {
                GameStatus::Win(Color::White)
            } else {
                GameStatus::Draw
            };
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for protocol events that bypass normal move
    /// application (quantum collapse). Not used by regular play.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn protocol(&self) -> ProtocolKind {
        self.protocol
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Win(c) => Some(c),
            _ => None,
        }
    }

    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.status.is_game_over() {
            Vec::new()
        } else {
            self.board.legal_moves(self.to_move)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_placement() {
        let mut master = GameMaster::new(ProtocolKind::Retro);
        match master.try_place(Coord(2, 3)) {
            MoveResult::Placed { flipped } => assert_eq!(flipped, vec![Coord(3, 3)]),
            other => panic!("expected placement, got {other:?}"),
        }
        assert_eq!(master.to_move(), Color::White);
        assert_eq!(master.turn_count(), 1);
    }

    #[test]
    fn test_illegal_placement_rejected() {
        let mut master = GameMaster::new(ProtocolKind::Babel);
        match master.try_place(Coord(0, 0)) {
            MoveResult::Invalid { reason } => {
                assert_eq!(reason, MoveValidationError::IllegalMove)
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        // Rejection consumes nothing: still Black to move, turn 0.
        assert_eq!(master.to_move(), Color::Black);
        assert_eq!(master.turn_count(), 0);
    }

    #[test]
    fn test_pass_advances_turn() {
        let mut master = GameMaster::new(ProtocolKind::Concept);
        assert_eq!(master.pass(), MoveResult::Passed);
        assert_eq!(master.to_move(), Color::White);
        assert_eq!(master.turn_count(), 1);
        assert!(!master.is_game_over());
    }

    #[test]
    fn test_legal_moves_from_start() {
        let master = GameMaster::new(ProtocolKind::Schrodinger);
        assert_eq!(
            master.legal_moves(),
            vec![Coord(2, 3), Coord(3, 2), Coord(4, 5), Coord(5, 4)]
        );
    }

    #[test]
    fn test_protocol_fixed_at_construction() {
        let master = GameMaster::new(ProtocolKind::Retro);
        assert_eq!(master.protocol(), ProtocolKind::Retro);
    }
}
