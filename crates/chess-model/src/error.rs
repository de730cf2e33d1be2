//! Error types for board setup and move application.

use crate::PieceId;
use chess_core::{Color, PieceType, Position};
use thiserror::Error;

/// Reasons a move can be refused.
///
/// A refused move never mutates the board or the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPiece(Position),

    #[error("piece {0:?} is not on the board")]
    UnknownPiece(PieceId),

    #[error("piece at {position} belongs to {color}, who is not to move")]
    WrongTurn { position: Position, color: Color },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceType),
}

/// Reasons a piece cannot be placed on a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("position {0} is off the board")]
    OffBoard(Position),

    #[error("position {0} is already occupied")]
    Occupied(Position),

    #[error("{0} already has a king on the board")]
    DuplicateKing(Color),
}
