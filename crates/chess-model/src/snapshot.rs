//! Read-only, serializable views of a board for renderers.

use crate::{Board, Game};
use chess_core::{Color, PieceType, Position, Size};
use serde::{Deserialize, Serialize};

/// One piece as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub piece_type: PieceType,
    pub color: Color,
    pub position: Position,
}

/// Every piece on a board, in rank-major square order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Size,
    pub side_to_move: Option<Color>,
    pub pieces: Vec<PieceSnapshot>,
}

impl Board {
    /// Captures the board's pieces.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut pieces: Vec<PieceSnapshot> = self
            .pieces()
            .map(|piece| PieceSnapshot {
                piece_type: piece.piece_type(),
                color: piece.color(),
                position: piece.position(),
            })
            .collect();
        pieces.sort_by_key(|piece| piece.position);

        BoardSnapshot {
            size: self.size(),
            side_to_move: None,
            pieces,
        }
    }
}

impl Game {
    /// Captures the board together with the side to move.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            side_to_move: Some(self.side_to_move()),
            ..self.board().snapshot()
        }
    }
}
