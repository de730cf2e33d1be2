//! Piece type representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Returns the board-diagram letter for this piece with the given color.
    ///
    /// White pieces are uppercase, black pieces lowercase.
    pub const fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Returns true if a pawn may be promoted to this piece type.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceType::Pawn | PieceType::King)
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Rook => "Rook",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}
