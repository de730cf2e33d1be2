//! Pieces and the factory that builds them.

use crate::movegen;
use crate::Board;
use chess_core::{Color, PieceType, Position};
use std::collections::BTreeSet;

/// A stable handle to a piece inside a [`Board`].
///
/// Handles survive cloning the board: the clone holds the same pieces under
/// the same ids. A handle to a captured or promoted piece resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

/// A chess piece standing on a board.
///
/// The piece knows its type, color and square, plus whether its first move
/// is still available (which only matters for the pawn's two-square advance).
/// It never holds a reference to the board; every board-dependent query takes
/// the board as a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    color: Color,
    pub(crate) position: Position,
    pub(crate) first_move_available: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    pub const fn new(piece_type: PieceType, color: Color, position: Position) -> Self {
        Piece {
            piece_type,
            color,
            position,
            first_move_available: true,
        }
    }

    #[inline]
    pub const fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_white(&self) -> bool {
        self.color.is_white()
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns true until the piece has made a successful move.
    #[inline]
    pub const fn first_move_available(&self) -> bool {
        self.first_move_available
    }

    /// Returns the squares this piece threatens.
    ///
    /// A threatened square is not necessarily a legal move: moving there may
    /// expose the piece's own king. Squares holding a piece of the same color
    /// are never included.
    pub fn attacking_positions(&self, board: &Board) -> BTreeSet<Position> {
        movegen::attacks(self, board)
    }

    /// Returns the squares this piece may legally move to.
    ///
    /// Every candidate from [`attacking_positions`](Self::attacking_positions)
    /// is played out on a copy of the board and kept only if the mover's king
    /// is not in check afterwards. The current square is never included.
    /// A piece that is not standing on `board` has no legal moves.
    pub fn legal_moves(&self, board: &Board) -> BTreeSet<Position> {
        let Some(id) = board.piece_id_at(self.position) else {
            return BTreeSet::new();
        };
        if board.piece(id) != Some(self) {
            return BTreeSet::new();
        }

        self.attacking_positions(board)
            .into_iter()
            .filter(|&to| board.is_move_safe(id, to))
            .collect()
    }

    /// Returns true if any opposing piece threatens this piece's square.
    pub fn is_under_attack(&self, board: &Board) -> bool {
        board
            .pieces_of(self.color.opposite())
            .any(|attacker| attacker.attacking_positions(board).contains(&self.position))
    }
}

/// Builds pieces of one color.
///
/// Used for the starting arrangement and for promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceFactory {
    color: Color,
}

impl PieceFactory {
    /// Creates a factory for pieces of the given color.
    pub const fn new(color: Color) -> Self {
        PieceFactory { color }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Creates a fresh piece of the given type at `position`.
    pub const fn create(&self, piece_type: PieceType, position: Position) -> Piece {
        Piece::new(piece_type, self.color, position)
    }
}
