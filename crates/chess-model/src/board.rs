//! The board: an arena of pieces plus the queries move generation needs.

use crate::{MoveError, Piece, PieceFactory, PieceId, PlacementError};
use chess_core::{Color, PieceType, Position, Size};
use std::fmt;

/// Back rank arrangement, file 1 to file 8.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// What a successful move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The moved piece, or its replacement after a promotion.
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    /// The piece that stood on `to` before the move.
    pub captured: Option<Piece>,
    /// Set when a pawn reached the far rank.
    pub promoted_to: Option<PieceType>,
}

/// A chessboard that owns its pieces.
///
/// Pieces live in an arena addressed by [`PieceId`]. Slots are never reused,
/// so a handle to a removed piece stays dead instead of aliasing a newer one.
/// Cloning the board deep-copies every piece, hidden state included, and the
/// clone keeps the same handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: Size,
    slots: Vec<Option<Piece>>,
    kings: [Option<PieceId>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a standard board with the 16 + 16 starting arrangement.
    pub fn new() -> Self {
        let mut board = Board::empty(Size::STANDARD);

        for color in Color::ALL {
            let factory = PieceFactory::new(color);
            let (back, front) = match color {
                Color::White => (1, 2),
                Color::Black => (8, 7),
            };
            for (file, piece_type) in (1..).zip(BACK_RANK) {
                board.insert(factory.create(piece_type, Position::new(back, file)));
            }
            for file in 1..=8 {
                board.insert(factory.create(PieceType::Pawn, Position::new(front, file)));
            }
        }

        board
    }

    /// Creates a board of the given size with no pieces on it.
    pub fn empty(size: Size) -> Self {
        Board {
            size,
            slots: Vec::with_capacity(32),
            kings: [None; 2],
        }
    }

    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the number of pieces on the board.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns true if no pieces are on the board.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every piece on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().flatten()
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color() == color)
    }

    /// Iterates over the handles of every piece on the board.
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| PieceId(index))
    }

    /// Iterates over the handles of one color's pieces.
    pub fn piece_ids_of(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.piece_ids()
            .filter(move |&id| self.piece(id).is_some_and(|piece| piece.color() == color))
    }

    /// Resolves a handle.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Returns the piece standing on `position`, if any.
    pub fn get_piece(&self, position: Position) -> Option<&Piece> {
        self.pieces().find(|piece| piece.position() == position)
    }

    /// Returns the handle of the piece standing on `position`, if any.
    pub fn piece_id_at(&self, position: Position) -> Option<PieceId> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|piece| piece.position() == position))
            .map(PieceId)
    }

    /// Returns the king of the given color.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.kings[color.index()].and_then(|id| self.piece(id))
    }

    /// Puts a piece on the board.
    ///
    /// Fails if the square is off the board or taken, or if the piece is a
    /// second king for its color.
    pub fn place(&mut self, piece: Piece) -> Result<PieceId, PlacementError> {
        let position = piece.position();
        if !self.is_position_on_board(position) {
            return Err(PlacementError::OffBoard(position));
        }
        if self.get_piece(position).is_some() {
            return Err(PlacementError::Occupied(position));
        }
        if piece.piece_type() == PieceType::King && self.king(piece.color()).is_some() {
            return Err(PlacementError::DuplicateKing(piece.color()));
        }
        Ok(self.insert(piece))
    }

    /// Takes a piece off the board, returning it.
    ///
    /// Returns `None` if the handle does not resolve to a piece.
    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let removed = self.slots.get_mut(id.0)?.take()?;
        let king_slot = &mut self.kings[removed.color().index()];
        if *king_slot == Some(id) {
            *king_slot = None;
        }
        Some(removed)
    }

    /// Replaces a piece with a fresh piece of `new_type` on the same square.
    ///
    /// Kings and pawns are not valid promotion targets; asking for one (or
    /// passing a dead handle) returns `None` and leaves the board untouched.
    pub fn promote_piece(&mut self, id: PieceId, new_type: PieceType) -> Option<PieceId> {
        if !new_type.is_promotion_target() {
            return None;
        }
        let old = self.remove_piece(id)?;
        let promoted = PieceFactory::new(old.color()).create(new_type, old.position());
        let new_id = self.insert(promoted);
        tracing::debug!(
            position = %old.position(),
            from = %old.piece_type(),
            to = %new_type,
            "promoted piece"
        );
        Some(new_id)
    }

    /// Returns true if `position` lies within the board.
    pub fn is_position_on_board(&self, position: Position) -> bool {
        (1..=self.size.ranks).contains(&position.rank)
            && (1..=self.size.files).contains(&position.file)
    }

    /// Returns true if a piece of `color` could occupy `position`: the square
    /// is on the board and not held by a piece of the same color.
    pub fn is_position_possible(&self, color: Color, position: Position) -> bool {
        self.is_position_on_board(position)
            && !self
                .get_piece(position)
                .is_some_and(|occupant| occupant.color() == color)
    }

    /// Returns true if the `color` piece on `from` may legally move to `to`.
    ///
    /// Unlike [`is_position_possible`](Self::is_position_possible) this takes
    /// the mover's king safety into account.
    pub fn is_position_legal(&self, color: Color, from: Position, to: Position) -> bool {
        self.get_piece(from)
            .filter(|piece| piece.color() == color)
            .is_some_and(|piece| piece.legal_moves(self).contains(&to))
    }

    /// Returns true if the king of `color` is attacked.
    ///
    /// A color without a king on the board is never in check.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king(color).is_some_and(|king| king.is_under_attack(self))
    }

    /// Moves a piece after checking that `to` is one of its legal moves.
    ///
    /// Any piece on `to` is captured. A pawn reaching the far rank for its
    /// color is promoted to `promotion`, or to a queen when none is given.
    /// On error the board is unchanged.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = self.piece(id).ok_or(MoveError::UnknownPiece(id))?;
        let from = piece.position();

        if let Some(piece_type) = promotion.filter(|piece_type| !piece_type.is_promotion_target()) {
            return Err(MoveError::InvalidPromotion(piece_type));
        }
        if !piece.legal_moves(self).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let reaches_far_rank =
            piece.piece_type() == PieceType::Pawn && to.rank == self.far_rank(piece.color());

        let captured = self.relocate(id, to);
        if let Some(captured) = &captured {
            tracing::debug!(
                at = %to,
                piece = %captured.piece_type(),
                color = %captured.color(),
                "captured piece"
            );
        }

        let mut outcome = MoveOutcome {
            piece: id,
            from,
            to,
            captured,
            promoted_to: None,
        };

        if reaches_far_rank {
            let piece_type = promotion.unwrap_or(PieceType::Queen);
            if let Some(new_id) = self.promote_piece(id, piece_type) {
                outcome.piece = new_id;
                outcome.promoted_to = Some(piece_type);
            }
        }

        Ok(outcome)
    }

    /// Returns a copy of the board in which the piece behind `id` has moved
    /// to `to`, without any legality checks.
    pub(crate) fn simulate(&self, id: PieceId, to: Position) -> Board {
        let mut copy = self.clone();
        copy.relocate(id, to);
        copy
    }

    /// Returns true if moving `id` to `to` leaves its own king out of check.
    pub(crate) fn is_move_safe(&self, id: PieceId, to: Position) -> bool {
        let Some(color) = self.piece(id).map(Piece::color) else {
            return false;
        };
        let safe = !self.simulate(id, to).is_king_in_check(color);
        if !safe {
            tracing::trace!(piece = ?id, %to, "candidate leaves king in check");
        }
        safe
    }

    /// The rank a pawn of `color` promotes on.
    pub const fn far_rank(&self, color: Color) -> u8 {
        match color {
            Color::White => self.size.ranks,
            Color::Black => 1,
        }
    }

    /// Moves a piece without validating the move, capturing whatever stands
    /// on `to`.
    fn relocate(&mut self, id: PieceId, to: Position) -> Option<Piece> {
        let captured = self
            .piece_id_at(to)
            .filter(|&occupant| occupant != id)
            .and_then(|occupant| self.remove_piece(occupant));

        if let Some(piece) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            piece.position = to;
            piece.first_move_available = false;
        }

        captured
    }

    fn insert(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.slots.len());
        if piece.piece_type() == PieceType::King {
            self.kings[piece.color().index()] = Some(id);
        }
        self.slots.push(Some(piece));
        id
    }
}

impl fmt::Display for Board {
    /// Draws the board with the highest rank at the top. White pieces are
    /// uppercase, black pieces lowercase, empty squares `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=self.size.ranks).rev() {
            write!(f, "{:>2}", rank)?;
            for file in 1..=self.size.files {
                let symbol = self
                    .get_piece(Position::new(rank, file))
                    .map_or('.', |piece| piece.piece_type().symbol(piece.color()));
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 1..=self.size.files {
            write!(f, " {}", file % 10)?;
        }
        writeln!(f)
    }
}
