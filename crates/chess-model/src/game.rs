//! Turn management on top of a [`Board`].
//!
//! The [`Game`] struct is the single entry point for playing moves:
//! - it refuses moves from the wrong side or from empty squares
//! - it only accepts destinations that survive the check-safety filter
//! - it flips the side to move after every accepted move

use crate::{Board, MoveError, MoveOutcome, Piece};
use chess_core::{Color, PieceType, Position};
use std::collections::BTreeSet;

/// A game of chess: one board and whose turn it is.
///
/// The board is mutated in place for the lifetime of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position and White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
        }
    }

    /// Creates a game from a custom board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns true if White is to move next.
    pub fn is_white_move(&self) -> bool {
        self.side_to_move.is_white()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_king_in_check(self.side_to_move)
    }

    /// Returns the piece on `position`, if any.
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.board.get_piece(position)
    }

    /// Returns the legal destinations of the piece on `position`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    pub fn legal_moves_from(&self, position: Position) -> BTreeSet<Position> {
        self.board
            .get_piece(position)
            .filter(|piece| piece.color() == self.side_to_move)
            .map(|piece| piece.legal_moves(&self.board))
            .unwrap_or_default()
    }

    /// Returns every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        self.board
            .pieces_of(self.side_to_move)
            .flat_map(|piece| {
                let from = piece.position();
                piece
                    .legal_moves(&self.board)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Moves the piece on `from` to `to`, promoting to a queen if a pawn
    /// reaches the far rank.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        self.apply(from, to, None)
    }

    /// Moves the piece on `from` to `to`, promoting to `promotion` if a pawn
    /// reaches the far rank.
    ///
    /// Kings and pawns are refused as promotion targets even when the move
    /// would not promote.
    pub fn make_move_with_promotion(
        &mut self,
        from: Position,
        to: Position,
        promotion: PieceType,
    ) -> Result<MoveOutcome, MoveError> {
        self.apply(from, to, Some(promotion))
    }

    fn apply(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Result<MoveOutcome, MoveError> {
        let result = self.try_apply(from, to, promotion);
        match &result {
            Ok(outcome) => tracing::debug!(
                color = %self.side_to_move.opposite(),
                %from,
                %to,
                captured = outcome.captured.is_some(),
                "move accepted"
            ),
            Err(error) => tracing::debug!(%from, %to, %error, "move rejected"),
        }
        result
    }

    fn try_apply(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Result<MoveOutcome, MoveError> {
        let (id, color) = self
            .board
            .piece_id_at(from)
            .and_then(|id| self.board.piece(id).map(|piece| (id, piece.color())))
            .ok_or(MoveError::NoPiece(from))?;
        if color != self.side_to_move {
            return Err(MoveError::WrongTurn {
                position: from,
                color,
            });
        }

        let outcome = self.board.move_piece(id, to, promotion)?;
        self.side_to_move = self.side_to_move.opposite();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Size;

    fn pos(rank: u8, file: u8) -> Position {
        Position::new(rank, file)
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert!(game.is_white_move());
        assert_eq!(game.side_to_move(), Color::White);
        assert!(!game.is_check());
        assert_eq!(game.board().len(), 32);
    }

    #[test]
    fn twenty_opening_moves() {
        let game = Game::new();
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn pawn_double_push() {
        let mut game = Game::new();
        game.make_move(pos(2, 5), pos(4, 5)).unwrap();
        assert!(!game.is_white_move());
        assert_eq!(
            game.piece_at(pos(4, 5)).unwrap().piece_type(),
            PieceType::Pawn
        );
        assert!(game.piece_at(pos(2, 5)).is_none());
    }

    #[test]
    fn illegal_move() {
        let mut game = Game::new();
        let before = game.clone();
        let result = game.make_move(pos(2, 5), pos(5, 5)); // Can't move pawn 3 squares
        assert_eq!(
            result,
            Err(MoveError::IllegalMove {
                from: pos(2, 5),
                to: pos(5, 5)
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn empty_square() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(pos(4, 4), pos(5, 4)),
            Err(MoveError::NoPiece(pos(4, 4)))
        );
        assert!(game.is_white_move());
    }

    #[test]
    fn wrong_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(pos(7, 5), pos(5, 5)),
            Err(MoveError::WrongTurn {
                position: pos(7, 5),
                color: Color::Black
            })
        );
        assert!(game.is_white_move());

        game.make_move(pos(2, 5), pos(4, 5)).unwrap();
        game.make_move(pos(7, 5), pos(5, 5)).unwrap();
        assert!(game.is_white_move());
    }

    #[test]
    fn pawn_loses_double_push_after_moving() {
        let mut game = Game::new();
        game.make_move(pos(2, 1), pos(3, 1)).unwrap();
        game.make_move(pos(7, 8), pos(6, 8)).unwrap();
        assert_eq!(
            game.legal_moves_from(pos(3, 1)).into_iter().collect::<Vec<_>>(),
            vec![pos(4, 1)]
        );
    }

    #[test]
    fn legal_moves_from_only_for_side_to_move() {
        let game = Game::new();
        assert_eq!(game.legal_moves_from(pos(1, 2)).len(), 2);
        assert!(game.legal_moves_from(pos(8, 2)).is_empty());
        assert!(game.legal_moves_from(pos(4, 4)).is_empty());
    }

    #[test]
    fn capture_sequence() {
        let mut game = Game::new();
        game.make_move(pos(2, 5), pos(4, 5)).unwrap();
        game.make_move(pos(7, 4), pos(5, 4)).unwrap();
        let outcome = game.make_move(pos(4, 5), pos(5, 4)).unwrap();

        let captured = outcome.captured.unwrap();
        assert_eq!(captured.piece_type(), PieceType::Pawn);
        assert_eq!(captured.color(), Color::Black);
        assert_eq!(game.board().len(), 31);
        assert_eq!(game.board().pieces_of(Color::Black).count(), 15);
    }

    #[test]
    fn check_is_reported_for_side_to_move() {
        let mut game = Game::new();
        game.make_move(pos(2, 6), pos(3, 6)).unwrap();
        game.make_move(pos(7, 5), pos(5, 5)).unwrap();
        game.make_move(pos(2, 7), pos(4, 7)).unwrap();
        game.make_move(pos(8, 4), pos(4, 8)).unwrap();
        assert!(game.is_check());
        // Nothing can answer this check; the game still just reports it.
        assert!(game.legal_moves().is_empty());
        assert!(game.is_white_move());
    }

    #[test]
    fn default_promotion_is_queen() {
        let mut board = Board::empty(Size::STANDARD);
        board
            .place(Piece::new(PieceType::Pawn, Color::White, pos(7, 1)))
            .unwrap();
        let mut game = Game::from_board(board, Color::White);

        let outcome = game.make_move(pos(7, 1), pos(8, 1)).unwrap();
        assert_eq!(outcome.promoted_to, Some(PieceType::Queen));
        let queen = game.piece_at(pos(8, 1)).unwrap();
        assert_eq!(queen.piece_type(), PieceType::Queen);
        assert!(queen.is_white());
        assert!(game
            .board()
            .pieces()
            .all(|piece| piece.piece_type() != PieceType::Pawn));
    }

    #[test]
    fn explicit_promotion() {
        let mut board = Board::empty(Size::STANDARD);
        board
            .place(Piece::new(PieceType::Pawn, Color::White, pos(7, 2)))
            .unwrap();
        board
            .place(Piece::new(PieceType::Rook, Color::Black, pos(8, 3)))
            .unwrap();
        let mut game = Game::from_board(board, Color::White);

        let outcome = game
            .make_move_with_promotion(pos(7, 2), pos(8, 3), PieceType::Knight)
            .unwrap();
        assert_eq!(outcome.promoted_to, Some(PieceType::Knight));
        assert!(outcome.captured.is_some());
        assert_eq!(
            game.piece_at(pos(8, 3)).unwrap().piece_type(),
            PieceType::Knight
        );
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn invalid_promotion_target_is_refused() {
        let mut board = Board::empty(Size::STANDARD);
        board
            .place(Piece::new(PieceType::Pawn, Color::White, pos(7, 1)))
            .unwrap();
        let mut game = Game::from_board(board, Color::White);
        let before = game.clone();

        for target in [PieceType::King, PieceType::Pawn] {
            assert_eq!(
                game.make_move_with_promotion(pos(7, 1), pos(8, 1), target),
                Err(MoveError::InvalidPromotion(target))
            );
        }
        assert_eq!(game, before);
    }
}
