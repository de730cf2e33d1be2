//! Attack generation for every piece type.
//!
//! Each piece type maps to a pure geometry function over the board. Sliding
//! pieces walk a direction until they leave the board or hit an occupied
//! square; the occupied square is included when it holds an enemy piece.
//! None of these functions consider whether the move would expose the
//! mover's own king; that filtering lives in [`Piece::legal_moves`].

use crate::{Board, Piece};
use chess_core::{Color, PieceType, Position};
use std::collections::BTreeSet;

/// (rank, file) steps for the rook.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// (rank, file) steps for the bishop.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// (rank, file) jumps for the knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
];

/// (rank, file) steps for the king.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Offsets `from` by the given rank and file deltas.
///
/// Returns `None` when a coordinate would drop below zero; callers still need
/// to check the result against the board's bounds.
#[inline]
pub fn step(from: Position, rank_delta: i8, file_delta: i8) -> Option<Position> {
    let rank = from.rank.checked_add_signed(rank_delta)?;
    let file = from.file.checked_add_signed(file_delta)?;
    Some(Position::new(rank, file))
}

/// Returns the squares the given piece threatens on `board`.
pub fn attacks(piece: &Piece, board: &Board) -> BTreeSet<Position> {
    let from = piece.position();
    let color = piece.color();
    match piece.piece_type() {
        PieceType::Pawn => pawn_attacks(from, color, piece.first_move_available(), board),
        PieceType::Rook => rook_attacks(from, color, board),
        PieceType::Knight => knight_attacks(from, color, board),
        PieceType::Bishop => bishop_attacks(from, color, board),
        PieceType::Queen => queen_attacks(from, color, board),
        PieceType::King => king_attacks(from, color, board),
    }
}

/// Rook attacks: the four straight lines.
pub fn rook_attacks(from: Position, color: Color, board: &Board) -> BTreeSet<Position> {
    slide(from, color, board, &ROOK_DIRECTIONS)
}

/// Bishop attacks: the four diagonals.
pub fn bishop_attacks(from: Position, color: Color, board: &Board) -> BTreeSet<Position> {
    slide(from, color, board, &BISHOP_DIRECTIONS)
}

/// Queen attacks: rook and bishop lines combined.
pub fn queen_attacks(from: Position, color: Color, board: &Board) -> BTreeSet<Position> {
    let mut attacks = rook_attacks(from, color, board);
    attacks.extend(bishop_attacks(from, color, board));
    attacks
}

/// Knight attacks: eight jumps that cannot be blocked.
pub fn knight_attacks(from: Position, color: Color, board: &Board) -> BTreeSet<Position> {
    leap(from, color, board, &KNIGHT_OFFSETS)
}

/// King attacks: the eight neighbouring squares.
pub fn king_attacks(from: Position, color: Color, board: &Board) -> BTreeSet<Position> {
    leap(from, color, board, &KING_OFFSETS)
}

/// Pawn moves and captures.
///
/// - one square forward if it is empty
/// - two squares forward if the first move is still available and both
///   squares ahead are empty
/// - one square diagonally forward only when an enemy piece stands there
pub fn pawn_attacks(
    from: Position,
    color: Color,
    first_move_available: bool,
    board: &Board,
) -> BTreeSet<Position> {
    let mut attacks = BTreeSet::new();
    let forward = color.pawn_direction();

    let is_free = |square: Position| {
        board.is_position_on_board(square) && board.get_piece(square).is_none()
    };

    if let Some(one) = step(from, forward, 0).filter(|&sq| is_free(sq)) {
        attacks.insert(one);

        if first_move_available {
            if let Some(two) = step(from, 2 * forward, 0).filter(|&sq| is_free(sq)) {
                attacks.insert(two);
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(diagonal) = step(from, forward, file_delta) else {
            continue;
        };
        let holds_enemy = board
            .get_piece(diagonal)
            .is_some_and(|occupant| occupant.color() != color);
        if holds_enemy && board.is_position_possible(color, diagonal) {
            attacks.insert(diagonal);
        }
    }

    attacks
}

fn slide(
    from: Position,
    color: Color,
    board: &Board,
    directions: &[(i8, i8)],
) -> BTreeSet<Position> {
    let mut attacks = BTreeSet::new();

    for &(rank_delta, file_delta) in directions {
        let mut current = from;
        while let Some(next) = step(current, rank_delta, file_delta) {
            if !board.is_position_on_board(next) {
                break;
            }
            if board.is_position_possible(color, next) {
                attacks.insert(next);
            }
            if board.get_piece(next).is_some() {
                break;
            }
            current = next;
        }
    }

    attacks
}

fn leap(
    from: Position,
    color: Color,
    board: &Board,
    offsets: &[(i8, i8)],
) -> BTreeSet<Position> {
    offsets
        .iter()
        .filter_map(|&(rank_delta, file_delta)| step(from, rank_delta, file_delta))
        .filter(|&to| board.is_position_possible(color, to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Size;

    fn pos(rank: u8, file: u8) -> Position {
        Position::new(rank, file)
    }

    fn place(board: &mut Board, piece_type: PieceType, color: Color, at: Position) {
        board.place(Piece::new(piece_type, color, at)).unwrap();
    }

    #[test]
    fn step_refuses_to_underflow() {
        assert_eq!(step(pos(1, 1), -1, 0), Some(pos(0, 1)));
        assert_eq!(step(pos(1, 1), -2, 0), None);
        assert_eq!(step(pos(1, 1), 0, -2), None);
        assert_eq!(step(pos(4, 4), 2, -1), Some(pos(6, 3)));
    }

    #[test]
    fn rook_stops_on_first_capture() {
        let mut board = Board::empty(Size::STANDARD);
        place(&mut board, PieceType::Rook, Color::White, pos(1, 1));
        place(&mut board, PieceType::Knight, Color::Black, pos(1, 4));

        let attacks = rook_attacks(pos(1, 1), Color::White, &board);
        assert!(attacks.contains(&pos(1, 2)));
        assert!(attacks.contains(&pos(1, 3)));
        assert!(attacks.contains(&pos(1, 4)));
        assert!(!attacks.contains(&pos(1, 5)));
        assert!(!attacks.contains(&pos(1, 8)));
        // The open file is walked to the edge.
        assert!(attacks.contains(&pos(8, 1)));
        assert_eq!(attacks.len(), 3 + 7);
    }

    #[test]
    fn sliders_stop_before_own_pieces() {
        let mut board = Board::empty(Size::STANDARD);
        place(&mut board, PieceType::Bishop, Color::White, pos(1, 3));
        place(&mut board, PieceType::Pawn, Color::White, pos(3, 5));

        let attacks = bishop_attacks(pos(1, 3), Color::White, &board);
        assert_eq!(
            attacks.into_iter().collect::<Vec<_>>(),
            vec![pos(2, 2), pos(2, 4), pos(3, 1)]
        );
    }

    #[test]
    fn queen_from_the_corner_of_an_empty_board() {
        let board = Board::empty(Size::STANDARD);
        let attacks = queen_attacks(pos(1, 1), Color::White, &board);
        assert_eq!(attacks.len(), 21);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::new();
        let attacks = knight_attacks(pos(1, 2), Color::White, &board);
        assert_eq!(
            attacks.into_iter().collect::<Vec<_>>(),
            vec![pos(3, 1), pos(3, 3)]
        );
    }

    #[test]
    fn king_in_the_middle_of_an_empty_board() {
        let board = Board::empty(Size::STANDARD);
        assert_eq!(king_attacks(pos(4, 4), Color::Black, &board).len(), 8);
        assert_eq!(king_attacks(pos(1, 8), Color::Black, &board).len(), 3);
    }

    #[test]
    fn pawn_pushes_from_the_starting_rank() {
        let board = Board::new();
        let white = pawn_attacks(pos(2, 5), Color::White, true, &board);
        assert_eq!(white.into_iter().collect::<Vec<_>>(), vec![pos(3, 5), pos(4, 5)]);

        let black = pawn_attacks(pos(7, 5), Color::Black, true, &board);
        assert_eq!(black.into_iter().collect::<Vec<_>>(), vec![pos(5, 5), pos(6, 5)]);
    }

    #[test]
    fn pawn_double_push_needs_first_move() {
        let board = Board::empty(Size::STANDARD);
        let attacks = pawn_attacks(pos(3, 5), Color::White, false, &board);
        assert_eq!(attacks.into_iter().collect::<Vec<_>>(), vec![pos(4, 5)]);
    }

    #[test]
    fn pawn_is_blocked_straight_ahead() {
        let mut board = Board::empty(Size::STANDARD);
        place(&mut board, PieceType::Pawn, Color::White, pos(2, 5));
        place(&mut board, PieceType::Pawn, Color::Black, pos(3, 5));
        assert!(pawn_attacks(pos(2, 5), Color::White, true, &board).is_empty());

        // A blocker two squares ahead still allows the single step.
        let mut board = Board::empty(Size::STANDARD);
        place(&mut board, PieceType::Pawn, Color::White, pos(2, 5));
        place(&mut board, PieceType::Knight, Color::Black, pos(4, 5));
        let attacks = pawn_attacks(pos(2, 5), Color::White, true, &board);
        assert_eq!(attacks.into_iter().collect::<Vec<_>>(), vec![pos(3, 5)]);
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let mut board = Board::empty(Size::STANDARD);
        place(&mut board, PieceType::Pawn, Color::White, pos(4, 4));
        place(&mut board, PieceType::Rook, Color::Black, pos(5, 5));
        place(&mut board, PieceType::Rook, Color::White, pos(5, 3));

        let attacks = pawn_attacks(pos(4, 4), Color::White, false, &board);
        assert_eq!(attacks.into_iter().collect::<Vec<_>>(), vec![pos(5, 4), pos(5, 5)]);
    }

    #[test]
    fn pawn_on_the_edge_file() {
        let mut board = Board::empty(Size::STANDARD);
        place(&mut board, PieceType::Pawn, Color::Black, pos(7, 1));
        place(&mut board, PieceType::Bishop, Color::White, pos(6, 2));

        let attacks = pawn_attacks(pos(7, 1), Color::Black, true, &board);
        assert_eq!(
            attacks.into_iter().collect::<Vec<_>>(),
            vec![pos(5, 1), pos(6, 1), pos(6, 2)]
        );
    }

    #[test]
    fn attacks_respect_smaller_boards() {
        let board = Board::empty(Size::new(5, 5));
        assert_eq!(rook_attacks(pos(3, 3), Color::White, &board).len(), 8);
        assert_eq!(knight_attacks(pos(3, 3), Color::White, &board).len(), 8);
        assert_eq!(knight_attacks(pos(5, 5), Color::White, &board).len(), 2);
    }
}
