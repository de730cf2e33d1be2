//! Text drawing of the board for the terminal.

use chess_core::Position;
use chess_model::{Board, Controller};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Draws `board` with markers.
///
/// Each square is two characters wide: a marker column and the piece letter
/// (`.` when empty). The selected square is marked `>`, highlighted squares
/// `*`.
pub fn draw(board: &Board, selected: Option<Position>, highlights: &BTreeSet<Position>) -> String {
    let size = board.size();
    let mut out = String::new();

    for rank in (1..=size.ranks).rev() {
        let _ = write!(out, "{:>2}", rank);
        for file in 1..=size.files {
            let square = Position::new(rank, file);
            let marker = if selected == Some(square) {
                '>'
            } else if highlights.contains(&square) {
                '*'
            } else {
                ' '
            };
            let symbol = board
                .get_piece(square)
                .map_or('.', |piece| piece.piece_type().symbol(piece.color()));
            out.push(marker);
            out.push(symbol);
        }
        out.push('\n');
    }

    out.push_str("  ");
    for file in 1..=size.files {
        let _ = write!(out, " {}", file % 10);
    }
    out.push('\n');
    out
}

/// Draws the controller's board with its selection and, optionally, the
/// selected piece's legal moves.
pub fn draw_controller(controller: &Controller, show_highlights: bool) -> String {
    let highlights = if show_highlights {
        controller.highlighted_positions()
    } else {
        BTreeSet::new()
    };
    draw(
        controller.game().board(),
        controller.selected_position(),
        &highlights,
    )
}
