//! Square-selection state machine for input front-ends.
//!
//! Front-ends (camera click mapping, a terminal prompt) only ever report
//! "this square was picked". The [`Controller`] turns that stream into
//! select / move / reject decisions on a [`Game`].

use crate::{Game, MoveError, MoveOutcome, Piece};
use chess_core::{PieceType, Position};
use std::collections::BTreeSet;

/// What a call to [`Controller::select_position`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A piece of the side to move is now selected.
    Selected(Position),
    /// The selected piece moved; the selection is cleared.
    Moved(MoveOutcome),
    /// The selected piece could not move there; the selection is kept.
    Rejected(MoveError),
    /// Nothing was selected and the square holds no piece of the side to move.
    Ignored,
}

/// Tracks the selected square over a game.
///
/// The selection is stored as a square rather than a piece handle, so it can
/// never outlive the piece it points at.
#[derive(Debug, Clone)]
pub struct Controller {
    game: Game,
    selected: Option<Position>,
    promotion: PieceType,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Creates a controller over a fresh game.
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }

    /// Creates a controller over an existing game.
    pub fn with_game(game: Game) -> Self {
        Controller {
            game,
            selected: None,
            promotion: PieceType::Queen,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the piece type pawns promote to when moved through this controller.
    pub fn promotion(&self) -> PieceType {
        self.promotion
    }

    /// Sets the promotion piece for later moves.
    pub fn set_promotion(&mut self, piece_type: PieceType) -> Result<(), MoveError> {
        if !piece_type.is_promotion_target() {
            return Err(MoveError::InvalidPromotion(piece_type));
        }
        self.promotion = piece_type;
        Ok(())
    }

    pub fn selected_position(&self) -> Option<Position> {
        self.selected
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected
            .and_then(|position| self.game.board().get_piece(position))
    }

    /// Legal destinations of the selected piece, for highlighting.
    pub fn highlighted_positions(&self) -> BTreeSet<Position> {
        self.selected_piece()
            .map(|piece| piece.legal_moves(self.game.board()))
            .unwrap_or_default()
    }

    /// Handles a picked square.
    ///
    /// With nothing selected, a piece of the side to move becomes selected.
    /// With a piece selected, the square is treated as its destination.
    pub fn select_position(&mut self, position: Position) -> Selection {
        let Some(from) = self.selected else {
            let selectable = self
                .game
                .piece_at(position)
                .is_some_and(|piece| piece.color() == self.game.side_to_move());
            if !selectable {
                return Selection::Ignored;
            }
            self.selected = Some(position);
            tracing::trace!(%position, "selected");
            return Selection::Selected(position);
        };

        match self
            .game
            .make_move_with_promotion(from, position, self.promotion)
        {
            Ok(outcome) => {
                self.selected = None;
                Selection::Moved(outcome)
            }
            Err(error) => Selection::Rejected(error),
        }
    }

    /// Clears the selection.
    pub fn unselect_position(&mut self) {
        self.selected = None;
    }
}
