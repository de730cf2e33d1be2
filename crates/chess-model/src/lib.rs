//! Chess rules model.
//!
//! This crate provides:
//! - [`Board`] - the pieces of one game, owned in an arena of [`PieceId`] handles
//! - [`Piece`] and [`PieceFactory`] - pieces and their construction
//! - [`Game`] - turn management and the single entry point for moves
//! - [`Controller`] - square-selection state for input front-ends
//! - [`movegen`] - per-piece attack geometry
//! - [`BoardSnapshot`] - serializable views for renderers
//!
//! # Legality
//!
//! Move generation happens in two steps. Each piece type first produces the
//! squares it threatens from its geometry alone. Every candidate is then
//! played out on a clone of the board, and only the ones that leave the
//! mover's king out of check are legal. Cloning a board of at most 32 pieces
//! is cheap, so no undo logic is needed.
//!
//! Castling, en passant, draw rules and game-end detection are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_core::Position;
//! use chess_model::Game;
//!
//! let mut game = Game::new();
//! game.make_move(Position::new(2, 5), Position::new(4, 5)).unwrap();
//! assert!(!game.is_white_move());
//!
//! // A pawn cannot advance three squares.
//! assert!(game.make_move(Position::new(7, 5), Position::new(4, 5)).is_err());
//! ```

mod board;
mod controller;
mod error;
mod game;
pub mod movegen;
mod piece;
mod snapshot;

pub use board::{Board, MoveOutcome};
pub use controller::{Controller, Selection};
pub use error::{MoveError, PlacementError};
pub use game::Game;
pub use piece::{Piece, PieceFactory, PieceId};
pub use snapshot::{BoardSnapshot, PieceSnapshot};
