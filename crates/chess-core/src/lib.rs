//! Core types for the chess model.
//!
//! This crate provides the plain value types shared by the rules engine and
//! its collaborators:
//! - [`Color`] for the two factions
//! - [`PieceType`] for the six kinds of piece
//! - [`Position`] and [`Size`] for board coordinates and dimensions

mod color;
mod piece;
mod position;

pub use color::Color;
pub use piece::PieceType;
pub use position::{Position, Size};
