//! Terminal front-end for the chess model.
//!
//! Stands in for the camera and renderer: squares are picked by typing
//! `RANK FILE`, and the board is redrawn as text with the selected piece's
//! legal moves highlighted.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use config::{Config, ConfigError};
pub use session::Session;
