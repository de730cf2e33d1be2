//! Configuration file loading for the terminal front-end.
//!
//! Settings are read from `ar-chess.toml` in the current directory unless a
//! path is given. A missing file means defaults.

use chess_core::PieceType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured promotion piece is a king or a pawn.
    #[error("Invalid promotion piece: {0}")]
    InvalidPromotion(PieceType),
}

/// Front-end settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Piece type pawns promote to. Defaults to a queen.
    #[serde(default = "default_promotion")]
    pub promotion: PieceType,
    /// Whether to mark the selected piece's legal moves. Defaults to true.
    #[serde(default = "default_show_highlights")]
    pub show_highlights: bool,
    /// Tracing filter directive, e.g. "warn" or "chess_model=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_promotion() -> PieceType {
    PieceType::Queen
}

fn default_show_highlights() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            promotion: default_promotion(),
            show_highlights: default_show_highlights(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// See [`Self::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it contains invalid TOML, or
    /// [`ConfigError::InvalidPromotion`] if it names a king or pawn.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if !config.promotion.is_promotion_target() {
            return Err(ConfigError::InvalidPromotion(config.promotion));
        }
        Ok(config)
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("ar-chess.toml")
    }
}
