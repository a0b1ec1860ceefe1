//! Configuration file loading for console-chess.
//!
//! Settings come from an optional TOML file; command-line flags override
//! individual values after loading.

use chess_engine::{Board, Color, Placement, PlacementError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not a valid placement string.
    #[error("Invalid start position: {0}")]
    InvalidPosition(#[from] PlacementError),
}

/// The side that moves first.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Console game settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Piece placement to start from, rank 8 first.
    /// Defaults to the standard setup.
    #[serde(default = "default_start_position")]
    pub start_position: String,
    /// Whether to print the board before each turn. Defaults to true.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    /// Which side moves first. Defaults to White.
    #[serde(default = "default_first_player")]
    pub first_player: Side,
}

fn default_start_position() -> String {
    Placement::STANDARD.to_string()
}

fn default_show_board() -> bool {
    true
}

fn default_first_player() -> Side {
    Side::White
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            start_position: default_start_position(),
            show_board: default_show_board(),
            first_player: default_first_player(),
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml(&content)?;
            tracing::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the starting board described by this configuration.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::from_placement(&self.start_position)?)
    }
}
