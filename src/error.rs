//! Error types for the game core and its configuration

use std::path::PathBuf;

use crate::board::Stone;

/// Errors raised by board transitions and snapshot decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is occupied or out of range")]
    OccupiedOrOutOfRange { row: u8, col: u8 },

    #[error("malformed board snapshot: {0}")]
    Format(#[from] FormatError),

    #[error("{requested:?} asked to move but {active:?} is on turn")]
    NotOnTurn { requested: Stone, active: Stone },
}

/// Reasons a board snapshot can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("missing '|' between active mark and cells")]
    MissingSeparator,

    #[error("invalid active mark '{0}' (expected 'X' or 'O')")]
    InvalidActive(char),

    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell '{character}' at ({row}, {col})")]
    InvalidCell {
        row: usize,
        col: usize,
        character: char,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
