//! Error types.
//!
//! Only construction and caller-contract violations are errors. Gameplay
//! failures (mismatched icons, blocked paths) are ordinary events.

use std::path::PathBuf;

use super::point::Point;

/// Errors raised while building a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised by checked board access and fixture parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {point} is outside a {rows}x{cols} board")]
    IndexOutOfRange { point: Point, rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("unrecognized cell token {0:?}")]
    UnknownCell(String),
}

/// Errors raised when corner points do not form a connecting path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("a path needs a source and a destination, got {0} point(s)")]
    TooShort(usize),

    #[error("segment {from} -> {to} is not a straight run")]
    NotStraight { from: Point, to: Point },
}
