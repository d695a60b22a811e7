//! Error types for board loading and lookups.

use std::fmt;

use super::Coordinate;

/// Error type for board source parsing failures.
///
/// Every variant carries a `label` naming where the source came from (the
/// file name, or `<memory>` for in-memory text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The board file could not be read
    Unreadable { label: String, reason: String },
    /// Fewer than 64 tokens
    TooFewTokens { label: String, found: usize },
    /// More than 64 tokens
    TooManyTokens { label: String, found: usize },
    /// Token is not exactly two characters
    MalformedToken {
        label: String,
        token: String,
        square: Coordinate,
    },
    /// Unknown side character in a token
    InvalidSide {
        label: String,
        token: String,
        square: Coordinate,
    },
    /// Unknown piece character in a token
    InvalidKind {
        label: String,
        token: String,
        square: Coordinate,
    },
}

impl FormatError {
    /// Where the offending source came from
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            FormatError::Unreadable { label, .. }
            | FormatError::TooFewTokens { label, .. }
            | FormatError::TooManyTokens { label, .. }
            | FormatError::MalformedToken { label, .. }
            | FormatError::InvalidSide { label, .. }
            | FormatError::InvalidKind { label, .. } => label,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unreadable { label, reason } => {
                write!(f, "Cannot read board file {label}: {reason}")
            }
            FormatError::TooFewTokens { label, found } => {
                write!(f, "Board {label} has {found} tokens, expected 64")
            }
            FormatError::TooManyTokens { label, found } => {
                write!(f, "Board {label} has {found} tokens, expected 64")
            }
            FormatError::MalformedToken {
                label,
                token,
                square,
            } => {
                write!(f, "Invalid tile denotation [{token}] at {square} in {label}")
            }
            FormatError::InvalidSide {
                label,
                token,
                square,
            } => {
                write!(f, "Invalid side denotation [{token}] at {square} in {label}")
            }
            FormatError::InvalidKind {
                label,
                token,
                square,
            } => {
                write!(f, "Invalid piece denotation [{token}] at {square} in {label}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Error type for coordinates that do not name a square on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// Row or column outside 0-7
    OutOfBounds { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({row}, {col}) out of bounds (must be 0-7)")
            }
            BoundsError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for BoundsError {}
