//! Error types.

use std::io;

use thiserror::Error;

/// Reasons a point set has no closest pair.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two points were given, so no pairwise distance exists.
    #[error("need at least two points to form a pair, got {len}")]
    TooFewPoints { len: usize },

    /// A coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Errors reading points from text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A line did not hold exactly two fields.
    #[error("line {line}: expected 2 coordinates, found {found}")]
    Fields { line: usize, found: usize },

    /// A field was not a number.
    #[error("line {line}: invalid coordinate {text:?}")]
    Number { line: usize, text: String },
}
