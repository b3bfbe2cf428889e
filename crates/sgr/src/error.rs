//! Error types for SGR parsing.

use thiserror::Error;

/// Errors that can occur when parsing SGR-annotated text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Unrecognized code or malformed sequence structure.
    #[error("invalid ansi string: unexpected code {0:?}")]
    InvalidSequence(String),

    /// Escape introducer without a closing `m`.
    #[error("missing escape terminator 'm' for sequence at byte {0}")]
    MissingTerminator(usize),

    /// Malformed `38;5;n` / `48;5;n` sequence.
    #[error("invalid 256 colour sequence: {0}")]
    Invalid256ColorSequence(String),

    /// Malformed `38;2;r;g;b` / `48;2;r;g;b` sequence.
    #[error("invalid TrueColor sequence: {0}")]
    InvalidTrueColorSequence(String),

    /// A configured default color is not a legacy color code.
    #[error("unknown default color code: {0:?}")]
    UnknownDefaultColor(String),
}
