//! Recoverable errors for externally supplied input
//!
//! Malformed squares, unknown names, and moves outside the legal set are
//! reported to the caller; the position is left unchanged. Violated core
//! invariants are debug assertions instead, not errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("invalid move literal '{0}'")]
    InvalidMoveLiteral(String),

    #[error("unknown color '{0}'")]
    InvalidColor(String),

    #[error("unknown piece type '{0}'")]
    InvalidPiece(String),

    #[error("'{0}' is not a legal move")]
    IllegalMove(String),

    #[error("square {0} is empty")]
    EmptySquare(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
