//! Error types for the game library.

use thiserror::Error;

/// Text that does not name a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown move: {0:?}")]
pub struct MoveParseError(pub String);

/// Reasons a round count is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundsError {
    #[error("not a non-negative integer: {0:?}")]
    NotANumber(String),

    #[error("round count {value} is not below {limit}")]
    OutOfRange { value: String, limit: u32 },
}

/// Errors from driving a session over a reader/writer pair.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
