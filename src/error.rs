//! Errors at the crate boundary
//!
//! Rejected moves are not errors; see [`crate::engine::Rejection`]. These
//! cover input the engine never sees, such as a malformed game record.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The record text is not a JSON array of `{x, y}` objects
    #[error("unreadable game record: {0}")]
    Record(#[from] serde_json::Error),

    /// A recorded coordinate lies outside the board
    #[error("move {index} at ({x}, {y}) is outside the board")]
    OutOfRange { index: usize, x: i32, y: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
