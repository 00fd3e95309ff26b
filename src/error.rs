// Crate-wide error type.
//
// Every failure is structural or input-driven: nothing here is transient,
// so callers never retry. Each variant maps to one class of fatal condition.

use std::io;

/// Errors produced by alignment, encoding, parsing and restore.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input sequence violates a precondition (e.g. it is empty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A diff stream or one of its records failed structural validation.
    #[error("malformed diff stream at offset {offset}: {reason}")]
    MalformedDiffStream { offset: u64, reason: String },

    /// The alignment table for the given dimensions cannot be allocated.
    #[error(
        "alignment table of {rows}x{cols} cells exceeds the limit of {limit} cells"
    )]
    ResourceExhaustion { rows: usize, cols: usize, limit: u64 },

    /// Bounds-checked access past the end of a `ByteSequence`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Underlying reader or writer failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn malformed(offset: u64, reason: impl Into<String>) -> Self {
        Self::MalformedDiffStream {
            offset,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
