//! Crate-wide error taxonomy.
//!
//! Five categories cover every failure the engine can report:
//! missing resources, malformed input, id collisions, an unreadable
//! backing store, and interpretation-collaborator failures. Storage I/O
//! faults on individual operations keep their source error attached.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error.
#[derive(Debug, Error)]
pub enum Error {
    /// A deck, card, spread, or placed card does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Malformed id or missing required field. Detected before any
    /// persistence is touched.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Duplicate id on create or duplicate.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store cannot be read at all.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The external interpretation collaborator failed. Carries the
    /// underlying message; never retried automatically.
    #[error("reading generation failed: {0}")]
    GenerationFailed(String),

    /// I/O failure on a single storage operation.
    #[error("storage I/O failure")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::NotFound`] with a formatted subject.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
