//! Error types for the editing crate.
//!
//! Note the deliberately small surface: the edit operations themselves are
//! fail-soft (invalid ranges no-op, empty history returns `false`), so errors
//! only arise from journal (de)serialization and buffer construction.

use thiserror::Error;

/// All errors that can occur in `crest-edit` operations.
#[derive(Error, Debug)]
pub enum EditError {
    /// A buffer handed to the editor violated its construction invariants.
    #[error(transparent)]
    Buffer(#[from] crest_buffer::BufferError),

    /// JSON serialization/deserialization error.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// A convenience result type for `crest-edit` operations.
pub type Result<T> = std::result::Result<T, EditError>;
