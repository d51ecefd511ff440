//! Error types for Dotwright operations.
//!
//! Building a document never fails; only getting it out of memory can. The
//! main error type [`DotError`] covers those output failures.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for Dotwright operations.
#[derive(Debug, Error)]
pub enum DotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The rendered document was written to a temporary file but could not be
    /// moved to its destination. The destination is left untouched.
    #[error("Failed to persist document to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
