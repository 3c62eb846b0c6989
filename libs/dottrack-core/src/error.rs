//! Error types for dottrack-core.

use thiserror::Error;

/// Result type alias using StorageError.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by the persistence collaborator.
///
/// The core itself has no fallible operations; these originate in storage
/// implementations and pass through the tracker unchanged.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to load {collection}: {reason}")]
    Load {
        collection: &'static str,
        reason: String,
    },

    #[error("failed to save {collection}: {reason}")]
    Save {
        collection: &'static str,
        reason: String,
    },
}
