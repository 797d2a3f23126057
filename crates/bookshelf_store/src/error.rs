//! Error types for slot storage operations.

use std::io;
use thiserror::Error;

/// Result type for slot storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during slot storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The slot key cannot be mapped to a storage location.
    #[error("invalid slot key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why the key was rejected.
        reason: &'static str,
    },
}

impl StoreError {
    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason,
        }
    }
}
