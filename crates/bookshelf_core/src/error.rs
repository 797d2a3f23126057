//! Error types for the collection manager.

use thiserror::Error;

/// Result type alias for collection operations.
pub type ShelfResult<T> = Result<T, ShelfError>;

/// Errors raised while loading or saving the collection.
///
/// These surface from [`BookRepository`](crate::BookRepository). The
/// manager's public operations absorb them: a failed load becomes an
/// empty collection and a failed save leaves the in-memory state
/// authoritative until the next successful write.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Slot storage failed.
    #[error("store error: {0}")]
    Store(#[from] bookshelf_store::StoreError),

    /// The persisted blob could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_source() {
        let err: ShelfError = serde_json::from_slice::<Vec<u8>>(b"not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("codec error:"));
    }
}
