//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No schema resource exists for the namespace. A hard failure,
    /// distinct from a page that merely has no revisions yet.
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),

    /// A namespace or page name is unusable as a storage key.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// The namespace's schema resource is not valid JSON.
    #[error("schema for namespace {namespace:?} failed to parse: {source}")]
    SchemaParse {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
