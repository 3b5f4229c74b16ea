//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the render and edit pipeline.
///
/// Each wrapped error keeps its own taxonomy; callers (request handlers)
/// map them to user-facing responses.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Storage failure, including unknown namespaces.
    #[error(transparent)]
    Store(#[from] pagekeep_store::StoreError),

    /// Corrupt or incomplete revision data, or an encode-time invariant
    /// violation.
    #[error(transparent)]
    Codec(#[from] pagekeep_codec::CodecError),

    /// The namespace's content template failed to render.
    #[error(transparent)]
    Template(#[from] pagekeep_template::TemplateError),
}
