//! Error types for template rendering.

use thiserror::Error;

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while rendering a content template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A `{{…` token was opened but input ended before its `}}`.
    #[error("template token opened but never closed (at byte offset {offset})")]
    UnterminatedToken { offset: usize },

    /// A `{{field}}` substitution hit a value that is not valid UTF-8.
    /// Binary fields are substitutable with `{{field64}}` instead.
    #[error("field {field:?} is not valid UTF-8 text")]
    FieldNotText { field: String },
}
