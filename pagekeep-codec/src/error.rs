//! Error types for the binary codec.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding revision data.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A decode ran past the end of the buffer. Corrupt or incomplete
    /// revision data; recoverable by reporting to the caller.
    #[error("truncated input: needed {needed} more bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    /// A field name's UTF-8 encoding exceeds one length byte.
    #[error("field name too long: {len} bytes (max {max}): {name:?}")]
    FieldNameTooLong { name: String, len: usize, max: usize },

    /// A field value exceeds the 3-byte big-endian length range.
    #[error("value too large for field {field:?}: {len} bytes (max {max})")]
    ValueTooLarge { field: String, len: usize, max: usize },

    /// A revision holds more fields than one count byte can express.
    #[error("too many fields: {count} (max {max})")]
    TooManyFields { count: usize, max: usize },

    /// A commit message's UTF-8 encoding exceeds one length byte.
    #[error("commit message too long: {len} bytes (max {max})")]
    MessageTooLong { len: usize, max: usize },

    /// A decoded field name or message is not valid UTF-8.
    #[error("invalid UTF-8 in {what}: {source}")]
    InvalidUtf8 {
        what: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
}
