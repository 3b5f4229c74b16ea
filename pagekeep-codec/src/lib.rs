//! Binary codec for Pagekeep revision logs.
//!
//! The on-disk format is a compact, positional byte layout with no header,
//! magic number, or version tag:
//!
//! ```text
//! log      := entry*                        (until input is exhausted)
//! entry    := msg_len:u8 msg[msg_len] revision
//! revision := field_count:u8 field[field_count]
//! field    := name_len:u8 name[name_len] value_len:u24be value[value_len]
//! ```
//!
//! Names and messages are UTF-8; values are opaque bytes. Fields encode in
//! ascending lexicographic name order, so re-encoding an unchanged log is
//! byte-for-byte deterministic.
//!
//! Every read is bounds-checked through [`ByteCursor`]; a short buffer
//! surfaces as [`CodecError::TruncatedInput`], never a panic. Encode-time
//! invariant violations (name over 255 bytes, value over 16 MiB − 1,
//! more than 255 fields, message over 255 bytes) are rejected with typed
//! errors before any bytes are produced.

mod codec;
mod cursor;
mod error;

pub use codec::{
    decode_log, decode_revision, encode_log, encode_revision, MAX_FIELDS, MAX_MESSAGE_LEN,
    MAX_NAME_LEN, MAX_VALUE_LEN,
};
pub use cursor::ByteCursor;
pub use error::{CodecError, CodecResult};
