//! Encode/decode for revisions and whole revision logs.

use crate::cursor::ByteCursor;
use crate::error::{CodecError, CodecResult};
use pagekeep_types::{FieldMap, PageRevision, RevisionEntry, RevisionLog};

/// Maximum fields per revision (one count byte).
pub const MAX_FIELDS: usize = 255;
/// Maximum encoded field-name length (one length byte).
pub const MAX_NAME_LEN: usize = 255;
/// Maximum value length (three length bytes, big-endian).
pub const MAX_VALUE_LEN: usize = 0xFF_FFFF;
/// Maximum encoded commit-message length (one length byte).
pub const MAX_MESSAGE_LEN: usize = 255;

/// Encodes one revision's field data.
///
/// Fields are written in ascending lexicographic name order (the field
/// map's iteration order). The revision's namespace and page name are
/// identity, not payload, and are not written.
pub fn encode_revision(revision: &PageRevision) -> CodecResult<Vec<u8>> {
    let count = revision.field_count();
    if count > MAX_FIELDS {
        return Err(CodecError::TooManyFields {
            count,
            max: MAX_FIELDS,
        });
    }

    let mut out = Vec::new();
    out.push(count as u8);
    for (name, value) in revision.fields() {
        let name_bytes = name.as_bytes();
        if name_bytes.len() > MAX_NAME_LEN {
            return Err(CodecError::FieldNameTooLong {
                name: name.clone(),
                len: name_bytes.len(),
                max: MAX_NAME_LEN,
            });
        }
        if value.len() > MAX_VALUE_LEN {
            return Err(CodecError::ValueTooLarge {
                field: name.clone(),
                len: value.len(),
                max: MAX_VALUE_LEN,
            });
        }
        out.push(name_bytes.len() as u8);
        out.extend_from_slice(name_bytes);
        out.push((value.len() >> 16) as u8);
        out.push((value.len() >> 8) as u8);
        out.push(value.len() as u8);
        out.extend_from_slice(value);
    }
    Ok(out)
}

/// Decodes one revision from the cursor, adopting the given identity.
///
/// Duplicate field names are kept last-write-wins, matching the data
/// historically produced by this format.
pub fn decode_revision(
    cursor: &mut ByteCursor<'_>,
    namespace: &str,
    page_name: &str,
) -> CodecResult<PageRevision> {
    let count = cursor.read_byte()?;
    let mut fields = FieldMap::new();
    for _ in 0..count {
        let name_len = cursor.read_byte()? as usize;
        let name = utf8(cursor.read_bytes(name_len)?, "field name")?;
        let value_len = read_u24(cursor)?;
        let value = cursor.read_bytes(value_len)?.to_vec();
        fields.insert(name, value);
    }
    Ok(PageRevision::new(namespace, page_name, fields))
}

/// Encodes a whole log: per entry, a length-prefixed message followed by
/// the entry's revision encoding.
pub fn encode_log(log: &RevisionLog) -> CodecResult<Vec<u8>> {
    let mut out = Vec::new();
    for entry in log.entries() {
        let message_bytes = entry.message.as_bytes();
        if message_bytes.len() > MAX_MESSAGE_LEN {
            return Err(CodecError::MessageTooLong {
                len: message_bytes.len(),
                max: MAX_MESSAGE_LEN,
            });
        }
        out.push(message_bytes.len() as u8);
        out.extend_from_slice(message_bytes);
        out.extend_from_slice(&encode_revision(&entry.revision)?);
    }
    Ok(out)
}

/// Decodes a whole log, one (message, revision) pair per iteration until
/// the buffer is exhausted. A zero-length buffer yields an empty log —
/// the "page not yet created" state, not an error.
pub fn decode_log(bytes: &[u8], namespace: &str, page_name: &str) -> CodecResult<RevisionLog> {
    let mut cursor = ByteCursor::new(bytes);
    let mut entries = Vec::new();
    while cursor.has_more() {
        let message_len = cursor.read_byte()? as usize;
        let message = utf8(cursor.read_bytes(message_len)?, "commit message")?;
        let revision = decode_revision(&mut cursor, namespace, page_name)?;
        entries.push(RevisionEntry { message, revision });
    }
    Ok(RevisionLog::from_entries(namespace, page_name, entries))
}

fn read_u24(cursor: &mut ByteCursor<'_>) -> CodecResult<usize> {
    let bytes = cursor.read_bytes(3)?;
    Ok(((bytes[0] as usize) << 16) | ((bytes[1] as usize) << 8) | bytes[2] as usize)
}

fn utf8(bytes: &[u8], what: &'static str) -> CodecResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|source| CodecError::InvalidUtf8 { what, source })
}
