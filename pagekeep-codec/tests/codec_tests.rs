use pagekeep_codec::{
    decode_log, decode_revision, encode_log, encode_revision, ByteCursor, CodecError,
    MAX_MESSAGE_LEN, MAX_NAME_LEN,
};
use pagekeep_types::{FieldMap, PageRevision, RevisionLog};
use pretty_assertions::assert_eq;

fn fields(pairs: &[(&str, &[u8])]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_vec()))
        .collect()
}

// ── ByteCursor ───────────────────────────────────────────────────

#[test]
fn cursor_reads_in_sequence() {
    let data = [1u8, 2, 3, 4, 5];
    let mut cursor = ByteCursor::new(&data);

    assert_eq!(cursor.read_byte().unwrap(), 1);
    assert_eq!(cursor.read_bytes(3).unwrap(), &[2, 3, 4]);
    assert!(cursor.has_more());
    assert_eq!(cursor.read_byte().unwrap(), 5);
    assert!(!cursor.has_more());
}

#[test]
fn cursor_read_past_end_is_truncated_input() {
    let data = [1u8, 2];
    let mut cursor = ByteCursor::new(&data);

    let err = cursor.read_bytes(3).unwrap_err();
    assert!(matches!(
        err,
        CodecError::TruncatedInput {
            needed: 1,
            remaining: 2
        }
    ));
    // The failed read did not consume anything.
    assert_eq!(cursor.remaining(), 2);
}

#[test]
fn cursor_read_byte_at_end_is_truncated_input() {
    let mut cursor = ByteCursor::new(&[]);
    assert!(!cursor.has_more());
    assert!(matches!(
        cursor.read_byte().unwrap_err(),
        CodecError::TruncatedInput { .. }
    ));
}

// ── Revision wire layout ─────────────────────────────────────────

#[test]
fn revision_encodes_expected_bytes() {
    let rev = PageRevision::new("Main", "Home", fields(&[("ab", b"xyz")]));
    let bytes = encode_revision(&rev).unwrap();

    // count=1, name_len=2, "ab", value_len=3 (u24be), "xyz"
    assert_eq!(bytes, vec![1, 2, b'a', b'b', 0, 0, 3, b'x', b'y', b'z']);
}

#[test]
fn revision_fields_encode_in_name_order() {
    let rev = PageRevision::new("Main", "Home", fields(&[("b", b"2"), ("a", b"1")]));
    let bytes = encode_revision(&rev).unwrap();
    // "a" first regardless of insertion order.
    assert_eq!(bytes[2], b'a');
}

#[test]
fn value_length_is_three_bytes_big_endian() {
    let value = vec![0u8; 0x0102_03];
    let rev = PageRevision::new("Main", "Home", fields(&[("v", &value)]));
    let bytes = encode_revision(&rev).unwrap();
    // count, name_len, 'v', then the u24 length.
    assert_eq!(&bytes[3..6], &[0x01, 0x02, 0x03]);
}

#[test]
fn revision_roundtrip() {
    let rev = PageRevision::new(
        "Main",
        "Home",
        fields(&[("title", b"Hello"), ("blob", &[0u8, 255, 128])]),
    );
    let bytes = encode_revision(&rev).unwrap();
    let mut cursor = ByteCursor::new(&bytes);
    let decoded = decode_revision(&mut cursor, "Main", "Home").unwrap();
    assert_eq!(decoded, rev);
    assert!(!cursor.has_more());
}

#[test]
fn decode_duplicate_field_names_keeps_last() {
    // count=2, both fields named "x": value "1" then value "2".
    let bytes = [2u8, 1, b'x', 0, 0, 1, b'1', 1, b'x', 0, 0, 1, b'2'];
    let mut cursor = ByteCursor::new(&bytes);
    let rev = decode_revision(&mut cursor, "Main", "Home").unwrap();
    assert_eq!(rev.field_count(), 1);
    assert_eq!(rev.field("x"), Some(b"2".as_slice()));
}

#[test]
fn decode_truncated_value_fails() {
    // Declares a 3-byte value but provides one byte.
    let bytes = [1u8, 1, b'x', 0, 0, 3, b'!'];
    let mut cursor = ByteCursor::new(&bytes);
    let err = decode_revision(&mut cursor, "Main", "Home").unwrap_err();
    assert!(matches!(err, CodecError::TruncatedInput { .. }));
}

#[test]
fn decode_invalid_utf8_name_fails() {
    let bytes = [1u8, 1, 0xFF, 0, 0, 0];
    let mut cursor = ByteCursor::new(&bytes);
    let err = decode_revision(&mut cursor, "Main", "Home").unwrap_err();
    assert!(matches!(err, CodecError::InvalidUtf8 { .. }));
}

// ── Encode-time invariants ───────────────────────────────────────

#[test]
fn field_name_over_255_bytes_rejected() {
    let name = "n".repeat(MAX_NAME_LEN + 1);
    let rev = PageRevision::new("Main", "Home", fields(&[(name.as_str(), b"v")]));
    assert!(matches!(
        encode_revision(&rev).unwrap_err(),
        CodecError::FieldNameTooLong { .. }
    ));
}

#[test]
fn field_name_at_255_bytes_accepted() {
    let name = "n".repeat(MAX_NAME_LEN);
    let rev = PageRevision::new("Main", "Home", fields(&[(name.as_str(), b"v")]));
    assert!(encode_revision(&rev).is_ok());
}

#[test]
fn too_many_fields_rejected() {
    let map: FieldMap = (0..256).map(|i| (format!("f{i:03}"), vec![])).collect();
    let rev = PageRevision::new("Main", "Home", map);
    assert!(matches!(
        encode_revision(&rev).unwrap_err(),
        CodecError::TooManyFields { count: 256, .. }
    ));
}

#[test]
fn message_over_255_bytes_rejected() {
    let mut log = RevisionLog::new("Main", "Home");
    log.append("m".repeat(MAX_MESSAGE_LEN + 1), FieldMap::new());
    assert!(matches!(
        encode_log(&log).unwrap_err(),
        CodecError::MessageTooLong { .. }
    ));
}

// ── Log codec ────────────────────────────────────────────────────

#[test]
fn log_roundtrip_preserves_order() {
    let mut log = RevisionLog::new("Main", "Home");
    log.append("create", fields(&[("title", b"v1")]));
    log.append_edit("edit", "title", b"v2".to_vec());
    log.append_delete("remove");

    let bytes = encode_log(&log).unwrap();
    let decoded = decode_log(&bytes, "Main", "Home").unwrap();

    assert_eq!(decoded, log);
    assert_eq!(decoded.entries()[0].message, "create");
    assert_eq!(decoded.entries()[2].message, "remove");
}

#[test]
fn empty_buffer_decodes_to_empty_log() {
    let log = decode_log(&[], "Main", "Ghost").unwrap();
    assert!(log.is_empty());
    assert_eq!(log.current().field_count(), 0);
}

#[test]
fn empty_log_encodes_to_empty_buffer() {
    let log = RevisionLog::new("Main", "Ghost");
    assert!(encode_log(&log).unwrap().is_empty());
}

#[test]
fn decode_log_with_trailing_garbage_fails() {
    let mut log = RevisionLog::new("Main", "Home");
    log.append("create", fields(&[("t", b"v")]));
    let mut bytes = encode_log(&log).unwrap();
    // A dangling message-length byte promising more than remains.
    bytes.push(200);
    assert!(matches!(
        decode_log(&bytes, "Main", "Home").unwrap_err(),
        CodecError::TruncatedInput { .. }
    ));
}

#[test]
fn encode_is_deterministic() {
    let mut log = RevisionLog::new("Main", "Home");
    log.append("create", fields(&[("z", b"1"), ("a", b"2"), ("m", b"3")]));
    assert_eq!(encode_log(&log).unwrap(), encode_log(&log).unwrap());
}

#[test]
fn empty_message_and_empty_fields_roundtrip() {
    let mut log = RevisionLog::new("Main", "Home");
    log.append("", FieldMap::new());
    let bytes = encode_log(&log).unwrap();
    assert_eq!(bytes, vec![0, 0]);
    let decoded = decode_log(&bytes, "Main", "Home").unwrap();
    assert_eq!(decoded, log);
}
