//! Integration tests for the in-memory store

use waymark_foundation::{ErrorKind, MetaTags, MetaValue, ReadLimit, Tag, TagCollection};
use waymark_store::{
    BufferReader, BufferWriter, CodeTypeRegister, ReadLimits, StoreReader, StoreWriter, Storeable,
};

// =============================================================================
// Primitives
// =============================================================================

#[test]
fn primitives_are_big_endian() {
    let mut writer = BufferWriter::new();
    writer.write_integer(1).unwrap();
    writer.write_long(-2).unwrap();
    writer.write_string("hé").unwrap();

    let mut expected = vec![0, 0, 0, 1];
    expected.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]);
    expected.extend_from_slice(&[0, 0, 0, 3, b'h', 0xc3, 0xa9]);
    assert_eq!(writer.as_bytes(), expected.as_slice());
}

#[test]
fn primitives_read_back_in_order() {
    let mut writer = BufferWriter::new();
    writer.write_string("").unwrap();
    writer.write_long(i64::MIN).unwrap();
    writer.write_integer(i32::MAX).unwrap();
    let bytes = writer.into_bytes();

    let mut reader = BufferReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), "");
    assert_eq!(reader.read_long().unwrap(), i64::MIN);
    assert_eq!(reader.read_integer().unwrap(), i32::MAX);
    assert!(reader.is_empty());
}

#[test]
fn eof_reports_offset() {
    let bytes = [0, 0, 0, 1, 0, 0];
    let mut reader = BufferReader::new(&bytes);
    reader.read_integer().unwrap();

    let err = reader.read_integer().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnexpectedEof {
            needed: 4,
            remaining: 2
        }
    ));
    assert_eq!(err.context.unwrap().offset, Some(4));
}

#[test]
fn invalid_utf8_is_rejected() {
    let bytes = [0, 0, 0, 2, 0xff, 0xfe];
    let err = BufferReader::new(&bytes).read_string().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidString(_)));
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn oversized_string_is_rejected_before_reading() {
    let mut writer = BufferWriter::new();
    writer.write_string("abcdefgh").unwrap();
    let bytes = writer.into_bytes();

    let limits = ReadLimits::default().with_max_string_bytes(4);
    let err = BufferReader::with_limits(&bytes, limits).read_string().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(ReadLimit::StringBytes { limit: 4, actual: 8 })
    ));
}

#[test]
fn oversized_tag_collection_is_rejected() {
    let tags: TagCollection = (0..5).map(|i| Tag::new(format!("k{i}"), "v")).collect();
    let mut writer = BufferWriter::new();
    tags.store(&mut writer, &mut CodeTypeRegister).unwrap();
    let bytes = writer.into_bytes();

    let limits = ReadLimits::default().with_max_collection_len(4);
    let mut reader = BufferReader::with_limits(&bytes, limits);
    let err = TagCollection::read(&mut reader, &mut CodeTypeRegister).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LimitExceeded(ReadLimit::CollectionLength { .. })));
    assert_eq!(err.context.unwrap().stack, vec!["tag collection"]);
}

#[test]
fn negative_count_is_rejected() {
    let bytes = (-1_i32).to_be_bytes();
    let err = TagCollection::read(&mut BufferReader::new(&bytes), &mut CodeTypeRegister).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCount { count: -1, .. }));
}

#[test]
fn unlimited_accepts_large_counts() {
    let limits = ReadLimits::unlimited();
    assert!(limits.check_collection("tag", usize::MAX).is_ok());
    assert!(limits.check_string(usize::MAX).is_ok());
}

// =============================================================================
// Attribute Layouts
// =============================================================================

#[test]
fn tag_collection_preserves_insertion_order() {
    let tags: TagCollection = [Tag::new("z", "1"), Tag::new("a", "2"), Tag::new("z", "3")]
        .into_iter()
        .collect();
    let mut writer = BufferWriter::new();
    tags.store(&mut writer, &mut CodeTypeRegister).unwrap();
    let bytes = writer.into_bytes();

    let back = TagCollection::read(&mut BufferReader::new(&bytes), &mut CodeTypeRegister).unwrap();
    assert_eq!(back.to_vec(), tags.to_vec());
    assert!(!back.is_read_only());
}

#[test]
fn meta_tags_read_back_as_strings_in_key_order() {
    let mut meta = MetaTags::new();
    meta.insert("version", 4_i64).unwrap();
    meta.insert("user", "carol").unwrap();

    let mut writer = BufferWriter::new();
    meta.store(&mut writer, &mut CodeTypeRegister).unwrap();
    let bytes = writer.into_bytes();

    // Count, then "user" before "version".
    assert_eq!(&bytes[..4], &2_i32.to_be_bytes());
    assert_eq!(&bytes[8..12], b"user");

    let back = MetaTags::read(&mut BufferReader::new(&bytes), &mut CodeTypeRegister).unwrap();
    assert_eq!(back.get("version"), Some(&MetaValue::from("4")));
    assert_eq!(back.get("user"), Some(&MetaValue::from("carol")));
}
