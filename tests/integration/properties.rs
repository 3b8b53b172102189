//! End-to-end behaviour of the entity model
//!
//! One test per documented property, using the public re-exports only.

use std::cmp::Ordering;

use waymark::domain::{CommonEntityData, Entity, Node};
use waymark::foundation::coordinate::QUANTUM;
use waymark::foundation::{EntityType, ErrorKind, MetaValue, Tag, TagCollection, parse_member_code, parse_member_type};
use waymark::store::{BufferReader, BufferWriter, CodeTypeRegister, Storeable};

fn tags(pairs: &[(&str, &str)]) -> TagCollection {
    pairs.iter().map(|&(k, v)| Tag::new(k, v)).collect()
}

#[test]
fn freeze_is_idempotent() {
    let mut node = Node::new(CommonEntityData::with_tags(1, [Tag::new("a", "b")]), 1.0, 2.0);
    node.make_read_only();
    let once = node.clone();
    node.make_read_only();

    assert!(node.is_read_only());
    assert_eq!(node, once);
    assert_eq!(node.tags().to_vec(), once.tags().to_vec());
}

#[test]
fn writable_instance_identity() {
    let mut node = Node::with_id(8, 1.0, 1.0);
    node.tags_mut().unwrap().push(Tag::new("k", "v")).unwrap();
    node.meta_tags_mut().unwrap().insert("version", 1_i64).unwrap();

    // Unfrozen: the same value comes back, meta tags included.
    let node = node.into_writeable();
    assert_eq!(node.meta_tags().get("version"), Some(&MetaValue::Int(1)));

    // Frozen: a distinct writable value with the same id and tags, no meta.
    let mut frozen = node;
    frozen.make_read_only();
    let copy = frozen.writeable_clone();
    assert!(!copy.is_read_only());
    assert_eq!(copy.id(), 8);
    assert_eq!(copy.tags(), frozen.tags());
    assert!(copy.meta_tags().is_empty());
    assert!(frozen.is_read_only());
}

#[test]
fn rejected_mutation_leaves_state_unchanged() {
    let mut node = Node::new(CommonEntityData::with_tags(2, [Tag::new("a", "1")]), 3.0, 4.0);
    node.make_read_only();
    let before = node.clone();

    assert!(node.set_id(99).is_err());
    assert!(node.set_latitude(0.0).is_err());
    assert!(node.tags_mut().is_err());
    assert!(node.meta_tags_mut().is_err());

    assert_eq!(node, before);
    assert_eq!(node.latitude(), 3.0);
}

#[test]
fn structural_tag_equality() {
    assert_eq!(tags(&[("a", "1"), ("b", "2")]), tags(&[("b", "2"), ("a", "1")]));
    assert_ne!(tags(&[("a", "1")]), tags(&[("a", "1"), ("a", "1")]));
    assert_eq!(
        tags(&[("a", "1")]).compare_structural(&tags(&[("a", "1"), ("a", "1")])),
        Ordering::Less
    );
}

#[test]
fn node_total_order() {
    let a = Node::with_id(1, 0.0, 0.0);
    let b = Node::with_id(2, 0.0, 0.0);
    let c = Node::with_id(1, 1.0, 0.0);
    let d = Node::with_id(1, 0.0, 1.0);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(a.cmp(&c), Ordering::Less);
    assert_eq!(a.cmp(&d), Ordering::Less);
    assert_eq!(d.cmp(&c), Ordering::Less);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
}

#[test]
fn node_store_round_trip() {
    let node = Node::new(
        CommonEntityData::with_tags(42, [Tag::new("name", "Test")]),
        51.5074,
        -0.1278,
    );
    let mut writer = BufferWriter::new();
    node.store(&mut writer, &mut CodeTypeRegister).unwrap();
    let bytes = writer.into_bytes();

    let mut reader = BufferReader::new(&bytes);
    let back = Node::read(&mut reader, &mut CodeTypeRegister).unwrap();
    assert!(reader.is_empty());
    assert_eq!(back, node);
    assert_eq!(back.id(), 42);
    assert_eq!(back.tags().get("name"), Some("Test"));
    assert!((back.latitude() - 51.5074).abs() <= QUANTUM);
    assert!((back.longitude() - -0.1278).abs() <= QUANTUM);
    assert!(!back.is_read_only());
}

#[test]
fn member_type_resolution() {
    let table = [
        ("node", 'n', EntityType::Node),
        ("way", 'w', EntityType::Way),
        ("relation", 'r', EntityType::Relation),
    ];
    for (word, code, expected) in table {
        assert_eq!(parse_member_type(word).unwrap(), expected);
        assert_eq!(parse_member_code(code).unwrap(), expected);
    }

    let err = parse_member_type("foo").unwrap_err();
    assert!(matches!(&err.kind, ErrorKind::UnrecognizedType(t) if t == "foo"));
}

#[test]
fn display_finds_name_in_any_case() {
    let node = Node::new(
        CommonEntityData::with_tags(5, [Tag::new("leisure", "park"), Tag::new("Name", "Central Park")]),
        40.78,
        -73.97,
    );
    assert_eq!(node.to_string(), "Node(id=5, #tags=2, name='Central Park')");
}
