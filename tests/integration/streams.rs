//! Mixed entity streams through the store

use waymark::domain::{AnyEntity, CommonEntityData, Entity, Node};
use waymark::foundation::{ErrorKind, Tag};
use waymark::store::{
    BufferReader, BufferWriter, CodeTypeRegister, DynamicTypeRegister, ReadLimits, Storeable,
    TypeRegister,
};

fn sample() -> Vec<AnyEntity> {
    (1..=5_i32)
        .map(|n| {
            let id = i64::from(n);
            let mut node = Node::new(
                CommonEntityData::with_tags(id, [Tag::new("ref", id.to_string())]),
                f64::from(n),
                -f64::from(n),
            );
            node.meta_tags_mut().unwrap().insert("version", id).unwrap();
            node.make_read_only();
            AnyEntity::from(node)
        })
        .collect()
}

fn round_trip(register: &mut dyn TypeRegister, fresh: &mut dyn TypeRegister) -> Vec<AnyEntity> {
    let entities = sample();
    let mut writer = BufferWriter::new();
    for entity in &entities {
        entity.store(&mut writer, register).unwrap();
    }
    let bytes = writer.into_bytes();

    let mut reader = BufferReader::new(&bytes);
    let back: Vec<AnyEntity> = entities
        .iter()
        .map(|_| AnyEntity::read(&mut reader, fresh).unwrap())
        .collect();
    assert!(reader.is_empty());
    assert_eq!(back, entities);
    back
}

#[test]
fn code_register_stream() {
    let back = round_trip(&mut CodeTypeRegister, &mut CodeTypeRegister);
    assert!(back.iter().all(|e| !e.as_entity().is_read_only()));
}

#[test]
fn dynamic_register_stream() {
    let back = round_trip(&mut DynamicTypeRegister::new(), &mut DynamicTypeRegister::new());
    let meta = back[2].as_entity().meta_tags().get("version").cloned();
    assert_eq!(meta.and_then(|v| v.as_str().map(str::to_owned)), Some("3".to_string()));
}

#[test]
fn tight_limits_stop_a_stream() {
    let mut writer = BufferWriter::new();
    for entity in sample() {
        entity.store(&mut writer, &mut CodeTypeRegister).unwrap();
    }
    let bytes = writer.into_bytes();

    let limits = ReadLimits::default().with_max_string_bytes(2);
    let mut reader = BufferReader::with_limits(&bytes, limits);
    let err = AnyEntity::read(&mut reader, &mut CodeTypeRegister).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LimitExceeded(_)));
    assert!(err.context.is_some_and(|c| c.stack.ends_with(&["node".to_string()])));
}
