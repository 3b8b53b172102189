//! Frozen entities shared between threads

use std::sync::Arc;
use std::thread;

use waymark::domain::{CommonEntityData, Entity, Node, share, writeable};
use waymark::foundation::Tag;

#[test]
fn frozen_node_is_readable_from_many_threads() {
    let shared = share(Node::new(
        CommonEntityData::with_tags(1, [Tag::new("name", "Shared")]),
        10.0,
        20.0,
    ));

    thread::scope(|s| {
        for _ in 0..4 {
            let node = Arc::clone(&shared);
            s.spawn(move || {
                assert_eq!(node.tags().get("name"), Some("Shared"));
                assert_eq!(node.latitude(), 10.0);
                assert!(node.is_read_only());
            });
        }
    });
}

#[test]
fn each_thread_gets_its_own_writable_copy() {
    let shared = share(Node::with_id(1, 0.0, 0.0));

    let ids: Vec<i64> = thread::scope(|s| {
        let handles: Vec<_> = (0..4_i32)
            .map(|i| {
                let node = Arc::clone(&shared);
                s.spawn(move || {
                    let mut own = writeable(node);
                    own.set_id(100 + i64::from(i)).unwrap();
                    own.set_latitude(f64::from(i)).unwrap();
                    own.id()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(ids, vec![100, 101, 102, 103]);
    assert_eq!(shared.id(), 1);
    assert_eq!(shared.latitude(), 0.0);
}
