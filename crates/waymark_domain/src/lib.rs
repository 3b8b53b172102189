//! Map entities for Waymark.
//!
//! This crate provides:
//! - [`CommonEntityData`] - Identifier, tags and meta tags shared by all entities
//! - [`Entity`] - The freeze / writable-instance contract every variant honours
//! - [`Node`] - A single geographic point
//! - [`AnyEntity`] - A tagged union for polymorphic storage
//!
//! Entities are built mutable, frozen with [`Entity::make_read_only`] before
//! being shared between threads, and turned back into owned mutable values
//! with [`Entity::into_writeable`] or [`writeable`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod any;
pub mod common;
pub mod entity;
pub mod node;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use any::AnyEntity;
pub use common::CommonEntityData;
pub use entity::{Entity, share, writeable};
pub use node::Node;
