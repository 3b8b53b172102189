//! Core types for Waymark map entities.
//!
//! This crate provides:
//! - [`Tag`] and [`TagCollection`] - Structural key/value attributes
//! - [`MetaValue`] and [`MetaTags`] - Side-channel attributes
//! - [`EntityType`] - Entity variant tags and member type resolution
//! - [`coordinate`] - Fixed-precision coordinate encoding
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coordinate;
pub mod entity_type;
pub mod error;
pub mod member_type;
pub mod meta;
pub mod tag;

pub use entity_type::EntityType;
pub use error::{Error, ErrorContext, ErrorKind, ReadLimit, Result};
pub use member_type::{parse_member_code, parse_member_type};
pub use meta::{MetaTags, MetaValue};
pub use tag::{Tag, TagCollection};
