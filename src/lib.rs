//! Waymark - freezable map entities
//!
//! This crate re-exports all layers of the Waymark system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: waymark_domain      - Entity data, freeze discipline, nodes
//! Layer 1: waymark_store       - Store protocol, type registers, buffers
//! Layer 0: waymark_foundation  - Tags, meta tags, member types, Error
//! ```

pub use waymark_domain as domain;
pub use waymark_foundation as foundation;
pub use waymark_store as store;
