//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Tag, TagCollection, MetaTags, member types, Error.

mod errors;
