//! Entity snapshots using `MessagePack`.
//!
//! Unlike the store layout, snapshots are self-describing and keep full
//! floating point coordinates and typed meta tag values. Freeze state is not
//! recorded; a restored entity is always writable.

use waymark_foundation::{Error, ErrorKind, Result};

use crate::any::AnyEntity;

/// Serializes an entity to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(entity: &AnyEntity) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(entity).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes an entity from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<AnyEntity> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}
