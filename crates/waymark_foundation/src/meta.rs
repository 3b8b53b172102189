//! Meta tags: side-channel attributes outside the structural schema.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A scalar meta tag value.
///
/// Values are always written to a store as their [`Display`](fmt::Display)
/// form, so a value read back from a store is a [`MetaValue::String`].
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MetaValue {
    /// String value.
    String(Arc<str>),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl MetaValue {
    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

// Floats compare by bit pattern so that equality stays reflexive.
impl PartialEq for MetaValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MetaValue {}

impl fmt::Debug for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for MetaValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for MetaValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A lazily allocated map of meta tags.
///
/// No map is allocated until the first insert. Iteration is in key order.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetaTags {
    entries: Option<im::OrdMap<String, MetaValue>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    read_only: bool,
}

impl MetaTags {
    /// Creates an empty, writable map without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, im::OrdMap::len)
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the backing map has been allocated.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.entries.is_some()
    }

    /// Returns true if this is a read-only view.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.as_ref()?.get(key)
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaValue)> {
        self.entries.iter().flat_map(im::OrdMap::iter)
    }

    /// Returns a read-only view sharing structure with this map.
    #[must_use]
    pub fn as_read_only(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            read_only: true,
        }
    }

    /// Inserts a value, returning the previous value for the key.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetaValue>,
    ) -> Result<Option<MetaValue>> {
        if self.read_only {
            return Err(Error::read_only());
        }
        Ok(self
            .entries
            .get_or_insert_with(im::OrdMap::new)
            .insert(key.into(), value.into()))
    }

    /// Removes a value by key.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view.
    pub fn remove(&mut self, key: &str) -> Result<Option<MetaValue>> {
        if self.read_only {
            return Err(Error::read_only());
        }
        Ok(self.entries.as_mut().and_then(|m| m.remove(key)))
    }

    /// Removes all entries.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view.
    pub fn clear(&mut self) -> Result<()> {
        if self.read_only {
            return Err(Error::read_only());
        }
        if let Some(entries) = &mut self.entries {
            entries.clear();
        }
        Ok(())
    }
}

impl fmt::Debug for MetaTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for MetaTags {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for MetaTags {}
