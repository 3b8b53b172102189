//! Structural tags and tag collections.
//!
//! A [`TagCollection`] is a thin wrapper around `im::Vector`, so taking a
//! read-only view of it is O(1) and shares structure with the original.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single key/value attribute.
///
/// Ordered by key, then by value. Both comparisons are case sensitive.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// An ordered sequence of tags.
///
/// Duplicate keys are permitted and preserved. Equality, ordering and hashing
/// are structural: two collections holding the same multiset of tags are
/// equal regardless of insertion order.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagCollection {
    tags: im::Vector<Tag>,
    #[cfg_attr(feature = "serde", serde(skip))]
    read_only: bool,
}

impl TagCollection {
    /// Creates an empty, writable collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns true if this is a read-only view.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns an iterator over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Returns the value of the first tag with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.iter().find(|t| t.key == key).map(Tag::value)
    }

    /// Returns true if any tag has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.iter().any(|t| t.key == key)
    }

    /// Copies the tags into a `Vec`, in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Tag> {
        self.tags.iter().cloned().collect()
    }

    /// Returns a read-only view sharing structure with this collection.
    #[must_use]
    pub fn as_read_only(&self) -> Self {
        Self {
            tags: self.tags.clone(),
            read_only: true,
        }
    }

    fn assert_writeable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::read_only());
        }
        Ok(())
    }

    /// Appends a tag.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view.
    pub fn push(&mut self, tag: Tag) -> Result<()> {
        self.assert_writeable()?;
        self.tags.push_back(tag);
        Ok(())
    }

    /// Appends every tag from the iterator.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view. Nothing is
    /// appended in that case.
    pub fn extend<I: IntoIterator<Item = Tag>>(&mut self, tags: I) -> Result<()> {
        self.assert_writeable()?;
        self.tags.extend(tags);
        Ok(())
    }

    /// Removes every tag with the given key, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view.
    pub fn remove_key(&mut self, key: &str) -> Result<usize> {
        self.assert_writeable()?;
        let before = self.tags.len();
        self.tags.retain(|t| t.key != key);
        Ok(before - self.tags.len())
    }

    /// Removes all tags.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if this is a read-only view.
    pub fn clear(&mut self) -> Result<()> {
        self.assert_writeable()?;
        self.tags.clear();
        Ok(())
    }

    fn sorted(&self) -> Vec<&Tag> {
        let mut sorted: Vec<&Tag> = self.tags.iter().collect();
        sorted.sort();
        sorted
    }

    /// Compares two collections by content, ignoring insertion order.
    ///
    /// The collection with fewer tags is smaller. Collections of equal size
    /// are compared tag by tag after sorting both.
    #[must_use]
    pub fn compare_structural(&self, other: &Self) -> Ordering {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        self.sorted()
            .into_iter()
            .zip(other.sorted())
            .map(|(a, b)| a.cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Debug for TagCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for TagCollection {
    fn eq(&self, other: &Self) -> bool {
        self.compare_structural(other).is_eq()
    }
}

impl Eq for TagCollection {}

impl PartialOrd for TagCollection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TagCollection {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_structural(other)
    }
}

impl Hash for TagCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for tag in self.sorted() {
            tag.hash(state);
        }
    }
}

impl FromIterator<Tag> for TagCollection {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: im::Vector::from_iter(iter),
            read_only: false,
        }
    }
}

impl<'a> IntoIterator for &'a TagCollection {
    type Item = &'a Tag;
    type IntoIter = im::vector::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
