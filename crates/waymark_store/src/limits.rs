//! Configuration for store readers.

use log::warn;
use waymark_foundation::{Error, ReadLimit, Result};

/// Upper bounds applied while decoding a store.
///
/// A corrupt length prefix would otherwise make a reader allocate whatever
/// the store claims. Limits are checked before any allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadLimits {
    /// Maximum length of a single string, in bytes.
    pub max_string_bytes: usize,

    /// Maximum number of elements in a single collection.
    pub max_collection_len: usize,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self {
            max_string_bytes: 1 << 20,
            max_collection_len: 1 << 20,
        }
    }
}

impl ReadLimits {
    /// Creates limits that never reject a record.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_string_bytes: usize::MAX,
            max_collection_len: usize::MAX,
        }
    }

    /// Builder method to set the maximum string length.
    #[must_use]
    pub fn with_max_string_bytes(mut self, max: usize) -> Self {
        self.max_string_bytes = max;
        self
    }

    /// Builder method to set the maximum collection length.
    #[must_use]
    pub fn with_max_collection_len(mut self, max: usize) -> Self {
        self.max_collection_len = max;
        self
    }

    /// Checks a string length against the limit.
    ///
    /// # Errors
    ///
    /// Returns a limit exceeded error if `len` is over the maximum.
    pub fn check_string(&self, len: usize) -> Result<()> {
        if len > self.max_string_bytes {
            warn!(
                "Rejected store string: {} bytes exceeds maximum {}",
                len, self.max_string_bytes
            );
            return Err(Error::limit_exceeded(ReadLimit::StringBytes {
                limit: self.max_string_bytes,
                actual: len,
            }));
        }
        Ok(())
    }

    /// Checks a collection length against the limit.
    ///
    /// # Errors
    ///
    /// Returns a limit exceeded error if `len` is over the maximum.
    pub fn check_collection(&self, what: &str, len: usize) -> Result<()> {
        if len > self.max_collection_len {
            warn!(
                "Rejected store collection: {} of {} elements exceeds maximum {}",
                what, len, self.max_collection_len
            );
            return Err(Error::limit_exceeded(ReadLimit::CollectionLength {
                limit: self.max_collection_len,
                actual: len,
                what: what.to_string(),
            }));
        }
        Ok(())
    }
}
