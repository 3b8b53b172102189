//! Store collaborator interfaces.
//!
//! A store is a sequence of primitive values. Records are written and read in
//! exactly the same order, with no framing beyond what each record writes.

use waymark_foundation::{Error, ErrorKind, Result};

use crate::limits::ReadLimits;
use crate::register::TypeRegister;

/// Writes primitive values to a store.
pub trait StoreWriter {
    /// Writes a 32-bit signed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the value.
    fn write_integer(&mut self, value: i32) -> Result<()>;

    /// Writes a 64-bit signed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the value.
    fn write_long(&mut self, value: i64) -> Result<()>;

    /// Writes a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the value.
    fn write_string(&mut self, value: &str) -> Result<()>;

    /// Writes a collection length as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ValueTooLarge`] if `len` does not fit in an `i32`.
    fn write_count(&mut self, what: &str, len: usize) -> Result<()> {
        let count = i32::try_from(len).map_err(|_| {
            Error::new(ErrorKind::ValueTooLarge {
                what: format!("{what} collection"),
                len,
            })
        })?;
        self.write_integer(count)
    }
}

/// Reads primitive values from a store.
pub trait StoreReader {
    /// Reads a 32-bit signed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is exhausted or corrupt.
    fn read_integer(&mut self) -> Result<i32>;

    /// Reads a 64-bit signed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is exhausted or corrupt.
    fn read_long(&mut self) -> Result<i64>;

    /// Reads a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is exhausted or corrupt.
    fn read_string(&mut self) -> Result<String>;

    /// Returns the limits this reader enforces.
    fn limits(&self) -> ReadLimits {
        ReadLimits::default()
    }

    /// Reads a collection length written by [`StoreWriter::write_count`].
    ///
    /// # Errors
    ///
    /// Returns an error if the count is negative or over the collection limit.
    fn read_count(&mut self, what: &str) -> Result<usize> {
        let count = self.read_integer()?;
        let len = usize::try_from(count).map_err(|_| Error::invalid_count(what, i64::from(count)))?;
        self.limits().check_collection(what, len)?;
        Ok(len)
    }
}

/// A value with a fixed binary layout in a store.
pub trait Storeable: Sized {
    /// Writes this value to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if any primitive write fails.
    fn store(&self, writer: &mut dyn StoreWriter, register: &mut dyn TypeRegister) -> Result<()>;

    /// Reads a value previously written by [`Storeable::store`].
    ///
    /// # Errors
    ///
    /// Returns an error if any primitive read fails. No partially read value
    /// is ever returned.
    fn read(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<Self>;
}
