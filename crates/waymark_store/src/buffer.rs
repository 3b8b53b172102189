//! In-memory store.
//!
//! Integers are big-endian two's complement. Strings are an `int` byte length
//! followed by UTF-8 bytes.

use waymark_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::limits::ReadLimits;
use crate::store::{StoreReader, StoreWriter};

/// Writes store primitives into a growable byte buffer.
#[derive(Clone, Debug, Default)]
pub struct BufferWriter {
    bytes: Vec<u8>,
}

impl BufferWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the writer, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl StoreWriter for BufferWriter {
    fn write_integer(&mut self, value: i32) -> Result<()> {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn write_long(&mut self, value: i64) -> Result<()> {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        let len = i32::try_from(value.len()).map_err(|_| {
            Error::new(ErrorKind::ValueTooLarge {
                what: "string".to_string(),
                len: value.len(),
            })
        })?;
        self.write_integer(len)?;
        self.bytes.extend_from_slice(value.as_bytes());
        Ok(())
    }
}

fn at_offset(err: Error, offset: usize) -> Error {
    err.with_context(ErrorContext::new().with_offset(offset))
}

/// Reads store primitives from a byte slice.
#[derive(Clone, Debug)]
pub struct BufferReader<'a> {
    bytes: &'a [u8],
    position: usize,
    limits: ReadLimits,
}

impl<'a> BufferReader<'a> {
    /// Creates a reader with default limits.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_limits(bytes, ReadLimits::default())
    }

    /// Creates a reader with the given limits.
    #[must_use]
    pub fn with_limits(bytes: &'a [u8], limits: ReadLimits) -> Self {
        Self {
            bytes,
            position: 0,
            limits,
        }
    }

    /// Returns the current byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Returns true if every byte has been read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            let err = Error::unexpected_eof(len, self.remaining());
            return Err(at_offset(err, self.position));
        }
        let bytes = self.bytes;
        let slice = &bytes[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0_u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

impl StoreReader for BufferReader<'_> {
    fn read_integer(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    fn read_long(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    fn read_string(&mut self) -> Result<String> {
        let start = self.position;
        let len = self.read_integer()?;
        let len = usize::try_from(len)
            .map_err(|_| at_offset(Error::invalid_count("string length", i64::from(len)), start))?;
        self.limits
            .check_string(len)
            .map_err(|err| at_offset(err, start))?;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| at_offset(Error::new(ErrorKind::InvalidString(e.to_string())), start))
    }

    fn limits(&self) -> ReadLimits {
        self.limits
    }
}
