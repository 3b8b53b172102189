//! Error types for the Waymark system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity_type::EntityType;

/// Result type for Waymark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Waymark operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto the context stack, creating the context if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a read-only (frozen state) error.
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(ErrorKind::ReadOnly)
    }

    /// Creates an unrecognized member type error.
    #[must_use]
    pub fn unrecognized_type(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedType(token.into()))
    }

    /// Creates an error for a read past the end of the store.
    #[must_use]
    pub fn unexpected_eof(needed: usize, remaining: usize) -> Self {
        Self::new(ErrorKind::UnexpectedEof { needed, remaining })
    }

    /// Creates an error for a negative or otherwise invalid element count.
    #[must_use]
    pub fn invalid_count(what: impl Into<String>, count: i64) -> Self {
        Self::new(ErrorKind::InvalidCount {
            what: what.into(),
            count,
        })
    }

    /// Creates a read limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: ReadLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates a coordinate out of range error.
    #[must_use]
    pub fn coordinate_out_of_range(value: f64) -> Self {
        Self::new(ErrorKind::CoordinateOutOfRange(value))
    }

    /// Returns true if this error was raised by a mutation on a frozen object.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self.kind, ErrorKind::ReadOnly)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A mutation was attempted on a frozen object.
    #[error("the object has been marked as read-only; it must be cloned to make changes")]
    ReadOnly,

    /// A member type token did not match any entity type.
    #[error("the member type {0} is not recognised")]
    UnrecognizedType(String),

    /// The store ran out of bytes in the middle of a record.
    #[error("unexpected end of store: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes required by the primitive being read.
        needed: usize,
        /// Bytes left in the store.
        remaining: usize,
    },

    /// A string in the store was not valid UTF-8.
    #[error("invalid string in store: {0}")]
    InvalidString(String),

    /// An element count read from the store was negative.
    #[error("invalid {what} count: {count}")]
    InvalidCount {
        /// What was being counted.
        what: String,
        /// The value that was read.
        count: i64,
    },

    /// A configured read limit was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(ReadLimit),

    /// A type identifier has no registered entity type.
    #[error("unknown type identifier: {0}")]
    UnknownTypeIdentifier(i64),

    /// The entity type is recognised but has no concrete implementation.
    #[error("unsupported entity type: {0}")]
    UnsupportedEntity(EntityType),

    /// A coordinate cannot be represented in fixed precision.
    #[error("coordinate {0} cannot be encoded in fixed precision")]
    CoordinateOutOfRange(f64),

    /// A value is too large to be written to the store.
    #[error("{what} too large to store: {len}")]
    ValueTooLarge {
        /// What was being written.
        what: String,
        /// The offending length.
        len: usize,
    },

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read limits that can be exceeded while decoding a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLimit {
    /// A string was longer than the configured maximum.
    StringBytes {
        /// The configured limit.
        limit: usize,
        /// The length found in the store.
        actual: usize,
    },
    /// A collection had more elements than the configured maximum.
    CollectionLength {
        /// The configured limit.
        limit: usize,
        /// The count found in the store.
        actual: usize,
        /// The collection being read.
        what: String,
    },
}

impl fmt::Display for ReadLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StringBytes { limit, actual } => {
                write!(f, "string of {actual} bytes exceeds max ({limit})")
            }
            Self::CollectionLength {
                limit,
                actual,
                what,
            } => {
                write!(f, "{what} of {actual} elements exceeds max ({limit})")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Byte offset in the store where the failing read started.
    pub offset: Option<usize>,
    /// Records being decoded when the error occurred, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "at offset {offset}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
