//! Store protocol for spilling Waymark entities out of memory.
//!
//! This crate provides:
//! - [`StoreWriter`] and [`StoreReader`] - The primitive store collaborator
//! - [`Storeable`] - Values with a fixed binary layout
//! - [`TypeRegister`] - Type-resolution contexts for embedded entity types
//! - [`BufferWriter`] and [`BufferReader`] - An in-memory store
//! - [`ReadLimits`] - Reader configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod attributes;
pub mod buffer;
pub mod limits;
pub mod register;
pub mod store;

pub use buffer::{BufferReader, BufferWriter};
pub use limits::ReadLimits;
pub use register::{CodeTypeRegister, DynamicTypeRegister, TypeRegister};
pub use store::{StoreReader, StoreWriter, Storeable};
