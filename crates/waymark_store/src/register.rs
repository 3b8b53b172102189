//! Type-resolution contexts.
//!
//! A [`TypeRegister`] decides how an entity type is identified inside a store.
//! Writer and reader must use the same kind of register, and a stateful
//! register must see records in the same order on both sides.

use std::collections::HashMap;

use log::{debug, warn};
use waymark_foundation::{EntityType, Error, ErrorKind, Result, parse_member_code, parse_member_type};

use crate::store::{StoreReader, StoreWriter};

/// Maps entity types to and from store identifiers.
pub trait TypeRegister {
    /// Writes the identifier for an entity type.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    fn store_type(&mut self, writer: &mut dyn StoreWriter, entity_type: EntityType) -> Result<()>;

    /// Reads an identifier and resolves it to an entity type.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails or the identifier is unknown.
    fn read_type(&mut self, reader: &mut dyn StoreReader) -> Result<EntityType>;
}

/// Identifies types by their single character member code.
///
/// Stateless, so any number of records can be read in any order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeTypeRegister;

impl TypeRegister for CodeTypeRegister {
    fn store_type(&mut self, writer: &mut dyn StoreWriter, entity_type: EntityType) -> Result<()> {
        // Codes are ASCII letters.
        #[allow(clippy::cast_possible_wrap)]
        let code = u32::from(entity_type.code()) as i32;
        writer.write_integer(code)
    }

    fn read_type(&mut self, reader: &mut dyn StoreReader) -> Result<EntityType> {
        let raw = reader.read_integer()?;
        let code = u32::try_from(raw)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| Error::new(ErrorKind::UnknownTypeIdentifier(i64::from(raw))))?;
        parse_member_code(code)
    }
}

/// Assigns identifiers on first use.
///
/// The first time a type is written its new identifier is followed by the
/// textual member type; later records carry only the identifier. A reading
/// register learns the same assignments as it goes.
#[derive(Clone, Debug, Default)]
pub struct DynamicTypeRegister {
    ids: HashMap<EntityType, i32>,
    types: Vec<EntityType>,
}

impl DynamicTypeRegister {
    /// Creates an empty register.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of types assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the identifier assigned to a type, if any.
    #[must_use]
    pub fn identifier(&self, entity_type: EntityType) -> Option<i32> {
        self.ids.get(&entity_type).copied()
    }

    fn assign(&mut self, entity_type: EntityType) -> i32 {
        // At most three types exist.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let id = self.types.len() as i32;
        self.types.push(entity_type);
        self.ids.insert(entity_type, id);
        debug!("Assigned store identifier {id} to {entity_type}");
        id
    }
}

impl TypeRegister for DynamicTypeRegister {
    fn store_type(&mut self, writer: &mut dyn StoreWriter, entity_type: EntityType) -> Result<()> {
        if let Some(id) = self.identifier(entity_type) {
            return writer.write_integer(id);
        }
        let id = self.assign(entity_type);
        writer.write_integer(id)?;
        writer.write_string(entity_type.as_str())
    }

    fn read_type(&mut self, reader: &mut dyn StoreReader) -> Result<EntityType> {
        let id = reader.read_integer()?;
        let next = self.types.len();
        match usize::try_from(id) {
            Ok(index) if index < next => Ok(self.types[index]),
            Ok(index) if index == next => {
                let entity_type = parse_member_type(&reader.read_string()?)?;
                if self.ids.contains_key(&entity_type) {
                    warn!("Store assigned a second identifier {id} to {entity_type}");
                    return Err(Error::new(ErrorKind::UnknownTypeIdentifier(i64::from(id))));
                }
                self.assign(entity_type);
                Ok(entity_type)
            }
            _ => {
                warn!("Unknown store type identifier {id} ({next} assigned)");
                Err(Error::new(ErrorKind::UnknownTypeIdentifier(i64::from(id))))
            }
        }
    }
}
