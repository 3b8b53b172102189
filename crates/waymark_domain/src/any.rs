//! A tagged union over the implemented entity variants.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use waymark_foundation::{EntityType, Error, ErrorKind, Result};
use waymark_store::{StoreReader, StoreWriter, Storeable, TypeRegister};

use crate::entity::Entity;
use crate::node::Node;

/// Any entity, tagged with its variant.
///
/// In a store the variant is identified through a [`TypeRegister`] ahead of
/// the entity's own layout, so mixed streams of entities can be read back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum AnyEntity {
    /// A node.
    Node(Node),
}

impl AnyEntity {
    /// Returns the variant tag.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        self.as_entity().entity_type()
    }

    /// Returns the entity behind the tag.
    #[must_use]
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            Self::Node(node) => node,
        }
    }

    /// Returns the entity behind the tag for modification.
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            Self::Node(node) => node,
        }
    }

    /// Returns the node, if this is one.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
        }
    }

    /// Freezes the wrapped entity.
    pub fn make_read_only(&mut self) {
        self.as_entity_mut().make_read_only();
    }

    /// Returns a writable entity, cloning the wrapped one if it is frozen.
    #[must_use]
    pub fn into_writeable(self) -> Self {
        match self {
            Self::Node(node) => Self::Node(node.into_writeable()),
        }
    }
}

impl From<Node> for AnyEntity {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl fmt::Display for AnyEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
        }
    }
}

/// Type identifier from the register, then the variant's layout.
impl Storeable for AnyEntity {
    fn store(&self, writer: &mut dyn StoreWriter, register: &mut dyn TypeRegister) -> Result<()> {
        register.store_type(writer, self.entity_type())?;
        match self {
            Self::Node(node) => node.store(writer, register),
        }
    }

    fn read(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<Self> {
        match register.read_type(reader)? {
            EntityType::Node => Node::read(reader, register).map(Self::Node),
            other => Err(Error::new(ErrorKind::UnsupportedEntity(other))),
        }
    }
}
