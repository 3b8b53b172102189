//! Entity type tags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of map entity variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityType {
    /// A single point.
    Node,
    /// An ordered list of nodes.
    Way,
    /// A grouping of other entities.
    Relation,
}

impl EntityType {
    /// All entity types, in declaration order.
    pub const ALL: [EntityType; 3] = [Self::Node, Self::Way, Self::Relation];

    /// Returns the textual member type token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }

    /// Returns the single character member type code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Node => 'n',
            Self::Way => 'w',
            Self::Relation => 'r',
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
