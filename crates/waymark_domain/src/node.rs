//! Nodes: single geographic points.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use waymark_foundation::coordinate::{to_degrees, to_fixed};
use waymark_foundation::{EntityType, Result};
use waymark_store::{StoreReader, StoreWriter, Storeable, TypeRegister};

use crate::common::CommonEntityData;
use crate::entity::Entity;

/// A single point on the map.
///
/// Coordinates are WGS84 degrees. Nodes are ordered by id, latitude,
/// longitude and then tags; equality and hashing follow the same order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    data: CommonEntityData,
    latitude: f64,
    longitude: f64,
}

impl Node {
    /// Creates a node. A frozen data block is replaced by a writable copy.
    #[must_use]
    pub fn new(data: CommonEntityData, latitude: f64, longitude: f64) -> Self {
        Self {
            data: data.into_writeable(),
            latitude,
            longitude,
        }
    }

    /// Creates an untagged node.
    #[must_use]
    pub fn with_id(id: i64, latitude: f64, longitude: f64) -> Self {
        Self::new(CommonEntityData::new(id), latitude, longitude)
    }

    fn from_original(original: &Node) -> Self {
        Self {
            data: original.data.writeable_copy(),
            latitude: original.latitude,
            longitude: original.longitude,
        }
    }

    /// Returns the latitude.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Sets the latitude.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the node is frozen.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        self.assert_writeable()?;
        self.latitude = latitude;
        Ok(())
    }

    /// Returns the longitude.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Sets the longitude.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the node is frozen.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        self.assert_writeable()?;
        self.longitude = longitude;
        Ok(())
    }
}

impl Entity for Node {
    fn entity_type(&self) -> EntityType {
        EntityType::Node
    }

    fn data(&self) -> &CommonEntityData {
        &self.data
    }

    fn data_mut(&mut self) -> Result<&mut CommonEntityData> {
        self.data.assert_writeable()?;
        Ok(&mut self.data)
    }

    fn into_writeable(self) -> Self {
        if self.is_read_only() {
            Self::from_original(&self)
        } else {
            self
        }
    }

    fn writeable_clone(&self) -> Self {
        Self::from_original(self)
    }
}

/// Common data, then latitude and longitude as fixed-precision `int`s.
impl Storeable for Node {
    fn store(&self, writer: &mut dyn StoreWriter, register: &mut dyn TypeRegister) -> Result<()> {
        // Encode first so a bad coordinate leaves nothing half written.
        let latitude = to_fixed(self.latitude)?;
        let longitude = to_fixed(self.longitude)?;

        self.data.store(writer, register)?;
        writer.write_integer(latitude)?;
        writer.write_integer(longitude)
    }

    fn read(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<Self> {
        read_node(reader, register).map_err(|e| e.with_frame("node"))
    }
}

fn read_node(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<Node> {
    let data = CommonEntityData::read(reader, register)?;
    let latitude = to_degrees(reader.read_integer()?);
    let longitude = to_degrees(reader.read_integer()?);
    Ok(Node {
        data,
        latitude,
        longitude,
    })
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id()
            .cmp(&other.id())
            .then_with(|| self.latitude.total_cmp(&other.latitude))
            .then_with(|| self.longitude.total_cmp(&other.longitude))
            .then_with(|| self.compare_tags(other.tags()))
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(id={}, #tags={}", self.id(), self.tags().len())?;
        let name = self
            .tags()
            .iter()
            .find(|tag| tag.key().eq_ignore_ascii_case("name"));
        if let Some(tag) = name {
            write!(f, ", name='{}'", tag.value())?;
        }
        write!(f, ")")
    }
}
