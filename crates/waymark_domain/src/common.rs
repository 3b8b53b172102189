//! Data shared by every entity variant.
//!
//! A [`CommonEntityData`] block is mutable while it is being built and becomes
//! read-only once frozen. Freezing is one way: the only route back to a
//! mutable block is [`CommonEntityData::into_writeable`], which allocates a new
//! block when the original is frozen.

use std::cmp::Ordering;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use waymark_foundation::{Error, MetaTags, Result, Tag, TagCollection};
use waymark_store::{StoreReader, StoreWriter, Storeable, TypeRegister};

/// Identifier, tags and meta tags common to all entity types.
///
/// Exclusively owned by one entity. Built before the rest of the entity so
/// that parsers can fill it in as fields arrive.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommonEntityData {
    id: i64,
    tags: TagCollection,
    meta_tags: MetaTags,
    #[cfg_attr(feature = "serde", serde(skip))]
    read_only: bool,
}

impl CommonEntityData {
    /// Creates a block with no tags.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            tags: TagCollection::new(),
            meta_tags: MetaTags::new(),
            read_only: false,
        }
    }

    /// Creates a block holding a copy of the given tags.
    #[must_use]
    pub fn with_tags<I: IntoIterator<Item = Tag>>(id: i64, tags: I) -> Self {
        Self {
            id,
            tags: tags.into_iter().collect(),
            meta_tags: MetaTags::new(),
            read_only: false,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Sets the identifier.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the block is frozen.
    pub fn set_id(&mut self, id: i64) -> Result<()> {
        self.assert_writeable()?;
        self.id = id;
        Ok(())
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &TagCollection {
        &self.tags
    }

    /// Returns the tags for modification.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the block is frozen.
    pub fn tags_mut(&mut self) -> Result<&mut TagCollection> {
        self.assert_writeable()?;
        Ok(&mut self.tags)
    }

    /// Returns the meta tags.
    #[must_use]
    pub fn meta_tags(&self) -> &MetaTags {
        &self.meta_tags
    }

    /// Returns the meta tags for modification.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the block is frozen.
    pub fn meta_tags_mut(&mut self) -> Result<&mut MetaTags> {
        self.assert_writeable()?;
        Ok(&mut self.meta_tags)
    }

    /// Returns true if the block has been frozen.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Fails if the block has been frozen. Every mutator calls this first.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the block is frozen.
    pub fn assert_writeable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::read_only());
        }
        Ok(())
    }

    /// Freezes the block. Calling this more than once has no further effect.
    pub fn make_read_only(&mut self) {
        if !self.read_only {
            trace!("Freezing entity data {}", self.id);
            self.tags = self.tags.as_read_only();
            self.meta_tags = self.meta_tags.as_read_only();
            self.read_only = true;
        }
    }

    /// Returns a writable block.
    ///
    /// An unfrozen block is returned as is. A frozen block is replaced by a
    /// new one carrying the same id and tags; meta tags are not carried over.
    #[must_use]
    pub fn into_writeable(self) -> Self {
        if self.read_only {
            self.writeable_copy()
        } else {
            self
        }
    }

    /// Allocates a new unfrozen block with the same id and tags.
    ///
    /// Meta tags are not copied.
    #[must_use]
    pub fn writeable_copy(&self) -> Self {
        if !self.meta_tags.is_empty() {
            debug!(
                "Copying entity data {} without its {} meta tags",
                self.id,
                self.meta_tags.len()
            );
        }
        Self::with_tags(self.id, self.tags.iter().cloned())
    }

    /// Compares these tags to others, ignoring insertion order.
    #[must_use]
    pub fn compare_tags(&self, other: &TagCollection) -> Ordering {
        self.tags.compare_structural(other)
    }
}

/// `long id`, tag collection, meta tags.
impl Storeable for CommonEntityData {
    fn store(&self, writer: &mut dyn StoreWriter, register: &mut dyn TypeRegister) -> Result<()> {
        writer.write_long(self.id)?;
        self.tags.store(writer, register)?;
        self.meta_tags.store(writer, register)
    }

    fn read(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<Self> {
        read_data(reader, register).map_err(|e| e.with_frame("entity data"))
    }
}

fn read_data(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<CommonEntityData> {
    let id = reader.read_long()?;
    let tags = TagCollection::read(reader, register)?;
    let meta_tags = MetaTags::read(reader, register)?;
    Ok(CommonEntityData {
        id,
        tags,
        meta_tags,
        read_only: false,
    })
}
