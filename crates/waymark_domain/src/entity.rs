//! The entity contract shared by all variants.

use std::cmp::Ordering;
use std::sync::Arc;

use waymark_foundation::{EntityType, MetaTags, Result, TagCollection};

use crate::common::CommonEntityData;

/// A uniquely identified map object.
///
/// Identity, tag and freeze operations delegate to the owned
/// [`CommonEntityData`]. Variants must construct themselves from a data block
/// only after calling [`CommonEntityData::into_writeable`] on it, so a newly
/// built entity is always writable.
pub trait Entity: Send + Sync {
    /// Returns the variant tag.
    fn entity_type(&self) -> EntityType;

    /// Returns the common data block.
    fn data(&self) -> &CommonEntityData;

    /// Returns the common data block for modification.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the entity is frozen.
    fn data_mut(&mut self) -> Result<&mut CommonEntityData>;

    /// Returns a writable entity: `self` if not frozen, otherwise a new
    /// unfrozen clone.
    #[must_use]
    fn into_writeable(self) -> Self
    where
        Self: Sized;

    /// Allocates a new unfrozen entity with the same fields.
    ///
    /// The data block is copied through [`CommonEntityData::writeable_copy`],
    /// so meta tags are not carried over.
    #[must_use]
    fn writeable_clone(&self) -> Self
    where
        Self: Sized;

    /// Returns the identifier.
    fn id(&self) -> i64 {
        self.data().id()
    }

    /// Sets the identifier.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the entity is frozen.
    fn set_id(&mut self, id: i64) -> Result<()> {
        self.data_mut()?.set_id(id)
    }

    /// Returns the tags.
    fn tags(&self) -> &TagCollection {
        self.data().tags()
    }

    /// Returns the tags for modification.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the entity is frozen.
    fn tags_mut(&mut self) -> Result<&mut TagCollection> {
        self.data_mut()?.tags_mut()
    }

    /// Returns the meta tags.
    fn meta_tags(&self) -> &MetaTags {
        self.data().meta_tags()
    }

    /// Returns the meta tags for modification.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the entity is frozen.
    fn meta_tags_mut(&mut self) -> Result<&mut MetaTags> {
        self.data_mut()?.meta_tags_mut()
    }

    /// Returns true if the entity has been frozen.
    fn is_read_only(&self) -> bool {
        self.data().is_read_only()
    }

    /// Fails if the entity has been frozen.
    ///
    /// # Errors
    ///
    /// Returns a read-only error if the entity is frozen.
    fn assert_writeable(&self) -> Result<()> {
        self.data().assert_writeable()
    }

    /// Freezes the entity so it can be shared between threads.
    ///
    /// Variants holding their own collections override this to freeze them as
    /// well, and must still freeze the data block.
    fn make_read_only(&mut self) {
        if let Ok(data) = self.data_mut() {
            data.make_read_only();
        }
    }

    /// Compares this entity's tags to others, ignoring insertion order.
    fn compare_tags(&self, other: &TagCollection) -> Ordering {
        self.data().compare_tags(other)
    }
}

/// Freezes an entity and wraps it for sharing.
#[must_use]
pub fn share<E: Entity>(mut entity: E) -> Arc<E> {
    entity.make_read_only();
    Arc::new(entity)
}

/// Obtains an owned, writable entity from a shared handle.
///
/// If `shared` is the last handle the entity is unwrapped and passed through
/// [`Entity::into_writeable`], so an unfrozen entity is returned without a
/// copy. Otherwise a new entity is allocated; each such call returns an
/// independent value.
#[must_use]
pub fn writeable<E: Entity>(shared: Arc<E>) -> E {
    match Arc::try_unwrap(shared) {
        Ok(entity) => entity.into_writeable(),
        Err(shared) => shared.writeable_clone(),
    }
}
