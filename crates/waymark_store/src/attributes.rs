//! Store layouts for tag collections and meta tags.

use waymark_foundation::{MetaTags, Result, Tag, TagCollection};

use crate::register::TypeRegister;
use crate::store::{StoreReader, StoreWriter, Storeable};

impl Storeable for Tag {
    fn store(&self, writer: &mut dyn StoreWriter, _register: &mut dyn TypeRegister) -> Result<()> {
        writer.write_string(self.key())?;
        writer.write_string(self.value())
    }

    fn read(reader: &mut dyn StoreReader, _register: &mut dyn TypeRegister) -> Result<Self> {
        let key = reader.read_string()?;
        let value = reader.read_string()?;
        Ok(Tag::new(key, value))
    }
}

/// `int count`, then each tag in insertion order.
impl Storeable for TagCollection {
    fn store(&self, writer: &mut dyn StoreWriter, register: &mut dyn TypeRegister) -> Result<()> {
        writer.write_count("tag", self.len())?;
        for tag in self {
            tag.store(writer, register)?;
        }
        Ok(())
    }

    fn read(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<Self> {
        read_tags(reader, register).map_err(|e| e.with_frame("tag collection"))
    }
}

/// `int count`, then each `(key, value)` pair in key order. Values are written
/// in their display form and always read back as strings.
impl Storeable for MetaTags {
    fn store(&self, writer: &mut dyn StoreWriter, _register: &mut dyn TypeRegister) -> Result<()> {
        writer.write_count("meta tag", self.len())?;
        for (key, value) in self.iter() {
            writer.write_string(key)?;
            writer.write_string(&value.to_string())?;
        }
        Ok(())
    }

    fn read(reader: &mut dyn StoreReader, _register: &mut dyn TypeRegister) -> Result<Self> {
        read_meta_tags(reader).map_err(|e| e.with_frame("meta tags"))
    }
}

fn read_tags(reader: &mut dyn StoreReader, register: &mut dyn TypeRegister) -> Result<TagCollection> {
    // Grows as tags arrive; the count is not trusted for pre-sizing.
    let count = reader.read_count("tag")?;
    (0..count).map(|_| Tag::read(reader, register)).collect()
}

fn read_meta_tags(reader: &mut dyn StoreReader) -> Result<MetaTags> {
    let count = reader.read_count("meta tag")?;
    let mut meta = MetaTags::new();
    for _ in 0..count {
        let key = reader.read_string()?;
        let value = reader.read_string()?;
        meta.insert(key, value)?;
    }
    Ok(meta)
}
