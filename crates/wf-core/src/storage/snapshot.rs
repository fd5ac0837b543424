//! RON snapshots of whole models

use std::io::{BufRead, Write};

use super::{ModelExporter, ModelImporter, StorageError};
use crate::model::Model;

/// Pretty-printed RON serialization of a [`Model`]
///
/// Loading re-validates every element, so a hand-edited file cannot smuggle
/// in duplicate elements or collapsed points.
#[derive(Debug, Clone, Copy, Default)]
pub struct RonFormat;

impl<const N: usize> ModelImporter<N> for RonFormat {
    fn read(&self, reader: &mut dyn BufRead) -> Result<Model<N>, StorageError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| StorageError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| StorageError::Deserialize(e.to_string()))
    }
}

impl<const N: usize> ModelExporter<N> for RonFormat {
    fn write(&self, model: &Model<N>, writer: &mut dyn Write) -> Result<(), StorageError> {
        let content = ron::ser::to_string_pretty(model, ron::ser::PrettyConfig::default())
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}
