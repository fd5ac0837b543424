//! Model import and export
//!
//! Two flat-text formats are supported:
//! - [`TextFormat`] (`.wf`): point table followed by index-based elements
//! - [`RonFormat`] (`.ron`): serde snapshot of the whole model

mod options;
mod snapshot;
mod text;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::collection::DistinctCollection;
use crate::constants::{RON_FORMAT_EXTENSION, TEXT_FORMAT_EXTENSION};
use crate::model::Model;

pub use options::ExportOptions;
pub use snapshot::RonFormat;
pub use text::TextFormat;

/// Errors that can occur while reading or writing model files
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("cannot open file '{path}': {reason}")]
    Open { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Reads a model from a text source
pub trait ModelImporter<const N: usize> {
    fn read(&self, reader: &mut dyn BufRead) -> Result<Model<N>, StorageError>;

    /// Import a model file
    fn import(&self, path: &Path) -> Result<Model<N>, StorageError> {
        let file = File::open(path).map_err(|e| StorageError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let model = self.read(&mut BufReader::new(file))?;
        tracing::info!(
            "Imported model '{}' from {} ({} lines, {} faces)",
            model.name(),
            path.display(),
            model.lines().len(),
            model.faces().len()
        );
        Ok(model)
    }
}

/// Writes a model to a text sink
pub trait ModelExporter<const N: usize> {
    fn write(&self, model: &Model<N>, writer: &mut dyn Write) -> Result<(), StorageError>;

    /// Export a model file, replacing any existing file
    fn export(&self, model: &Model<N>, path: &Path) -> Result<(), StorageError> {
        let file = File::create(path).map_err(|e| StorageError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        self.write(model, &mut writer)?;
        writer.flush().map_err(|e| StorageError::Io(e.to_string()))?;
        tracing::info!("Exported model '{}' to {}", model.name(), path.display());
        Ok(())
    }
}

/// File format selected from a path's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Text,
    Ron,
}

impl StorageFormat {
    /// `.ron` selects RON; anything else is the text format
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(RON_FORMAT_EXTENSION) => Self::Ron,
            _ => Self::Text,
        }
    }

    /// Conventional file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => TEXT_FORMAT_EXTENSION,
            Self::Ron => RON_FORMAT_EXTENSION,
        }
    }
}

/// Load a model, choosing the format from the file extension
pub fn load_model<const N: usize>(path: &Path) -> Result<Model<N>, StorageError> {
    match StorageFormat::from_path(path) {
        StorageFormat::Text => TextFormat::default().import(path),
        StorageFormat::Ron => RonFormat.import(path),
    }
}

/// Save a model, choosing the format from the file extension
pub fn save_model<const N: usize>(
    model: &Model<N>,
    path: &Path,
    options: &ExportOptions,
) -> Result<(), StorageError> {
    match StorageFormat::from_path(path) {
        StorageFormat::Text => TextFormat::new(options.clone()).export(model, path),
        StorageFormat::Ron => RonFormat.export(model, path),
    }
}
