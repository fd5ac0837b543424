//! Editing session over a three-dimensional model
//!
//! The controller owns the model, remembers where it was loaded from and
//! tracks an [`ElementStatus`] per line and face. Status lists are kept
//! index-aligned with the model's element sets.

mod types;

use std::path::{Path, PathBuf};

pub use types::*;

use crate::collection::DistinctCollection;
use crate::constants::MODEL_DIMENSION;
use crate::element::{Face, Line};
use crate::model::Model;
use crate::point::Point;
use crate::storage::{self, ExportOptions};

pub type Point3 = Point<MODEL_DIMENSION>;
pub type Line3 = Line<MODEL_DIMENSION>;
pub type Face3 = Face<MODEL_DIMENSION>;
pub type Coords3 = [f64; MODEL_DIMENSION];

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Editing session: model, backing file and per-element status
#[derive(Debug, Clone, Default)]
pub struct Controller {
    model: Model<MODEL_DIMENSION>,
    path: Option<PathBuf>,
    line_status: Vec<ElementStatus>,
    face_status: Vec<ElementStatus>,
    export_options: ExportOptions,
}

impl Controller {
    /// Create a session with an empty, unsaved model
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    pub fn name(&self) -> &str {
        self.model.name()
    }

    /// File the model was loaded from or last saved to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn model(&self) -> &Model<MODEL_DIMENSION> {
        &self.model
    }

    /// Whether any element was created or modified since load or save
    pub fn has_unsaved_changes(&self) -> bool {
        self.line_status
            .iter()
            .chain(&self.face_status)
            .any(|status| *status != ElementStatus::Untouched)
    }

    // ============== Lines ==============

    pub fn lines(&self) -> Vec<ElementRecord<Line3>> {
        records(self.model.lines().iter(), &self.line_status)
    }

    pub fn line_points(&self, index: usize) -> ControllerResult<[Point3; 2]> {
        Ok(*self.model.line(index)?.points())
    }

    pub fn add_line(&mut self, start: Coords3, end: Coords3) -> ControllerResult<()> {
        self.model
            .add_line([start, end])
            .inspect_err(|e| tracing::warn!("Rejected new line: {}", e))?;
        self.line_status.push(ElementStatus::Created);
        tracing::debug!("Added line #{}", self.line_status.len() - 1);
        Ok(())
    }

    pub fn modify_line(
        &mut self,
        index: usize,
        point_index: usize,
        coords: Coords3,
    ) -> ControllerResult<()> {
        self.model
            .modify_line(index, point_index, coords)
            .inspect_err(|e| tracing::warn!("Rejected change to line #{}: {}", index, e))?;
        mark_modified(&mut self.line_status, index);
        tracing::debug!("Modified point {} of line #{}", point_index, index);
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> ControllerResult<Line3> {
        let line = self.model.remove_line(index)?;
        self.line_status.remove(index);
        tracing::debug!("Removed line #{}", index);
        Ok(line)
    }

    // ============== Faces ==============

    pub fn faces(&self) -> Vec<ElementRecord<Face3>> {
        records(self.model.faces().iter(), &self.face_status)
    }

    pub fn face_points(&self, index: usize) -> ControllerResult<[Point3; 3]> {
        Ok(*self.model.face(index)?.points())
    }

    pub fn add_face(&mut self, a: Coords3, b: Coords3, c: Coords3) -> ControllerResult<()> {
        self.model
            .add_face([a, b, c])
            .inspect_err(|e| tracing::warn!("Rejected new face: {}", e))?;
        self.face_status.push(ElementStatus::Created);
        tracing::debug!("Added face #{}", self.face_status.len() - 1);
        Ok(())
    }

    pub fn modify_face(
        &mut self,
        index: usize,
        point_index: usize,
        coords: Coords3,
    ) -> ControllerResult<()> {
        self.model
            .modify_face(index, point_index, coords)
            .inspect_err(|e| tracing::warn!("Rejected change to face #{}: {}", index, e))?;
        mark_modified(&mut self.face_status, index);
        tracing::debug!("Modified point {} of face #{}", point_index, index);
        Ok(())
    }

    pub fn remove_face(&mut self, index: usize) -> ControllerResult<Face3> {
        let face = self.model.remove_face(index)?;
        self.face_status.remove(index);
        tracing::debug!("Removed face #{}", index);
        Ok(face)
    }

    // ============== Statistics ==============

    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_point_count: self.model.points().len(),
            total_line_count: self.model.lines().len(),
            total_line_length: self.model.total_line_length(),
            total_face_count: self.model.faces().len(),
            total_face_area: self.model.total_face_area(),
            bounding_box_volume: self
                .model
                .bounding_box()
                .map_or(0.0, |bbox| bbox.volume()),
        }
    }

    // ============== Storage ==============

    /// Replace the session with a model read from `path`.
    ///
    /// On failure the current session is kept as it was.
    pub fn load_model(&mut self, path: impl AsRef<Path>) -> ControllerResult<()> {
        let path = path.as_ref();
        let model = storage::load_model::<MODEL_DIMENSION>(path)
            .inspect_err(|e| tracing::warn!("Failed to load {}: {}", path.display(), e))?;

        self.line_status = vec![ElementStatus::Untouched; model.lines().len()];
        self.face_status = vec![ElementStatus::Untouched; model.faces().len()];
        self.model = model;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the model to `path`, or to the current path when `path` is empty.
    ///
    /// A successful save makes `path` the current path and marks every
    /// element as untouched.
    pub fn save_model(&mut self, path: impl AsRef<Path>) -> ControllerResult<()> {
        let requested = path.as_ref();
        let target = if requested.as_os_str().is_empty() {
            self.path.clone().ok_or(ControllerError::StorageLookup)?
        } else {
            requested.to_path_buf()
        };

        storage::save_model(&self.model, &target, &self.export_options)
            .inspect_err(|e| tracing::warn!("Failed to save {}: {}", target.display(), e))?;

        self.line_status.fill(ElementStatus::Untouched);
        self.face_status.fill(ElementStatus::Untouched);
        self.path = Some(target);
        Ok(())
    }
}

fn records<'a, E: Copy + 'a>(
    elements: impl Iterator<Item = &'a E>,
    statuses: &[ElementStatus],
) -> Vec<ElementRecord<E>> {
    elements
        .zip(statuses)
        .map(|(element, status)| ElementRecord {
            element: *element,
            status: *status,
        })
        .collect()
}

fn mark_modified(statuses: &mut [ElementStatus], index: usize) {
    if let Some(status) = statuses.get_mut(index) {
        *status = status.after_edit();
    }
}
