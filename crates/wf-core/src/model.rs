//! Model owning lines and faces under uniqueness invariants
//!
//! Every mutation validates before it writes, so a rejected operation leaves
//! the model untouched:
//! - the points of one element are pairwise distinct
//! - no two lines (or two faces) are equal under element equality

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::collection::{DistinctCollection, DynamicSet};
use crate::constants::DEFAULT_MODEL_NAME;
use crate::element::{Element, Face, Line};
use crate::error::{GeometryError, GeometryResult};
use crate::point::Point;

/// Raw model data for deserialization (validated on conversion)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelData<const N: usize> {
    name: String,
    lines: Vec<Line<N>>,
    faces: Vec<Face<N>>,
}

/// Wireframe model of dimension `N`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ModelData<N>", try_from = "ModelData<N>")]
pub struct Model<const N: usize> {
    name: String,
    lines: DynamicSet<Line<N>>,
    faces: DynamicSet<Face<N>>,
}

impl<const N: usize> From<Model<N>> for ModelData<N> {
    fn from(model: Model<N>) -> Self {
        Self {
            name: model.name,
            lines: model.lines.into_vec(),
            faces: model.faces.into_vec(),
        }
    }
}

impl<const N: usize> TryFrom<ModelData<N>> for Model<N> {
    type Error = GeometryError;

    fn try_from(data: ModelData<N>) -> Result<Self, Self::Error> {
        Self::from_elements(data.name, data.lines, data.faces)
    }
}

impl<const N: usize> Default for Model<N> {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_NAME)
    }
}

impl<const N: usize> Model<N> {
    /// Create a new empty model
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: DynamicSet::new(),
            faces: DynamicSet::new(),
        }
    }

    /// Create a model from element lists, validating each element in order
    pub fn from_elements(
        name: impl Into<String>,
        lines: impl IntoIterator<Item = Line<N>>,
        faces: impl IntoIterator<Item = Face<N>>,
    ) -> GeometryResult<Self> {
        let mut model = Self::new(name);
        for line in lines {
            model.add_line_element(line)?;
        }
        for face in faces {
            model.add_face_element(face)?;
        }
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn lines(&self) -> &DynamicSet<Line<N>> {
        &self.lines
    }

    pub fn faces(&self) -> &DynamicSet<Face<N>> {
        &self.faces
    }

    pub fn line(&self, index: usize) -> GeometryResult<&Line<N>> {
        self.lines.get(index)
    }

    pub fn face(&self, index: usize) -> GeometryResult<&Face<N>> {
        self.faces.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.faces.is_empty()
    }

    // ============== Lines ==============

    /// Add a line from raw start and end coordinates
    pub fn add_line(&mut self, points: [[f64; N]; 2]) -> GeometryResult<()> {
        self.add_line_element(Line::from_coords(points))
    }

    pub fn add_line_element(&mut self, line: Line<N>) -> GeometryResult<()> {
        add_checked(&mut self.lines, line)
    }

    /// Move one point of an existing line
    pub fn modify_line(
        &mut self,
        index: usize,
        point_index: usize,
        coords: [f64; N],
    ) -> GeometryResult<()> {
        modify_checked(&mut self.lines, index, point_index, coords)
    }

    pub fn remove_line(&mut self, index: usize) -> GeometryResult<Line<N>> {
        self.lines.remove(index)
    }

    // ============== Faces ==============

    /// Add a face from raw coordinates of its three points
    pub fn add_face(&mut self, points: [[f64; N]; 3]) -> GeometryResult<()> {
        self.add_face_element(Face::from_coords(points))
    }

    pub fn add_face_element(&mut self, face: Face<N>) -> GeometryResult<()> {
        add_checked(&mut self.faces, face)
    }

    /// Move one point of an existing face
    pub fn modify_face(
        &mut self,
        index: usize,
        point_index: usize,
        coords: [f64; N],
    ) -> GeometryResult<()> {
        modify_checked(&mut self.faces, index, point_index, coords)
    }

    pub fn remove_face(&mut self, index: usize) -> GeometryResult<Face<N>> {
        self.faces.remove(index)
    }

    // ============== Queries ==============

    /// Distinct points of all lines, then all faces, in first-seen order
    pub fn points(&self) -> DynamicSet<Point<N>> {
        let line_points = self.lines.iter().flat_map(|l| l.points().iter().copied());
        let face_points = self.faces.iter().flat_map(|f| f.points().iter().copied());
        line_points.chain(face_points).collect()
    }

    /// Bounds of every point in the model; `None` when the model is empty
    pub fn bounding_box(&self) -> Option<BoundingBox<N>> {
        BoundingBox::of(&self.points()).ok()
    }

    pub fn total_line_length(&self) -> f64 {
        self.lines.iter().map(Line::length).sum()
    }

    pub fn total_face_area(&self) -> f64 {
        self.faces.iter().map(Face::area).sum()
    }
}

/// Validate `element` against `set`, ignoring the element at `replacing`
fn validate<const N: usize, const K: usize>(
    set: &DynamicSet<Element<N, K>>,
    element: &Element<N, K>,
    replacing: Option<usize>,
) -> GeometryResult<()> {
    if !element.has_distinct_points() {
        return Err(GeometryError::PointCollision);
    }
    let collides = set
        .iter()
        .enumerate()
        .any(|(i, existing)| Some(i) != replacing && existing == element);
    if collides {
        return Err(GeometryError::ElementCollision);
    }
    Ok(())
}

fn add_checked<const N: usize, const K: usize>(
    set: &mut DynamicSet<Element<N, K>>,
    element: Element<N, K>,
) -> GeometryResult<()> {
    validate(set, &element, None)?;
    set.add(element)
}

fn modify_checked<const N: usize, const K: usize>(
    set: &mut DynamicSet<Element<N, K>>,
    index: usize,
    point_index: usize,
    coords: [f64; N],
) -> GeometryResult<()> {
    let candidate = set.get(index)?.with_point(point_index, Point::new(coords))?;
    validate(set, &candidate, Some(index))?;
    set.set(index, candidate)
}
