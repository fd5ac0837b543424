//! Fixed-arity point tuples
//!
//! An [`Element`] holds exactly `K` points of dimension `N`. Lines (`K = 2`)
//! and faces (`K = 3`) are aliases with their own geometry in submodules.

mod face;
mod line;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::point::Point;

pub use face::Face;
pub use line::Line;

/// A tuple of `K` points of dimension `N`
///
/// Two elements are equal when they hold the same points, regardless of
/// order. The points themselves need not be distinct; the model enforces
/// that before an element is stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "Vec<Point<N>>", try_from = "Vec<Point<N>>")]
pub struct Element<const N: usize, const K: usize> {
    points: [Point<N>; K],
}

impl<const N: usize, const K: usize> Element<N, K> {
    const MIN_ARITY: () = assert!(K >= 2, "an element needs at least two points");

    /// Number of points in this element kind
    pub const ARITY: usize = K;

    pub fn new(points: [Point<N>; K]) -> Self {
        let () = Self::MIN_ARITY;
        Self { points }
    }

    /// Build from raw coordinates, one array per point
    pub fn from_coords(coords: [[f64; N]; K]) -> Self {
        Self::new(coords.map(Point::new))
    }

    pub fn points(&self) -> &[Point<N>; K] {
        &self.points
    }

    pub fn point(&self, index: usize) -> GeometryResult<&Point<N>> {
        self.points
            .get(index)
            .ok_or(GeometryError::PointIndexOverflow { index, arity: K })
    }

    pub fn set_point(&mut self, index: usize, point: Point<N>) -> GeometryResult<()> {
        let slot = self
            .points
            .get_mut(index)
            .ok_or(GeometryError::PointIndexOverflow { index, arity: K })?;
        *slot = point;
        Ok(())
    }

    /// Copy of this element with one point replaced
    pub fn with_point(&self, index: usize, point: Point<N>) -> GeometryResult<Self> {
        let mut element = *self;
        element.set_point(index, point)?;
        Ok(element)
    }

    /// Whether no two points of this element coincide
    pub fn has_distinct_points(&self) -> bool {
        self.points
            .iter()
            .enumerate()
            .all(|(i, p)| self.points[i + 1..].iter().all(|q| p != q))
    }

    pub fn contains(&self, point: &Point<N>) -> bool {
        self.points.contains(point)
    }
}

impl<const N: usize, const K: usize> PartialEq for Element<N, K> {
    /// Multiset comparison: every point of `self` is matched to a distinct,
    /// equal point of `other`.
    fn eq(&self, other: &Self) -> bool {
        let mut matched = [false; K];
        self.points.iter().all(|p| {
            let found = other
                .points
                .iter()
                .enumerate()
                .find(|(j, q)| !matched[*j] && p == *q)
                .map(|(j, _)| j);
            match found {
                Some(j) => {
                    matched[j] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<const N: usize, const K: usize> From<[Point<N>; K]> for Element<N, K> {
    fn from(points: [Point<N>; K]) -> Self {
        Self::new(points)
    }
}

impl<const N: usize, const K: usize> From<Element<N, K>> for Vec<Point<N>> {
    fn from(element: Element<N, K>) -> Self {
        element.points.to_vec()
    }
}

impl<const N: usize, const K: usize> TryFrom<Vec<Point<N>>> for Element<N, K> {
    type Error = GeometryError;

    fn try_from(points: Vec<Point<N>>) -> Result<Self, Self::Error> {
        let len = points.len();
        let points: [Point<N>; K] = points.try_into().map_err(|_| {
            GeometryError::InvalidArgument(format!("expected {K} points, got {len}"))
        })?;
        Ok(Self::new(points))
    }
}

impl<const N: usize, const K: usize> fmt::Display for Element<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
