//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::point::Point;
use crate::vector::Vector;

/// Axis-aligned box spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<const N: usize> {
    /// First corner
    pub vertex1: Point<N>,
    /// Corner opposite `vertex1`; it need not be the per-axis maximum.
    pub vertex2: Point<N>,
}

impl<const N: usize> BoundingBox<N> {
    pub fn new(vertex1: Point<N>, vertex2: Point<N>) -> Self {
        Self { vertex1, vertex2 }
    }

    /// Smallest box containing every point.
    ///
    /// `vertex1` holds the per-axis minimum and `vertex2` the maximum.
    /// Fails with [`GeometryError::InvalidArgument`] for an empty input.
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point<N>>) -> GeometryResult<Self> {
        let mut points = points.into_iter();
        let first = points.next().ok_or_else(|| {
            GeometryError::InvalidArgument("bounding box of an empty point set".to_string())
        })?;

        let mut min = first.to_array();
        let mut max = first.to_array();
        for point in points {
            for axis in 0..N {
                min[axis] = min[axis].min(point[axis]);
                max[axis] = max[axis].max(point[axis]);
            }
        }

        Ok(Self::new(Point::new(min), Point::new(max)))
    }

    /// Corner with the smallest coordinate on every axis
    pub fn min_corner(&self) -> Point<N> {
        Point::new(std::array::from_fn(|axis| {
            self.vertex1[axis].min(self.vertex2[axis])
        }))
    }

    /// Corner with the largest coordinate on every axis
    pub fn max_corner(&self) -> Point<N> {
        Point::new(std::array::from_fn(|axis| {
            self.vertex1[axis].max(self.vertex2[axis])
        }))
    }

    /// Non-negative size along each axis
    pub fn extents(&self) -> Vector<N> {
        self.max_corner() - self.min_corner()
    }

    /// Product of the per-axis extents; zero when any axis is flat
    pub fn volume(&self) -> f64 {
        self.extents().components().iter().product()
    }

    pub fn contains_point(&self, point: &Point<N>) -> bool {
        let (min, max) = (self.min_corner(), self.max_corner());
        (0..N).all(|axis| point[axis] >= min[axis] && point[axis] <= max[axis])
    }
}
