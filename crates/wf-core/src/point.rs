//! Affine points built on [`Vector`]

use std::fmt;
use std::ops::{Add, AddAssign, Index, Neg, Sub, SubAssign};

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAD;
use crate::error::GeometryResult;
use crate::vector::Vector;

/// A location in N-dimensional space
///
/// `point + vector` and `point - vector` give points, `point - point` gives
/// the vector between them. Scaling and inner products are vector-only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point<const N: usize> {
    coords: Vector<N>,
}

impl<const N: usize> Point<N> {
    pub const DIMENSION: usize = N;

    pub const ORIGIN: Self = Self {
        coords: Vector::ZERO,
    };

    pub const fn new(coords: [f64; N]) -> Self {
        Self {
            coords: Vector::new(coords),
        }
    }

    /// Position vector of this point relative to the origin
    pub fn coords(&self) -> Vector<N> {
        self.coords
    }

    pub fn to_array(self) -> [f64; N] {
        self.coords.to_array()
    }

    pub fn get(&self, index: usize) -> GeometryResult<f64> {
        self.coords.get(index)
    }

    pub fn set(&mut self, index: usize, value: f64) -> GeometryResult<()> {
        self.coords.set(index, value)
    }

    /// Euclidean distance between two points of the same dimension
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    /// Euclidean distance to a point of any dimension.
    ///
    /// The lower-dimension point is treated as embedded in the higher
    /// dimension, with its missing coordinates equal to zero.
    pub fn general_distance<const M: usize>(&self, other: &Point<M>) -> f64 {
        let mut sum = 0.0;
        for axis in 0..N.max(M) {
            let a = self.coords.components().get(axis).copied().unwrap_or(0.0);
            let b = other.coords.components().get(axis).copied().unwrap_or(0.0);
            sum += (a - b) * (a - b);
        }
        sum.sqrt()
    }

    /// Keep the first `M` coordinates (`M <= N`)
    pub fn project<const M: usize>(&self) -> Point<M> {
        const { assert!(M <= N, "projection target must not exceed source dimension") };
        let source = self.coords.components();
        Point::new(std::array::from_fn(|axis| source[axis]))
    }

    /// Append `M - N` copies of `pad` (`M >= N`)
    pub fn promote<const M: usize>(&self, pad: f64) -> Point<M> {
        const { assert!(M >= N, "promotion target must not be below source dimension") };
        let source = self.coords.components();
        Point::new(std::array::from_fn(|axis| {
            if axis < N { source[axis] } else { pad }
        }))
    }

    /// [`Point::promote`] with the default zero pad
    pub fn promote_zero<const M: usize>(&self) -> Point<M> {
        self.promote(DEFAULT_PAD)
    }
}

impl<const N: usize> From<[f64; N]> for Point<N> {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<Vector<N>> for Point<N> {
    fn from(coords: Vector<N>) -> Self {
        Self { coords }
    }
}

impl From<Point<2>> for DVec2 {
    fn from(point: Point<2>) -> Self {
        point.coords.into()
    }
}

impl From<DVec2> for Point<2> {
    fn from(point: DVec2) -> Self {
        Vector::<2>::from(point).into()
    }
}

impl From<Point<3>> for DVec3 {
    fn from(point: Point<3>) -> Self {
        point.coords.into()
    }
}

impl From<DVec3> for Point<3> {
    fn from(point: DVec3) -> Self {
        Vector::<3>::from(point).into()
    }
}

impl<const N: usize> Index<usize> for Point<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl<const N: usize> Neg for Point<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coords: -self.coords,
        }
    }
}

impl<const N: usize> AddAssign<Vector<N>> for Point<N> {
    fn add_assign(&mut self, delta: Vector<N>) {
        self.coords += delta;
    }
}

impl<const N: usize> Add<Vector<N>> for Point<N> {
    type Output = Self;

    fn add(mut self, delta: Vector<N>) -> Self {
        self += delta;
        self
    }
}

impl<const N: usize> SubAssign<Vector<N>> for Point<N> {
    fn sub_assign(&mut self, delta: Vector<N>) {
        self.coords -= delta;
    }
}

impl<const N: usize> Sub<Vector<N>> for Point<N> {
    type Output = Self;

    fn sub(mut self, delta: Vector<N>) -> Self {
        self -= delta;
        self
    }
}

impl<const N: usize> Sub for Point<N> {
    type Output = Vector<N>;

    fn sub(self, other: Self) -> Vector<N> {
        self.coords - other.coords
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coords, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation() {
        let p = Point::new([1.0, 2.0, 3.0]);
        let v = Vector::new([0.5, -1.0, 2.0]);

        assert_eq!(p + v, Point::new([1.5, 1.0, 5.0]));
        assert_eq!(p + v - v, p);
        assert_eq!((p + v) - p, v);

        let mut q = p;
        q += v;
        q -= v;
        assert_eq!(q, p);
        assert_eq!(-p, Point::new([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn test_distance() {
        let a = Point::new([0.0, 0.0]);
        let b = Point::new([3.0, 4.0]);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_general_distance_pads_lower_dimension() {
        let plane = Point::new([3.0, 0.0]);
        let space = Point::new([0.0, 0.0, 4.0]);
        assert_relative_eq!(plane.general_distance(&space), 5.0);
        assert_relative_eq!(space.general_distance(&plane), 5.0);

        let same = Point::new([1.0, 1.0]);
        assert_eq!(same.general_distance(&Point::new([1.0, 1.0, 0.0])), 0.0);
    }

    #[test]
    fn test_project_and_promote() {
        let p = Point::new([1.0, 2.0, 3.0]);
        assert_eq!(p.project::<2>(), Point::new([1.0, 2.0]));
        assert_eq!(p.promote::<5>(9.0), Point::new([1.0, 2.0, 3.0, 9.0, 9.0]));
        assert_eq!(p.promote_zero::<4>(), Point::new([1.0, 2.0, 3.0, 0.0]));
        assert_eq!(p.promote::<6>(-1.0).project::<3>(), p);
        assert_eq!(p.project::<3>(), p);
    }

    #[test]
    fn test_glam_conversion() {
        let p = Point::new([1.0, -2.0, 0.5]);
        let v: DVec3 = p.into();
        assert_eq!(v, DVec3::new(1.0, -2.0, 0.5));
        assert_eq!(Point::from(v), p);
        assert_eq!(Point::from(DVec2::new(1.0, 2.0)), Point::new([1.0, 2.0]));
    }
}
