//! Fixed-dimension real vectors
//!
//! The dimension is a const generic parameter, so vectors of different
//! dimensions are different types and all arithmetic works on stack arrays.
//! Equality is exact componentwise `f64` equality; no tolerance is applied.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// An N-dimensional vector with `f64` components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct Vector<const N: usize> {
    components: [f64; N],
}

impl<const N: usize> Vector<N> {
    const POSITIVE_DIMENSION: () = assert!(N > 0, "dimension must be positive");

    /// Number of components
    pub const DIMENSION: usize = N;

    /// The zero vector
    pub const ZERO: Self = Self {
        components: [0.0; N],
    };

    /// Create a vector from its components
    pub const fn new(components: [f64; N]) -> Self {
        let () = Self::POSITIVE_DIMENSION;
        Self { components }
    }

    /// Create a vector with every component set to `value`
    pub const fn splat(value: f64) -> Self {
        Self::new([value; N])
    }

    pub fn components(&self) -> &[f64; N] {
        &self.components
    }

    pub fn to_array(self) -> [f64; N] {
        self.components
    }

    /// Get a component, failing on an out-of-range index
    pub fn get(&self, index: usize) -> GeometryResult<f64> {
        self.components
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange { index, len: N })
    }

    /// Set a component, failing on an out-of-range index
    pub fn set(&mut self, index: usize, value: f64) -> GeometryResult<()> {
        let slot = self
            .components
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Replace all components at once
    pub fn set_all(&mut self, components: [f64; N]) {
        self.components = components;
    }

    /// Inner product
    pub fn dot(&self, other: &Self) -> f64 {
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|c| *c == 0.0)
    }

    pub fn negate_in_place(&mut self) {
        for c in &mut self.components {
            *c = -*c;
        }
    }

    /// Squared magnitude of the wedge (generalized cross) product.
    ///
    /// Sums the squares of every 2x2 minor `a[i]b[j] - a[j]b[i]` with `i < j`.
    /// For `N = 3` this equals `|a x b|^2`; in any dimension it is the squared
    /// area of the parallelogram spanned by `a` and `b`.
    pub fn wedge_norm_squared(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        for i in 0..N {
            for j in (i + 1)..N {
                let minor = self.minor(other, i, j);
                sum += minor * minor;
            }
        }
        sum
    }

    /// Whether `self` and `other` are scalar multiples of each other.
    ///
    /// True iff every 2x2 minor is exactly zero, which also holds when either
    /// vector is zero.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        (0..N).all(|i| ((i + 1)..N).all(|j| self.minor(other, i, j) == 0.0))
    }

    /// 2x2 minor `self[i] * other[j] - self[j] * other[i]`
    pub(crate) fn minor(&self, other: &Self, i: usize, j: usize) -> f64 {
        self.components[i] * other.components[j] - self.components[j] * other.components[i]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<Vector<N>> for Vec<f64> {
    fn from(vector: Vector<N>) -> Self {
        vector.components.to_vec()
    }
}

impl<const N: usize> TryFrom<Vec<f64>> for Vector<N> {
    type Error = GeometryError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        let len = components.len();
        let components: [f64; N] = components.try_into().map_err(|_| {
            GeometryError::InvalidArgument(format!("expected {N} components, got {len}"))
        })?;
        Ok(Self::new(components))
    }
}

impl From<Vector<2>> for DVec2 {
    fn from(vector: Vector<2>) -> Self {
        DVec2::from_array(vector.components)
    }
}

impl From<DVec2> for Vector<2> {
    fn from(vector: DVec2) -> Self {
        Self::new(vector.to_array())
    }
}

impl From<Vector<3>> for DVec3 {
    fn from(vector: Vector<3>) -> Self {
        DVec3::from_array(vector.components)
    }
}

impl From<DVec3> for Vector<3> {
    fn from(vector: DVec3) -> Self {
        Self::new(vector.to_array())
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.components[index]
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate_in_place();
        self
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.components.iter_mut().zip(rhs.components) {
            *a += b;
        }
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.components.iter_mut().zip(rhs.components) {
            *a -= b;
        }
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const N: usize> MulAssign<f64> for Vector<N> {
    fn mul_assign(&mut self, factor: f64) {
        for c in &mut self.components {
            *c *= factor;
        }
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(mut self, factor: f64) -> Self {
        self *= factor;
        self
    }
}

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn mul(self, vector: Vector<N>) -> Vector<N> {
        vector * self
    }
}

/// `a * b` between two vectors is the inner product
impl<const N: usize> Mul for Vector<N> {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(&rhs)
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_component_access() {
        let mut v = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(v.get(1), Ok(2.0));
        assert_eq!(
            v.get(3),
            Err(GeometryError::IndexOutOfRange { index: 3, len: 3 })
        );

        v.set(2, 7.5).unwrap();
        assert_eq!(v[2], 7.5);
        assert!(v.set(5, 0.0).is_err());
        assert_eq!(v, Vector::new([1.0, 2.0, 7.5]));

        v.set_all([4.0; 3]);
        assert_eq!(v, Vector::splat(4.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new([1.0, -2.0, 0.5, 4.0]);
        let b = Vector::new([0.25, 3.0, -1.0, 2.0]);

        assert_eq!(a + b, Vector::new([1.25, 1.0, -0.5, 6.0]));
        assert_eq!(a - b, Vector::new([0.75, -5.0, 1.5, 2.0]));
        assert_eq!(-a, Vector::new([-1.0, 2.0, -0.5, -4.0]));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a + b - b, a);

        let mut c = a;
        c += b;
        c -= b;
        c *= 3.0;
        assert_eq!(c, Vector::new([3.0, -6.0, 1.5, 12.0]));
    }

    #[test]
    fn test_dot_and_norm() {
        let a = Vector::new([3.0, 4.0]);
        let b = Vector::new([-4.0, 3.0]);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a * a, 25.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(Vector::<5>::ZERO.norm(), 0.0);
    }

    #[test]
    fn test_wedge_matches_cross_product_in_3d() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([-2.0, 0.5, 4.0]);
        let cross = DVec3::from(a).cross(DVec3::from(b));
        assert_relative_eq!(a.wedge_norm_squared(&b), cross.length_squared());
    }

    #[test]
    fn test_parallel_detection() {
        let a = Vector::new([1.0, 2.0, 3.0, 4.0]);
        assert!(a.is_parallel_to(&(a * -2.5)));
        assert!(!a.is_parallel_to(&Vector::new([1.0, 2.0, 3.0, 5.0])));
        assert!(a.is_parallel_to(&Vector::ZERO));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vector::new([0.1 + 0.2]);
        let b = Vector::new([0.3]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new([1.0, -2.5, 0.0]).to_string(), "(1, -2.5, 0)");
    }

    #[test]
    fn test_serde_rejects_wrong_dimension() {
        let json = serde_json::to_string(&Vector::new([1.0, 2.0])).unwrap();
        assert_eq!(json, "[1.0,2.0]");
        assert!(serde_json::from_str::<Vector<3>>(&json).is_err());
    }
}
