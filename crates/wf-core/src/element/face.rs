//! Triangular faces

use super::{Element, Line};
use crate::point::Point;

/// Planar polygon through three points
pub type Face<const N: usize> = Element<N, 3>;

impl<const N: usize> Element<N, 3> {
    pub fn from_points(a: Point<N>, b: Point<N>, c: Point<N>) -> Self {
        Self::new([a, b, c])
    }

    /// The three boundary edges, in point order
    pub fn edges(&self) -> [Line<N>; 3] {
        let [a, b, c] = self.points;
        [
            Line::from_points(a, b),
            Line::from_points(b, c),
            Line::from_points(c, a),
        ]
    }

    /// Perimeter
    pub fn length(&self) -> f64 {
        self.edges().iter().map(Line::length).sum()
    }

    /// Half the norm of the generalized cross product of two edges sharing
    /// the first vertex. Collinear points give zero.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.points;
        let ab = b - a;
        let ac = c - a;
        0.5 * ab.wedge_norm_squared(&ac).sqrt()
    }

    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.points;
        (b - a).is_parallel_to(&(c - a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_right_triangle() {
        let face: Face<3> = Face::from_coords([[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 3.0, 0.0]]);
        assert_relative_eq!(face.area(), 6.0);
        assert_relative_eq!(face.length(), 12.0);
        assert!(!face.is_degenerate());
    }

    #[test]
    fn test_area_is_orientation_free() {
        let face: Face<3> = Face::from_coords([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let expected = 3.0_f64.sqrt() / 2.0;
        assert_relative_eq!(face.area(), expected);

        let flipped: Face<3> =
            Face::from_coords([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_relative_eq!(flipped.area(), expected);
        assert_eq!(face, flipped);
    }

    #[test]
    fn test_collinear_face_has_zero_area() {
        let face: Face<3> = Face::from_coords([[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
        assert_eq!(face.area(), 0.0);
        assert!(face.is_degenerate());
    }

    #[test]
    fn test_area_in_higher_dimension() {
        let face: Face<5> = Face::from_coords([
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 2.0],
        ]);
        assert_relative_eq!(face.area(), 2.0);
    }

    #[test]
    fn test_edges() {
        let face: Face<2> = Face::from_coords([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let [ab, bc, ca] = face.edges();
        assert_eq!(ab.length(), 1.0);
        assert_relative_eq!(bc.length(), 2.0_f64.sqrt());
        assert_eq!(ca.length(), 1.0);
    }
}
