//! Line segments

use super::Element;
use crate::point::Point;
use crate::vector::Vector;

/// Line segment from `start` (point 0) to `end` (point 1)
pub type Line<const N: usize> = Element<N, 2>;

impl<const N: usize> Element<N, 2> {
    pub fn from_points(start: Point<N>, end: Point<N>) -> Self {
        Self::new([start, end])
    }

    pub fn start(&self) -> &Point<N> {
        &self.points[0]
    }

    pub fn end(&self) -> &Point<N> {
        &self.points[1]
    }

    /// Vector from start to end
    pub fn direction(&self) -> Vector<N> {
        *self.end() - *self.start()
    }

    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Segments enclose no area
    pub fn area(&self) -> f64 {
        0.0
    }

    /// Zero-length segment; it has no direction
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }

    /// Whether the directions are scalar multiples of each other.
    ///
    /// Degenerate segments are never parallel to anything.
    pub fn is_parallel(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.direction().is_parallel_to(&other.direction())
    }

    /// Whether the directions have an exactly zero inner product.
    ///
    /// Degenerate segments are never perpendicular to anything.
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.direction().dot(&other.direction()) == 0.0
    }

    /// The single point shared by both segments.
    ///
    /// Solves `start1 + t * d1 = start2 + u * d2` on the pair of axes with
    /// the largest 2x2 determinant and requires `t` and `u` in `[0, 1]`. The
    /// points given by both parametrizations must then be exactly equal, so
    /// the result does not depend on which segment is the receiver. Returns
    /// `None` for degenerate, parallel (including collinear) and skew
    /// segments, and when the crossing lies outside either segment.
    pub fn intersection(&self, other: &Self) -> Option<Point<N>> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }

        let d1 = self.direction();
        let d2 = other.direction();
        let w = *other.start() - *self.start();

        let (axis_i, axis_j, det) = best_axes(&d1, &d2)?;

        let t = w.minor(&d2, axis_i, axis_j) / det;
        let u = w.minor(&d1, axis_i, axis_j) / det;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }

        let on_self = *self.start() + d1 * t;
        let on_other = *other.start() + d2 * u;
        (on_self == on_other).then_some(on_self)
    }
}

/// Pair of axes `(i, j)` maximizing `|d1[i]d2[j] - d1[j]d2[i]|`, with the signed
/// determinant. `None` when every minor is zero (parallel directions).
fn best_axes<const N: usize>(d1: &Vector<N>, d2: &Vector<N>) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..N {
        for j in (i + 1)..N {
            let det = d1.minor(d2, i, j);
            if det != 0.0 && best.is_none_or(|(_, _, b)| det.abs() > b.abs()) {
                best = Some((i, j, det));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line3(a: [f64; 3], b: [f64; 3]) -> Line<3> {
        Line::from_points(Point::new(a), Point::new(b))
    }

    #[test]
    fn test_length() {
        let line = line3([0.0, 0.0, 0.0], [1.0, 2.0, 2.0]);
        assert_eq!(line.length(), 3.0);
        assert_eq!(line.area(), 0.0);
        assert_eq!(line.start(), &Point::new([0.0, 0.0, 0.0]));
        assert_eq!(line.end(), &Point::new([1.0, 2.0, 2.0]));
    }

    #[test]
    fn test_equality_is_direction_independent() {
        assert_eq!(
            line3([0.0, 0.0, 0.0], [1.0, 2.0, 2.0]),
            line3([1.0, 2.0, 2.0], [0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_parallel() {
        let a = line3([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        let b = line3([5.0, 0.0, 1.0], [3.0, -2.0, 1.0]);
        let c = line3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(a.is_parallel(&b));
        assert!(!a.is_parallel(&c));
    }

    #[test]
    fn test_perpendicular() {
        let a = line3([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        let b = line3([0.0, 1.0, 7.0], [1.0, 0.0, 7.0]);
        assert!(a.is_perpendicular(&b));
        assert!(!a.is_perpendicular(&a));
    }

    #[test]
    fn test_degenerate_line_has_no_relations() {
        let point = line3([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]);
        let a = line3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(point.is_degenerate());
        assert_eq!(point.length(), 0.0);
        assert!(!point.is_parallel(&a));
        assert!(!a.is_parallel(&point));
        assert!(!point.is_perpendicular(&a));
        assert_eq!(point.intersection(&a), None);
    }

    #[test]
    fn test_intersection_axis_aligned() {
        let a = line3([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let b = line3([1.0, -1.0, 0.0], [1.0, 1.0, 0.0]);
        assert_eq!(a.intersection(&b), Some(Point::new([1.0, 0.0, 0.0])));
        assert_eq!(b.intersection(&a), Some(Point::new([1.0, 0.0, 0.0])));
    }

    #[test]
    fn test_intersection_diagonals() {
        let a = line3([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        let b = line3([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
        assert_eq!(a.intersection(&b), Some(Point::new([0.5, 0.5, 0.0])));
    }

    #[test]
    fn test_intersection_collinear_disjoint() {
        let a = line3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = line3([2.0, 0.0, 0.0], [3.0, 0.0, 0.0]);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_at_endpoint() {
        let a = line3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = line3([1.0, 0.0, 0.0], [1.0, 3.0, 0.0]);
        assert_eq!(a.intersection(&b), Some(Point::new([1.0, 0.0, 0.0])));
    }

    #[test]
    fn test_intersection_outside_segment() {
        let a = line3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = line3([2.0, -1.0, 0.0], [2.0, 1.0, 0.0]);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_skew() {
        let a = line3([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let b = line3([1.0, -1.0, 1.0], [1.0, 1.0, 1.0]);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_is_symmetric_in_general_position() {
        let directions = [
            [1.0, 2.0, 3.0],
            [-2.0, 1.0, 0.5],
            [0.3, -0.7, 1.1],
            [5.0, 0.0, -1.0],
        ];
        for a in 1..4 {
            for b in 1..6 {
                for c in 1..8 {
                    let p = Point::new([a as f64 / 3.0, b as f64 / 7.0, c as f64 / 11.0]);
                    for (k, d1) in directions.iter().enumerate() {
                        for d2 in &directions[k + 1..] {
                            let (d1, d2) = (Vector::new(*d1), Vector::new(*d2));
                            let l1 = Line::from_points(p - d1, p + d1 * 0.5);
                            let l2 = Line::from_points(p - d2 * 0.25, p + d2);
                            let forward = l1.intersection(&l2);
                            assert_eq!(forward, l2.intersection(&l1));
                            if let Some(q) = forward {
                                assert_relative_eq!(q.distance(&p), 0.0, epsilon = 1e-12);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_intersection_in_higher_dimension() {
        let a: Line<4> = Line::from_coords([[0.0, 0.0, 0.0, 0.0], [0.0, 0.0, 2.0, 2.0]]);
        let b: Line<4> = Line::from_coords([[0.0, 0.0, 0.0, 2.0], [0.0, 0.0, 2.0, 0.0]]);
        assert_eq!(a.intersection(&b), Some(Point::new([0.0, 0.0, 1.0, 1.0])));
    }

    #[test]
    fn test_intersection_in_plane() {
        let a: Line<2> = Line::from_coords([[0.0, 0.0], [3.0, 3.0]]);
        let b: Line<2> = Line::from_coords([[0.0, 3.0], [3.0, 0.0]]);
        let p = a.intersection(&b).unwrap();
        assert_relative_eq!(p[0], 1.5);
        assert_relative_eq!(p[1], 1.5);
    }
}
