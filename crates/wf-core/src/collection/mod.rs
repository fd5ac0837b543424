//! Duplicate-free collections

mod dynamic_set;

pub use dynamic_set::DynamicSet;

use crate::error::GeometryResult;

/// An indexed collection in which no two stored values are equal
///
/// Every mutator upholds the invariant itself: adding, inserting or
/// overwriting with a value equal to another stored element fails with
/// [`GeometryError::ElementCollision`](crate::GeometryError::ElementCollision),
/// and out-of-range indices fail with
/// [`GeometryError::IndexOutOfRange`](crate::GeometryError::IndexOutOfRange).
pub trait DistinctCollection<T: PartialEq> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> GeometryResult<&T>;

    /// Overwrite the element at `index`
    fn set(&mut self, index: usize, value: T) -> GeometryResult<()>;

    /// Append a value
    fn add(&mut self, value: T) -> GeometryResult<()>;

    /// Remove and return the element at `index`
    fn remove(&mut self, index: usize) -> GeometryResult<T>;

    /// Insert before `index`; `index == len` appends
    fn insert(&mut self, index: usize, value: T) -> GeometryResult<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the element equal to `value`
    fn position(&self, value: &T) -> Option<usize> {
        (0..self.len()).find(|&i| self.get(i).is_ok_and(|v| v == value))
    }

    fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }
}
