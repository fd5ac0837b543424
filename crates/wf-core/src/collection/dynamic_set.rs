//! Insertion-ordered set over an equatable element type
//!
//! Only `PartialEq` is required of the element type, so membership tests are
//! linear scans and every pairwise set operation is `O(|A| * |B|)`. Model
//! collections stay small enough for that; a hashed or ordered variant would
//! be the upgrade path for large, hashable element types.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Sub, SubAssign,
};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DistinctCollection;
use crate::error::{GeometryError, GeometryResult};

/// Insertion-ordered, duplicate-free sequence
///
/// Equality between sets is membership equality: order does not matter.
#[derive(Debug, Clone)]
pub struct DynamicSet<T> {
    elements: Vec<T>,
}

impl<T> Default for DynamicSet<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: PartialEq> DynamicSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a vector, failing if it holds duplicates
    pub fn try_from_vec(elements: Vec<T>) -> GeometryResult<Self> {
        let mut set = Self::new();
        for element in elements {
            set.add(element)?;
        }
        Ok(set)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Whether every element of `self` is in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.iter().all(|e| other.contains(e))
    }

    fn check_index(&self, index: usize, len: usize) -> GeometryResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(GeometryError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }

    /// Add unless already present; returns whether it was added
    fn push_distinct(&mut self, value: T) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.elements.push(value);
            true
        }
    }
}

impl<T: PartialEq + Clone> DynamicSet<T> {
    /// Elements of `self` that are also in `other`, in `self`'s order
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|e| other.contains(e))
                .cloned()
                .collect(),
        }
    }

    /// All of `self`, then the elements of `other` not already in `self`
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Elements of `self` that are not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|e| !other.contains(e))
                .cloned()
                .collect(),
        }
    }

    /// `(self - other) | (other - self)`
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.union_with(&other.difference(self));
        result
    }

    pub fn intersect_with(&mut self, other: &Self) {
        self.elements.retain(|e| other.contains(e));
    }

    pub fn union_with(&mut self, other: &Self) {
        for element in &other.elements {
            if !self.contains(element) {
                self.elements.push(element.clone());
            }
        }
    }

    pub fn difference_with(&mut self, other: &Self) {
        self.elements.retain(|e| !other.contains(e));
    }

    pub fn symmetric_difference_with(&mut self, other: &Self) {
        *self = self.symmetric_difference(other);
    }
}

impl<T: PartialEq> DistinctCollection<T> for DynamicSet<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> GeometryResult<&T> {
        self.elements.get(index).ok_or(GeometryError::IndexOutOfRange {
            index,
            len: self.elements.len(),
        })
    }

    fn set(&mut self, index: usize, value: T) -> GeometryResult<()> {
        self.check_index(index, self.elements.len())?;
        let clashes = self
            .elements
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && *e == value);
        if clashes {
            return Err(GeometryError::ElementCollision);
        }
        self.elements[index] = value;
        Ok(())
    }

    fn add(&mut self, value: T) -> GeometryResult<()> {
        if self.push_distinct(value) {
            Ok(())
        } else {
            Err(GeometryError::ElementCollision)
        }
    }

    fn remove(&mut self, index: usize) -> GeometryResult<T> {
        self.check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    fn insert(&mut self, index: usize, value: T) -> GeometryResult<()> {
        self.check_index(index, self.elements.len() + 1)?;
        if self.contains(&value) {
            return Err(GeometryError::ElementCollision);
        }
        self.elements.insert(index, value);
        Ok(())
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == value)
    }
}

impl<T: PartialEq> PartialEq for DynamicSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len() && self.is_subset(other)
    }
}

impl<T> Index<usize> for DynamicSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

/// Collecting skips values equal to one already collected
impl<T: PartialEq> FromIterator<T> for DynamicSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for DynamicSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_distinct(value);
        }
    }
}

impl<T: PartialEq> From<Vec<T>> for DynamicSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for DynamicSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Serialize> Serialize for DynamicSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.elements)
    }
}

impl<'de, T> Deserialize<'de> for DynamicSet<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Self::try_from_vec(elements).map_err(D::Error::custom)
    }
}

// Operator forms: `&`, `|`, `-`, `^` and their compound assignments, for both
// borrowed and owned operands.
macro_rules! set_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $build:ident, $in_place:ident) => {
        impl<T: PartialEq + Clone> $op<&DynamicSet<T>> for &DynamicSet<T> {
            type Output = DynamicSet<T>;

            fn $method(self, rhs: &DynamicSet<T>) -> DynamicSet<T> {
                self.$build(rhs)
            }
        }

        impl<T: PartialEq + Clone> $op<&DynamicSet<T>> for DynamicSet<T> {
            type Output = DynamicSet<T>;

            fn $method(mut self, rhs: &DynamicSet<T>) -> DynamicSet<T> {
                self.$in_place(rhs);
                self
            }
        }

        impl<T: PartialEq + Clone> $op for DynamicSet<T> {
            type Output = DynamicSet<T>;

            fn $method(mut self, rhs: DynamicSet<T>) -> DynamicSet<T> {
                self.$in_place(&rhs);
                self
            }
        }

        impl<T: PartialEq + Clone> $assign_op<&DynamicSet<T>> for DynamicSet<T> {
            fn $assign_method(&mut self, rhs: &DynamicSet<T>) {
                self.$in_place(rhs);
            }
        }

        impl<T: PartialEq + Clone> $assign_op for DynamicSet<T> {
            fn $assign_method(&mut self, rhs: DynamicSet<T>) {
                self.$in_place(&rhs);
            }
        }
    };
}

set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection, intersect_with);
set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union, union_with);
set_operator!(Sub, sub, SubAssign, sub_assign, difference, difference_with);
set_operator!(
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    symmetric_difference,
    symmetric_difference_with
);

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[i32]) -> DynamicSet<i32> {
        DynamicSet::try_from_vec(values.to_vec()).unwrap()
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut s = set(&[1, 2]);
        assert_eq!(s.add(2), Err(GeometryError::ElementCollision));
        s.add(3).unwrap();
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert() {
        let mut s = set(&[1, 3]);
        s.insert(1, 2).unwrap();
        s.insert(3, 4).unwrap();
        assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(s.insert(0, 3), Err(GeometryError::ElementCollision));
        assert_eq!(
            s.insert(9, 5),
            Err(GeometryError::IndexOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_set_allows_same_value_in_place() {
        let mut s = set(&[1, 2, 3]);
        s.set(1, 2).unwrap();
        s.set(1, 7).unwrap();
        assert_eq!(s.as_slice(), &[1, 7, 3]);
        assert_eq!(s.set(0, 3), Err(GeometryError::ElementCollision));
        assert!(s.set(3, 0).is_err());
    }

    #[test]
    fn test_get_and_remove() {
        let mut s = set(&[10, 20, 30]);
        assert_eq!(s.get(2), Ok(&30));
        assert!(s.get(3).is_err());
        assert_eq!(s.remove(0), Ok(10));
        assert_eq!(
            s.remove(2),
            Err(GeometryError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(s.len(), 2);
        assert_eq!(s.position(&30), Some(1));
        assert!(!s.contains(&10));
    }

    #[test]
    fn test_try_from_vec_rejects_duplicates() {
        assert!(DynamicSet::try_from_vec(vec![1, 2, 1]).is_err());
        let collected: DynamicSet<i32> = vec![1, 2, 1, 3, 2].into_iter().collect();
        assert_eq!(collected.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_set_algebra_order() {
        let a = set(&[1, 2, 3, 4]);
        let b = set(&[5, 4, 2, 6]);

        assert_eq!(a.intersection(&b).as_slice(), &[2, 4]);
        assert_eq!(a.union(&b).as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(a.difference(&b).as_slice(), &[1, 3]);
        assert_eq!(a.symmetric_difference(&b).as_slice(), &[1, 3, 5, 6]);
        assert_eq!(DynamicSet::union(&b, &a).as_slice(), &[5, 4, 2, 6, 1, 3]);
    }

    #[test]
    fn test_set_algebra_laws() {
        let a = set(&[1, 2, 3, 4]);
        let b = set(&[3, 4, 5]);

        assert_eq!(&a | &b, &b | &a);
        assert_eq!(&a & &a, a);
        assert!((&a - &a).is_empty());
        assert_eq!(&a ^ &b, &(&a | &b) - &(&a & &b));
    }

    #[test]
    fn test_compound_assignment() {
        let b = set(&[2, 3, 9]);

        let mut s = set(&[1, 2, 3]);
        s &= &b;
        assert_eq!(s.as_slice(), &[2, 3]);

        let mut s = set(&[1, 2, 3]);
        s |= &b;
        assert_eq!(s.as_slice(), &[1, 2, 3, 9]);

        let mut s = set(&[1, 2, 3]);
        s -= b.clone();
        assert_eq!(s.as_slice(), &[1]);

        let mut s = set(&[1, 2, 3]);
        s ^= b;
        assert_eq!(s.as_slice(), &[1, 9]);
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(set(&[1, 2, 3]), set(&[3, 1, 2]));
        assert_ne!(set(&[1, 2, 3]), set(&[1, 2]));
        assert!(set(&[1, 2]).is_subset(&set(&[2, 1, 3])));
    }

    #[test]
    fn test_serde_rejects_duplicates() {
        let json = serde_json::to_string(&set(&[1, 2])).unwrap();
        assert_eq!(json, "[1,2]");
        assert!(serde_json::from_str::<DynamicSet<i32>>("[1,2,1]").is_err());
    }
}
