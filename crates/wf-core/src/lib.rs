//! Wireframe Model Core
//!
//! This crate contains the core data structures for wireframe editing:
//! - Vector / Point: fixed-dimension linear algebra and affine points
//! - Element: fixed-arity point tuples (Line, Face)
//! - DynamicSet: insertion-ordered distinct collection with set algebra
//! - BoundingBox: axis-aligned bounds over a point set
//! - Model: lines and faces under uniqueness invariants
//! - Controller / storage: CRUD orchestration and flat-text import/export

pub mod bounds;
pub mod collection;
pub mod constants;
pub mod controller;
pub mod element;
pub mod error;
pub mod model;
pub mod point;
pub mod storage;
pub mod vector;

pub use bounds::*;
pub use collection::*;
pub use constants::*;
pub use controller::*;
pub use element::*;
pub use error::*;
pub use model::*;
pub use point::*;
pub use storage::*;
pub use vector::*;
