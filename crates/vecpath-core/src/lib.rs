//! # vecpath Core
//!
//! Core types, traits, and errors for vecpath.
//! Provides the value types shared by every layer (points, rectangles,
//! affine matrices, fill rules) and the error taxonomy surfaced by path
//! operations.

pub mod error;
pub mod types;

pub use error::{PathError, Result};

pub use types::{FillRule, Matrix, Point, PointTransform, RectF};
