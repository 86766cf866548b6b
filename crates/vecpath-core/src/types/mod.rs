//! Geometric value types
//!
//! Everything here is `Copy` and compared by value.

mod fill_rule;
mod matrix;
mod point;
mod rect;

pub use fill_rule::FillRule;
pub use matrix::{Matrix, PointTransform};
pub use point::Point;
pub use rect::RectF;
