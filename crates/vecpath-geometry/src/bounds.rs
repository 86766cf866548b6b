//! Bounding rectangles
//!
//! Bounds are taken over a flattened copy of the path, so curves contribute
//! their polyline rather than their control points. The copy is flattened
//! coarsely because an approximate box is all that is needed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vecpath_core::{PointTransform, RectF};

use crate::flatten::BOUNDS_FLATNESS;
use crate::path::Path;

/// Stroke description used to inflate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub width: f64,
}

impl Pen {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Distance the stroke reaches past the path on each side. Strokes are
    /// never treated as thinner than one unit.
    pub fn half_width(&self) -> f64 {
        self.width.max(1.0) / 2.0
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Path {
    /// World bounds, optionally through `matrix` and widened by `pen`.
    pub fn bounds(&self, matrix: Option<&dyn PointTransform>, pen: Option<&Pen>) -> RectF {
        self.bounds_with_flatness(matrix, pen, BOUNDS_FLATNESS)
    }

    pub fn bounds_with_flatness(
        &self,
        matrix: Option<&dyn PointTransform>,
        pen: Option<&Pen>,
        flatness: f64,
    ) -> RectF {
        if self.is_empty() {
            return RectF::default();
        }

        let mut work = self.clone();
        work.flatten(matrix, flatness);

        let Some(rect) = RectF::enclosing(&work.points()) else {
            return RectF::default();
        };

        let rect = match pen {
            Some(pen) => {
                let half = pen.half_width();
                rect.inflate(half, half)
            }
            None => rect,
        };
        debug!("Bounds over {} flattened points: {:?}", work.point_count(), rect);
        rect
    }
}
