use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle stored as origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from min/max extents.
    pub fn from_extents(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Smallest rectangle containing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::from_extents(min_x, min_y, max_x, max_y))
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Grow the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_extents() {
        let r = RectF::from_extents(1.0, 2.0, 11.0, 7.0);
        assert_eq!(r, RectF::new(1.0, 2.0, 10.0, 5.0));
        assert_eq!(r.right(), 11.0);
        assert_eq!(r.bottom(), 7.0);
        assert_eq!(r.center(), Point::new(6.0, 4.5));
    }

    #[test]
    fn test_rect_enclosing() {
        assert!(RectF::enclosing(&[]).is_none());
        let r = RectF::enclosing(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(r, RectF::new(-2.0, -1.0, 5.0, 5.0));
    }

    #[test]
    fn test_rect_inflate() {
        let r = RectF::new(0.0, 0.0, 10.0, 10.0).inflate(1.5, 1.5);
        assert_eq!(r, RectF::new(-1.5, -1.5, 13.0, 13.0));
    }

    #[test]
    fn test_rect_degenerate() {
        assert!(RectF::new(0.0, 0.0, 0.0, 5.0).is_degenerate());
        assert!(RectF::new(0.0, 0.0, 5.0, 0.0).is_degenerate());
        assert!(!RectF::new(0.0, 0.0, 5.0, 5.0).is_degenerate());
    }
}
