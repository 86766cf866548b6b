//! Straight-edged and Bezier constructors
//!
//! Lines, polylines, rectangles, polygons, ellipses and raw cubic Beziers.
//! Arcs and pies live in `arc`, cardinal curves in `curve`.

use vecpath_core::{PathError, Point, RectF, Result};

use crate::path::Path;
use crate::role::PointKind;

/// Control-point distance, relative to the radius, for a 90 degree arc
/// approximated by one cubic Bezier.
pub const ELLIPSE_KAPPA: f64 = 0.552285;

impl Path {
    /// Adds a line segment. The first point is dropped when it repeats the
    /// current last point.
    pub fn add_line(&mut self, from: Point, to: Point) {
        self.append(from, PointKind::Line, true);
        self.append(to, PointKind::Line, false);
    }

    /// Adds a polyline through `points`.
    pub fn add_lines(&mut self, points: &[Point]) -> Result<()> {
        let Some((first, rest)) = points.split_first() else {
            return Err(PathError::invalid_argument("add_lines requires at least 1 point"));
        };
        self.append(*first, PointKind::Line, true);
        for p in rest {
            self.append(*p, PointKind::Line, false);
        }
        Ok(())
    }

    /// Adds a closed rectangle. Rectangles with a zero dimension add nothing.
    pub fn add_rectangle(&mut self, rect: RectF) {
        if rect.is_degenerate() {
            return;
        }
        self.append(Point::new(rect.x, rect.y), PointKind::Start, false);
        self.append(Point::new(rect.right(), rect.y), PointKind::Line, false);
        self.append(Point::new(rect.right(), rect.bottom()), PointKind::Line, false);
        self.append(Point::new(rect.x, rect.bottom()), PointKind::Line, false);
        self.close_figure();
    }

    pub fn add_rectangles(&mut self, rects: &[RectF]) -> Result<()> {
        if rects.is_empty() {
            return Err(PathError::invalid_argument(
                "add_rectangles requires at least 1 rectangle",
            ));
        }
        for rect in rects {
            self.add_rectangle(*rect);
        }
        Ok(())
    }

    /// Adds a closed polygon, repeating the first point at the end when the
    /// caller did not.
    pub fn add_polygon(&mut self, points: &[Point]) -> Result<()> {
        if points.len() < 3 {
            return Err(PathError::invalid_argument(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }

        let first = points[0];
        self.append(first, PointKind::Start, false);
        for p in &points[1..] {
            self.append(*p, PointKind::Line, false);
        }
        if points[points.len() - 1] != first {
            self.append(first, PointKind::Line, false);
        }
        self.close_figure();
        Ok(())
    }

    /// Adds a closed ellipse inscribed in `rect` as four Bezier quadrants,
    /// starting at the rightmost point and running through negative y first.
    pub fn add_ellipse(&mut self, rect: RectF) {
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let cx = rect.x + rx;
        let cy = rect.y + ry;
        let kx = rx * ELLIPSE_KAPPA;
        let ky = ry * ELLIPSE_KAPPA;

        self.append(Point::new(cx + rx, cy), PointKind::Start, false);
        self.append_bezier(
            Point::new(cx + rx, cy - ky),
            Point::new(cx + kx, cy - ry),
            Point::new(cx, cy - ry),
        );
        self.append_bezier(
            Point::new(cx - kx, cy - ry),
            Point::new(cx - rx, cy - ky),
            Point::new(cx - rx, cy),
        );
        self.append_bezier(
            Point::new(cx - rx, cy + ky),
            Point::new(cx - kx, cy + ry),
            Point::new(cx, cy + ry),
        );
        self.append_bezier(
            Point::new(cx + kx, cy + ry),
            Point::new(cx + rx, cy + ky),
            Point::new(cx + rx, cy),
        );
        self.close_figure();
    }

    /// Adds one cubic Bezier from `p1` to `p4`.
    pub fn add_bezier(&mut self, p1: Point, p2: Point, p3: Point, p4: Point) {
        self.append(p1, PointKind::Line, true);
        self.append_bezier(p2, p3, p4);
    }

    /// Adds a run of connected Beziers: one anchor followed by triplets.
    pub fn add_beziers(&mut self, points: &[Point]) -> Result<()> {
        if points.len() < 4 || points.len() % 3 != 1 {
            return Err(PathError::invalid_argument(format!(
                "bezier batch needs 3n+1 points (n >= 1), got {}",
                points.len()
            )));
        }

        self.append(points[0], PointKind::Line, true);
        for triplet in points[1..].chunks_exact(3) {
            self.append_bezier(triplet[0], triplet[1], triplet[2]);
        }
        Ok(())
    }
}
