//! Elliptical arcs and pies
//!
//! An arc is split into at most four sub-arcs of at most 90 degrees, each
//! drawn as one cubic Bezier. Angles are given in degrees and measured on
//! the ellipse, so they are converted to the parametric angle before the
//! control points are computed.

use std::f64::consts::PI;

use vecpath_core::{Point, RectF};

use crate::path::Path;
use crate::role::PointKind;

const MAX_SUB_ARCS: usize = 4;

/// Remaining sweeps this small (in degrees) are not drawn.
const MIN_SUB_ARC_SWEEP: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
struct EllipseFrame {
    center: Point,
    rx: f64,
    ry: f64,
}

impl EllipseFrame {
    fn from_rect(rect: RectF) -> Self {
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        Self {
            center: Point::new(rect.x + rx, rect.y + ry),
            rx,
            ry,
        }
    }

    /// Parametric angle (radians) for a geometric angle in degrees.
    fn parametric_angle(&self, angle_deg: f64) -> f64 {
        let theta = angle_deg.to_radians();
        (self.rx * theta.sin()).atan2(self.ry * theta.cos())
    }

    fn point_at(&self, alpha: f64) -> Point {
        Point::new(
            self.center.x + self.rx * alpha.cos(),
            self.center.y + self.ry * alpha.sin(),
        )
    }
}

/// Control-point scale for a cubic spanning `delta` radians.
fn arc_bcp(delta: f64) -> f64 {
    let half = delta / 2.0;
    if half.sin() == 0.0 {
        return 0.0;
    }
    4.0 / 3.0 * (1.0 - half.cos()) / half.sin()
}

impl Path {
    /// Adds an elliptical arc. Sweeps of 360 degrees or more add the full
    /// ellipse instead.
    pub fn add_arc(&mut self, rect: RectF, start_angle: f64, sweep_angle: f64) {
        self.append_arcs(rect, start_angle, sweep_angle);
    }

    /// Adds a closed pie wedge: center, radial edge, arc, radial edge back.
    pub fn add_pie(&mut self, rect: RectF, start_angle: f64, sweep_angle: f64) {
        let frame = EllipseFrame::from_rect(rect);
        let full_turn = sweep_angle.abs() >= 360.0;

        self.append(frame.center, PointKind::Start, false);
        if !full_turn {
            let alpha = frame.parametric_angle(start_angle);
            self.append(frame.point_at(alpha), PointKind::Line, false);
        }

        self.append_arcs(rect, start_angle, sweep_angle);

        if !full_turn {
            self.append(frame.center, PointKind::Line, false);
        }
        self.close_figure();
    }

    fn append_arcs(&mut self, rect: RectF, start_angle: f64, sweep_angle: f64) {
        if sweep_angle.abs() >= 360.0 {
            self.add_ellipse(rect);
            return;
        }

        let end_angle = start_angle + sweep_angle;
        let increment = if end_angle < start_angle { -90.0 } else { 90.0 };
        let mut drawn = 0.0;

        for i in 0..MAX_SUB_ARCS {
            let current = start_angle + drawn;
            let mut additional = end_angle - current;
            let last = additional.abs() <= 90.0;
            if last {
                if additional.abs() <= MIN_SUB_ARC_SWEEP {
                    return;
                }
            } else {
                additional = increment;
            }

            self.append_arc(i == 0, rect, current, current + additional);
            drawn += additional;

            if last {
                return;
            }
        }
    }

    fn append_arc(&mut self, move_to_start: bool, rect: RectF, start_deg: f64, end_deg: f64) {
        let frame = EllipseFrame::from_rect(rect);
        let mut alpha = frame.parametric_angle(start_deg);
        let mut beta = frame.parametric_angle(end_deg);
        let start = frame.point_at(alpha);

        if (beta - alpha).abs() > PI {
            if beta > alpha {
                beta -= 2.0 * PI;
            } else {
                alpha -= 2.0 * PI;
            }
        }

        let bcp = arc_bcp(beta - alpha);
        let (sin_a, cos_a) = alpha.sin_cos();
        let (sin_b, cos_b) = beta.sin_cos();
        let Point { x: cx, y: cy } = frame.center;
        let (rx, ry) = (frame.rx, frame.ry);

        if move_to_start {
            self.append(start, PointKind::Line, true);
        }

        self.append_bezier(
            Point::new(
                cx + rx * (cos_a - bcp * sin_a),
                cy + ry * (sin_a + bcp * cos_a),
            ),
            Point::new(
                cx + rx * (cos_b + bcp * sin_b),
                cy + ry * (sin_b - bcp * cos_b),
            ),
            Point::new(cx + rx * cos_b, cy + ry * sin_b),
        );
    }
}
