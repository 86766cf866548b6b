//! Cardinal curves through points
//!
//! Each input point gets a tangent vector from a [`TangentSolver`]; every
//! consecutive pair of points then becomes one cubic Bezier with control
//! points `p[i] + t[i]` and `p[j] - t[j]`.

use tracing::debug;

use vecpath_core::{PathError, Point, Result};

use crate::path::Path;
use crate::role::PointKind;

/// Tension used when the caller does not pick one.
pub const DEFAULT_TENSION: f64 = 0.5;

/// Minimum term count handed to tangent solvers.
pub const CURVE_MIN_TERMS: usize = 1;

/// Whether a curve wraps from its last point back to its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveMode {
    Open,
    Closed,
}

/// Computes one tangent vector per input point.
///
/// Implementations must return exactly `points.len()` tangents.
pub trait TangentSolver {
    fn tangents(&self, min_terms: usize, points: &[Point], tension: f64, mode: CurveMode)
        -> Vec<Point>;
}

/// Cardinal-spline tangents: `tension / 3 * (p[i+1] - p[i-1])`.
///
/// Open curves clamp the neighbours at both ends; closed curves wrap.
/// Curves of two points or fewer get zero tangents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalTangents;

impl TangentSolver for CardinalTangents {
    fn tangents(
        &self,
        _min_terms: usize,
        points: &[Point],
        tension: f64,
        mode: CurveMode,
    ) -> Vec<Point> {
        let count = points.len();
        let mut tangents = vec![Point::ZERO; count];
        if count <= 2 {
            return tangents;
        }

        let coefficient = tension / 3.0;
        for (i, tangent) in tangents.iter_mut().enumerate() {
            let (next, prev) = match mode {
                CurveMode::Open => ((i + 1).min(count - 1), i.saturating_sub(1)),
                CurveMode::Closed => ((i + 1) % count, (i + count - 1) % count),
            };
            *tangent = (points[next] - points[prev]) * coefficient;
        }
        tangents
    }
}

impl Path {
    /// Adds an open cardinal curve through all of `points`.
    pub fn add_curve(&mut self, points: &[Point], tension: f64) -> Result<()> {
        self.add_curve_with(&CardinalTangents, points, tension)
    }

    pub fn add_curve_with(
        &mut self,
        solver: &dyn TangentSolver,
        points: &[Point],
        tension: f64,
    ) -> Result<()> {
        if points.len() < 2 {
            return Err(PathError::invalid_argument(format!(
                "open curve needs at least 2 points, got {}",
                points.len()
            )));
        }
        self.append_open_curve(solver, points, 0, points.len() - 1, tension)
    }

    /// Adds `segments` curve segments starting at `points[offset]`, with
    /// tangents computed over the whole point slice.
    pub fn add_curve_segments(
        &mut self,
        points: &[Point],
        offset: usize,
        segments: usize,
        tension: f64,
    ) -> Result<()> {
        if segments < 1 {
            return Err(PathError::invalid_argument(
                "curve needs at least 1 segment",
            ));
        }
        if offset + segments >= points.len() {
            return Err(PathError::invalid_argument(format!(
                "{} segments from offset {} exceed {} points",
                segments,
                offset,
                points.len()
            )));
        }
        self.append_open_curve(&CardinalTangents, points, offset, segments, tension)
    }

    /// Adds a closed cardinal curve through all of `points`.
    pub fn add_closed_curve(&mut self, points: &[Point], tension: f64) -> Result<()> {
        self.add_closed_curve_with(&CardinalTangents, points, tension)
    }

    pub fn add_closed_curve_with(
        &mut self,
        solver: &dyn TangentSolver,
        points: &[Point],
        tension: f64,
    ) -> Result<()> {
        if points.len() < 3 {
            return Err(PathError::invalid_argument(format!(
                "closed curve needs at least 3 points, got {}",
                points.len()
            )));
        }

        let tangents = solve(solver, points, tension, CurveMode::Closed)?;
        let last = points.len() - 1;
        self.append_curve(points, &tangents, 0, last, CurveMode::Closed);

        let wrap_from = points[last] + tangents[last];
        let wrap_ctrl = points[0] - tangents[0];
        self.append_bezier(wrap_from, wrap_ctrl, points[0]);
        self.close_figure();
        Ok(())
    }

    fn append_open_curve(
        &mut self,
        solver: &dyn TangentSolver,
        points: &[Point],
        offset: usize,
        segments: usize,
        tension: f64,
    ) -> Result<()> {
        let tangents = solve(solver, points, tension, CurveMode::Open)?;
        self.append_curve(points, &tangents, offset, segments, CurveMode::Open);
        Ok(())
    }

    fn append_curve(
        &mut self,
        points: &[Point],
        tangents: &[Point],
        offset: usize,
        segments: usize,
        mode: CurveMode,
    ) {
        let first_kind = if mode == CurveMode::Closed || self.is_empty() {
            PointKind::Start
        } else {
            PointKind::Line
        };
        self.append(points[offset], first_kind, true);

        for i in offset..offset + segments {
            let j = i + 1;
            self.append_bezier(
                points[i] + tangents[i],
                points[j] - tangents[j],
                points[j],
            );
        }
    }
}

fn solve(
    solver: &dyn TangentSolver,
    points: &[Point],
    tension: f64,
    mode: CurveMode,
) -> Result<Vec<Point>> {
    let tangents = solver.tangents(CURVE_MIN_TERMS, points, tension, mode);
    if tangents.len() != points.len() {
        return Err(PathError::invalid_argument(format!(
            "tangent solver returned {} tangents for {} points",
            tangents.len(),
            points.len()
        )));
    }
    debug!("Solved {} {:?} curve tangents (tension {})", tangents.len(), mode, tension);
    Ok(tangents)
}
