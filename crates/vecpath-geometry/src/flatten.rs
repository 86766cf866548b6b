//! Bezier flattening
//!
//! Replaces every cubic Bezier in a path with line segments that stay
//! within a flatness tolerance of the curve.
//!
//! Each cubic is tested against its chord; curves that are not flat enough
//! are split at `t = 0.5` (De Casteljau) and the halves tested again.
//! Subdivision is capped at [`FLATTEN_RECURSION_LIMIT`] levels. A segment
//! that needs more than that makes the whole flatten fail, and the path is
//! replaced by a fixed three-point placeholder rather than reporting an
//! error.

use smallvec::SmallVec;
use tracing::{debug, warn};

use vecpath_core::{Point, PointTransform};

use crate::path::Path;
use crate::role::{PathNode, PointFlags, PointKind, PointRole};

/// Deepest subdivision level allowed before a segment is abandoned.
pub const FLATTEN_RECURSION_LIMIT: u32 = 10;

/// Flatness used when the caller has no preference.
pub const DEFAULT_FLATNESS: f64 = 0.25;

/// Coarse tolerance used when only bounds are needed.
pub const BOUNDS_FLATNESS: f64 = 25.0;

/// A cubic Bezier segment: anchor, two controls, end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

/// Outcome of the flatness test for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Subdivide,
}

/// A segment needed more than [`FLATTEN_RECURSION_LIMIT`] subdivisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursionOverflow;

/// What [`Path::flatten`] did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenOutcome {
    /// No Bezier points; only the transform (if any) was applied.
    NoCurves,
    /// Every Bezier was replaced by line points.
    Flattened,
    /// Subdivision overflowed; the path now holds the placeholder.
    Degraded,
}

impl CubicBezier {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Decide whether the segment is flat enough; `f2` is flatness squared.
    pub fn verdict(&self, f2: f64) -> Verdict {
        let d1 = self.p1 - self.p0;
        let d2 = self.p2 - self.p0;
        let d3 = self.p3 - self.p0;
        let d23 = self.p3 - self.p2;

        let chord2 = d3.dot(&d3);
        if chord2 < f2 {
            if d1.dot(&d1) < f2 && d2.dot(&d2) < f2 {
                return Verdict::Accept;
            }
            return Verdict::Subdivide;
        }

        let f2q = f2 * chord2;
        let s1 = d1.dot(&d3);
        let t1 = d1.cross(&d3);
        let s2 = d2.dot(&d3);
        let t2 = d2.cross(&d3);
        let v2 = d23.dot(&d3);

        if t1 * t1 > f2q || t2 * t2 > f2q {
            return Verdict::Subdivide;
        }
        if s1 < 0.0 && s1 * s1 > f2q {
            return Verdict::Subdivide;
        }
        if v2 < 0.0 && v2 * v2 > f2q {
            return Verdict::Subdivide;
        }
        if s1 >= chord2 || s2 >= chord2 {
            return Verdict::Subdivide;
        }
        Verdict::Accept
    }

    /// Split at the parametric midpoint.
    pub fn split(&self) -> (CubicBezier, CubicBezier) {
        let a = self.p0.midpoint(&self.p1);
        let b = self.p1.midpoint(&self.p2);
        let c = self.p2.midpoint(&self.p3);
        let ab = a.midpoint(&b);
        let bc = b.midpoint(&c);
        let mid = ab.midpoint(&bc);
        (
            CubicBezier::new(self.p0, a, ab, mid),
            CubicBezier::new(mid, bc, c, self.p3),
        )
    }

    /// Append the end points of the polyline approximating this segment.
    /// The anchor `p0` is not emitted.
    pub fn flatten_into(
        &self,
        flatness: f64,
        out: &mut Vec<Point>,
    ) -> Result<(), RecursionOverflow> {
        let f2 = flatness * flatness;
        let mut stack: SmallVec<[(CubicBezier, u32); 16]> = SmallVec::new();
        stack.push((*self, 0));

        while let Some((segment, level)) = stack.pop() {
            match segment.verdict(f2) {
                Verdict::Accept => out.push(segment.p3),
                Verdict::Subdivide => {
                    if level >= FLATTEN_RECURSION_LIMIT {
                        return Err(RecursionOverflow);
                    }
                    let (left, right) = segment.split();
                    // Right first so the left half is emitted first.
                    stack.push((right, level + 1));
                    stack.push((left, level + 1));
                }
            }
        }
        Ok(())
    }
}

/// Nodes left behind when flattening overflows.
fn placeholder_nodes() -> Vec<PathNode> {
    vec![
        PathNode::new(Point::ZERO, PointRole::start()),
        PathNode::new(Point::ZERO, PointRole::line()),
        PathNode::new(Point::ZERO, PointRole::line()),
    ]
}

impl Path {
    /// Flattens every Bezier into line points, after applying `matrix`.
    ///
    /// The transform runs first since there are fewer points to map before
    /// flattening.
    pub fn flatten(&mut self, matrix: Option<&dyn PointTransform>, flatness: f64) -> FlattenOutcome {
        if let Some(matrix) = matrix {
            self.transform(matrix);
        }

        if !self.has_curves() {
            return FlattenOutcome::NoCurves;
        }

        match flatten_nodes(&self.nodes, flatness) {
            Ok(nodes) => {
                debug!(
                    "Flattened {} points into {} (flatness {})",
                    self.nodes.len(),
                    nodes.len(),
                    flatness
                );
                self.replace_nodes(nodes);
                FlattenOutcome::Flattened
            }
            Err(RecursionOverflow) => {
                warn!(
                    "Bezier flattening exceeded {} subdivision levels (flatness {}); \
                     replacing path with placeholder",
                    FLATTEN_RECURSION_LIMIT, flatness
                );
                self.replace_nodes(placeholder_nodes());
                FlattenOutcome::Degraded
            }
        }
    }
}

fn flatten_nodes(nodes: &[PathNode], flatness: f64) -> Result<Vec<PathNode>, RecursionOverflow> {
    let mut flattened = Vec::with_capacity(nodes.len());
    let mut line_points = Vec::new();
    let mut i = 0;

    while i < nodes.len() {
        let node = nodes[i];
        if node.kind() != PointKind::Bezier {
            flattened.push(node);
            i += 1;
            continue;
        }

        // A Bezier run needs its anchor and a full triplet.
        if i == 0 || i + 2 >= nodes.len() {
            return Err(RecursionOverflow);
        }

        let segment = CubicBezier::new(
            nodes[i - 1].point,
            node.point,
            nodes[i + 1].point,
            nodes[i + 2].point,
        );
        line_points.clear();
        segment.flatten_into(flatness, &mut line_points)?;

        flattened.extend(
            line_points
                .iter()
                .map(|&p| PathNode::new(p, PointRole::line())),
        );
        if nodes[i + 2].role.is_closing() {
            if let Some(last) = flattened.last_mut() {
                last.role.flags |= PointFlags::CLOSE_SUBPATH;
            }
        }
        i += 3;
    }

    Ok(flattened)
}
