//! Path store
//!
//! [`Path`] owns an ordered sequence of [`PathNode`]s. Every point enters
//! through [`Path::append`], which enforces the subpath rules:
//!
//! - a duplicate of the last point may be suppressed when the caller allows
//!   compression, unless the last point closes its subpath
//! - after `start_figure`/`close_figure`, or after a closing point, the next
//!   point is forced to [`PointKind::Start`]

use serde::{Deserialize, Serialize};
use tracing::debug;

use vecpath_core::{FillRule, PathError, Point, PointTransform, Result};

use crate::role::{PathNode, PointFlags, PointKind, PointRole};

/// Snapshot of a path in the packed wire form consumed by renderers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    pub points: Vec<Point>,
    pub types: Vec<u8>,
}

impl PathData {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An ordered, role-annotated point sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub(crate) nodes: Vec<PathNode>,
    fill_rule: FillRule,
    start_new_figure: bool,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Creates an empty path with the alternate fill rule.
    pub fn new() -> Self {
        Self::with_fill_rule(FillRule::Alternate)
    }

    pub fn with_fill_rule(fill_rule: FillRule) -> Self {
        Self {
            nodes: Vec::new(),
            fill_rule,
            start_new_figure: true,
        }
    }

    /// Seeds a path from parallel point and role-byte arrays.
    ///
    /// Fails with `InvalidArgument` when the lengths differ or any byte is
    /// not a valid role.
    pub fn from_parts(points: &[Point], types: &[u8], fill_rule: FillRule) -> Result<Self> {
        if points.len() != types.len() {
            return Err(PathError::invalid_argument(format!(
                "{} points but {} point types",
                points.len(),
                types.len()
            )));
        }

        let nodes = points
            .iter()
            .zip(types)
            .map(|(&point, &byte)| PointRole::from_byte(byte).map(|role| PathNode::new(point, role)))
            .collect::<Result<Vec<_>>>()?;

        let start_new_figure = nodes.is_empty();
        Ok(Self {
            nodes,
            fill_rule,
            start_new_figure,
        })
    }

    /// Builds a path from a packed snapshot.
    pub fn from_path_data(data: &PathData, fill_rule: FillRule) -> Result<Self> {
        Self::from_parts(&data.points, &data.types, fill_rule)
    }

    pub fn point_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Point array snapshot.
    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().map(|n| n.point).collect()
    }

    /// Role-byte array snapshot.
    pub fn types(&self) -> Vec<u8> {
        self.nodes.iter().map(|n| n.role.to_byte()).collect()
    }

    pub fn roles(&self) -> Vec<PointRole> {
        self.nodes.iter().map(|n| n.role).collect()
    }

    pub fn path_data(&self) -> PathData {
        PathData {
            points: self.points(),
            types: self.types(),
        }
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    /// Whether the next appended point will begin a new subpath.
    pub fn is_starting_new_figure(&self) -> bool {
        self.start_new_figure
    }

    pub fn last_point(&self) -> Result<Point> {
        self.nodes
            .last()
            .map(|n| n.point)
            .ok_or_else(|| PathError::invalid_state("path has no points"))
    }

    pub fn has_curves(&self) -> bool {
        self.nodes.iter().any(|n| n.kind() == PointKind::Bezier)
    }

    /// Removes every point and restores the default fill rule.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.fill_rule = FillRule::Alternate;
        self.start_new_figure = true;
    }

    /// The single entry point for adding geometry.
    ///
    /// With `allow_compress`, a point equal to the last stored one is
    /// dropped unless the last point closes its subpath.
    pub fn append(&mut self, point: Point, kind: PointKind, allow_compress: bool) {
        self.append_role(point, kind.into(), allow_compress);
    }

    /// Like [`Path::append`], but keeps the caller's flags when the kind is
    /// not forced to `Start`.
    pub fn append_role(&mut self, point: Point, role: PointRole, allow_compress: bool) {
        if let Some(last) = self.nodes.last() {
            if allow_compress && last.point == point && !last.role.is_closing() {
                return;
            }
        }

        let role = if self.start_new_figure || self.nodes.last().is_some_and(|n| n.role.is_closing()) {
            PointRole::start()
        } else {
            role
        };

        self.nodes.push(PathNode::new(point, role));
        self.start_new_figure = false;
    }

    /// Appends the three trailing points of a cubic Bezier.
    pub(crate) fn append_bezier(&mut self, c1: Point, c2: Point, end: Point) {
        self.append(c1, PointKind::Bezier, false);
        self.append(c2, PointKind::Bezier, false);
        self.append(end, PointKind::Bezier, false);
    }

    /// Makes the next appended point begin a new subpath.
    pub fn start_figure(&mut self) {
        self.start_new_figure = true;
    }

    /// Closes the current subpath and starts a new one on the next append.
    pub fn close_figure(&mut self) {
        if let Some(last) = self.nodes.last_mut() {
            last.role.flags |= PointFlags::CLOSE_SUBPATH;
        }
        self.start_new_figure = true;
    }

    /// Closes every subpath in the path.
    pub fn close_all_figures(&mut self) {
        for i in 1..self.nodes.len() {
            if self.nodes[i].kind() == PointKind::Start {
                self.nodes[i - 1].role.flags |= PointFlags::CLOSE_SUBPATH;
            }
        }
        if let Some(last) = self.nodes.last_mut() {
            last.role.flags |= PointFlags::CLOSE_SUBPATH;
        }
        self.start_new_figure = true;
    }

    /// Marks the current last point.
    pub fn set_marker(&mut self) {
        if let Some(last) = self.nodes.last_mut() {
            last.role.flags |= PointFlags::PATH_MARKER;
        }
    }

    pub fn clear_markers(&mut self) {
        for node in &mut self.nodes {
            node.role.flags.remove(PointFlags::PATH_MARKER);
        }
    }

    /// Maps every stored point through `matrix`; roles are untouched.
    pub fn transform(&mut self, matrix: &dyn PointTransform) {
        if self.nodes.is_empty() || matrix.is_identity() {
            return;
        }
        let mut points = self.points();
        matrix.transform_points(&mut points);
        for (node, p) in self.nodes.iter_mut().zip(points) {
            node.point = p;
        }
    }

    /// Appends all of `other`'s points.
    ///
    /// With `connect`, the first appended point continues the current
    /// subpath when that subpath is still open.
    pub fn add_path(&mut self, other: &Path, connect: bool) {
        let Some((first, rest)) = other.nodes.split_first() else {
            return;
        };

        let continues = connect && self.nodes.last().is_some_and(|n| !n.role.is_closing());
        let first_kind = if continues {
            PointKind::Line
        } else {
            PointKind::Start
        };
        debug!(
            "Appending {} points (connect: {}, continues: {})",
            other.nodes.len(),
            connect,
            continues
        );

        self.append(first.point, first_kind, false);
        for node in rest {
            self.append_role(node.point, node.role, false);
        }
    }

    /// Index ranges of every subpath, in order.
    pub fn subpath_ranges(&self) -> Vec<std::ops::Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        for i in 1..self.nodes.len() {
            if self.nodes[i].kind() == PointKind::Start {
                ranges.push(start..i);
                start = i;
            }
        }
        if start < self.nodes.len() {
            ranges.push(start..self.nodes.len());
        }
        ranges
    }

    pub(crate) fn replace_nodes(&mut self, nodes: Vec<PathNode>) {
        self.nodes = nodes;
    }
}
