//! Walking a path by subpath, by segment kind, or by marker
//!
//! [`PathIterator`] keeps three independent cursors over a borrowed path,
//! for consumers that draw or measure a path one piece at a time.

use std::ops::Range;

use crate::path::{Path, PathData};
use crate::role::{PathNode, PointKind};

/// One subpath located by [`PathIterator::next_subpath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subpath {
    pub range: Range<usize>,
    pub closed: bool,
}

/// A run of same-kind segments inside the current subpath. The range
/// includes the anchor point the run starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRun {
    pub kind: PointKind,
    pub range: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct PathIterator<'a> {
    nodes: &'a [PathNode],
    subpath_pos: usize,
    run_pos: usize,
    run_end: usize,
    marker_pos: usize,
}

impl<'a> PathIterator<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            nodes: path.nodes(),
            subpath_pos: 0,
            run_pos: 0,
            run_end: 0,
            marker_pos: 0,
        }
    }

    pub fn point_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn subpath_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, n)| *i == 0 || n.kind() == PointKind::Start)
            .count()
    }

    pub fn marker_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.role.is_marker()).count()
    }

    pub fn has_curve(&self) -> bool {
        self.nodes.iter().any(|n| n.kind() == PointKind::Bezier)
    }

    /// Moves to the next subpath and makes it current for
    /// [`PathIterator::next_run`].
    pub fn next_subpath(&mut self) -> Option<Subpath> {
        let start = self.subpath_pos;
        if start >= self.nodes.len() {
            return None;
        }

        let end = (start + 1..self.nodes.len())
            .find(|&i| self.nodes[i].kind() == PointKind::Start)
            .unwrap_or(self.nodes.len());

        self.subpath_pos = end;
        self.run_pos = start;
        self.run_end = end;
        Some(Subpath {
            range: start..end,
            closed: self.nodes[end - 1].role.is_closing(),
        })
    }

    /// Next run of one segment kind within the current subpath.
    pub fn next_run(&mut self) -> Option<SegmentRun> {
        let anchor = self.run_pos;
        if anchor + 1 >= self.run_end {
            return None;
        }

        let kind = self.nodes[anchor + 1].kind();
        let mut last = anchor + 1;
        while last + 1 < self.run_end && self.nodes[last + 1].kind() == kind {
            last += 1;
        }

        self.run_pos = last;
        Some(SegmentRun {
            kind,
            range: anchor..last + 1,
        })
    }

    /// Next marker-delimited section; the marked point ends its section.
    pub fn next_marker(&mut self) -> Option<Range<usize>> {
        let start = self.marker_pos;
        if start >= self.nodes.len() {
            return None;
        }

        let end = (start..self.nodes.len())
            .find(|&i| self.nodes[i].role.is_marker())
            .map(|i| i + 1)
            .unwrap_or(self.nodes.len());

        self.marker_pos = end;
        Some(start..end)
    }

    pub fn rewind(&mut self) {
        self.subpath_pos = 0;
        self.run_pos = 0;
        self.run_end = 0;
        self.marker_pos = 0;
    }

    /// Packed copy of the points in `range`.
    pub fn copy_data(&self, range: Range<usize>) -> PathData {
        let nodes = &self.nodes[range];
        PathData {
            points: nodes.iter().map(|n| n.point).collect(),
            types: nodes.iter().map(|n| n.role.to_byte()).collect(),
        }
    }
}

impl Path {
    pub fn iter_sections(&self) -> PathIterator<'_> {
        PathIterator::new(self)
    }

    /// All subpaths in order.
    pub fn subpaths(&self) -> impl Iterator<Item = Subpath> + '_ {
        let mut iter = PathIterator::new(self);
        std::iter::from_fn(move || iter.next_subpath())
    }
}
