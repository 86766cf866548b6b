//! Path reversal
//!
//! Reversing flips the point order and rewrites roles so each subpath still
//! starts with a `Start` point and keeps its closure. Segment kinds move
//! with their segment, and markers are shifted so that a marker keeps
//! hanging off the point before it in the new direction.

use tracing::debug;

use crate::path::Path;
use crate::role::{PointFlags, PointKind, PointRole};

/// Rewrite the roles of `old[start..=end]` into `out` (still in forward
/// order) and report whether the subpath's last point carried a marker.
fn reverse_subpath_roles(
    old: &[PointRole],
    start: usize,
    end: usize,
    prev_had_marker: bool,
    out: &mut Vec<PointRole>,
) -> bool {
    let base = out.len();
    // Segment roles shift down one slot; the old last slot becomes Start.
    out.extend_from_slice(&old[start + 1..=end]);
    out.push(PointRole::start());

    let last = old[end];
    if end > start {
        out[base + end - start - 1].flags = PointFlags::empty();
    }

    let carried = last.flags & (PointFlags::DASH_MODE | PointFlags::CLOSE_SUBPATH);
    out[base].flags |= carried;

    for i in start + 1..end {
        let slot = &mut out[base + i - start];
        slot.flags.set(PointFlags::PATH_MARKER, old[i - 1].is_marker());
    }
    out[base].flags.set(PointFlags::PATH_MARKER, prev_had_marker);

    last.is_marker()
}

impl Path {
    /// Reverses the path's direction in place.
    pub fn reverse(&mut self) {
        let count = self.nodes.len();
        if count <= 1 {
            return;
        }

        let old: Vec<PointRole> = self.roles();
        let mut roles = Vec::with_capacity(count);
        let mut prev_had_marker = false;
        let mut start = 0;

        for i in 1..count {
            if old[i].kind == PointKind::Start {
                prev_had_marker = reverse_subpath_roles(&old, start, i - 1, prev_had_marker, &mut roles);
                start = i;
            }
        }
        reverse_subpath_roles(&old, start, count - 1, prev_had_marker, &mut roles);

        roles.reverse();
        self.nodes.reverse();
        for (node, role) in self.nodes.iter_mut().zip(roles) {
            node.role = role;
        }
        debug!("Reversed path of {} points", count);
    }
}
