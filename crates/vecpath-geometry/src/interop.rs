//! Conversion to and from lyon paths and SVG path data
//!
//! Renderers in the lyon ecosystem consume paths as begin/line/cubic/end
//! events; these conversions map subpaths onto those events one to one.

use std::fmt::Write as _;

use lyon::path::{Event, Path as LyonPath};
use vecpath_core::{FillRule, Point};

use crate::path::Path;
use crate::role::PointKind;

/// Drawing events for one path, independent of any output format.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    Begin(Point),
    Line(Point),
    Cubic(Point, Point, Point),
    End { close: bool },
}

impl Path {
    fn segments(&self) -> Vec<Segment> {
        let nodes = self.nodes();
        let mut out = Vec::with_capacity(nodes.len() + 2);
        let mut open = false;
        let mut i = 0;

        while i < nodes.len() {
            let node = nodes[i];
            let begins = node.kind() == PointKind::Start || !open;

            if begins {
                if open {
                    out.push(Segment::End { close: false });
                }
                out.push(Segment::Begin(node.point));
                open = true;
                i += 1;
            } else if node.kind() == PointKind::Bezier && i + 2 < nodes.len() {
                out.push(Segment::Cubic(node.point, nodes[i + 1].point, nodes[i + 2].point));
                i += 3;
            } else {
                out.push(Segment::Line(node.point));
                i += 1;
            }

            if nodes[i - 1].role.is_closing() {
                out.push(Segment::End { close: true });
                open = false;
            }
        }

        if open {
            out.push(Segment::End { close: false });
        }
        out
    }

    /// Builds the equivalent lyon path.
    pub fn to_lyon(&self) -> LyonPath {
        let mut builder = LyonPath::builder();
        for segment in self.segments() {
            match segment {
                Segment::Begin(at) => {
                    builder.begin(at.into());
                }
                Segment::Line(to) => {
                    builder.line_to(to.into());
                }
                Segment::Cubic(c1, c2, to) => {
                    builder.cubic_bezier_to(c1.into(), c2.into(), to.into());
                }
                Segment::End { close } => builder.end(close),
            }
        }
        builder.build()
    }

    /// Reads a lyon path; quadratic segments are raised to cubics.
    pub fn from_lyon(path: &LyonPath, fill_rule: FillRule) -> Path {
        let mut out = Path::with_fill_rule(fill_rule);
        for event in path.iter() {
            match event {
                Event::Begin { at } => {
                    out.start_figure();
                    out.append(at.into(), PointKind::Start, false);
                }
                Event::Line { to, .. } => out.append(to.into(), PointKind::Line, false),
                Event::Quadratic { from, ctrl, to } => {
                    let (from, ctrl, to): (Point, Point, Point) = (from.into(), ctrl.into(), to.into());
                    let c1 = from + (ctrl - from) * (2.0 / 3.0);
                    let c2 = to + (ctrl - to) * (2.0 / 3.0);
                    out.append_bezier(c1, c2, to);
                }
                Event::Cubic {
                    ctrl1, ctrl2, to, ..
                } => out.append_bezier(ctrl1.into(), ctrl2.into(), to.into()),
                Event::End { close, .. } => {
                    if close {
                        out.close_figure();
                    } else {
                        out.start_figure();
                    }
                }
            }
        }
        out
    }

    /// SVG `d` attribute for this path.
    pub fn to_svg_path_data(&self) -> String {
        let mut svg = String::new();
        for segment in self.segments() {
            // Writing to a String cannot fail.
            let _ = match segment {
                Segment::Begin(at) => write!(svg, "M {} {} ", at.x, at.y),
                Segment::Line(to) => write!(svg, "L {} {} ", to.x, to.y),
                Segment::Cubic(c1, c2, to) => write!(
                    svg,
                    "C {} {} {} {} {} {} ",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
                Segment::End { close: true } => write!(svg, "Z "),
                Segment::End { close: false } => Ok(()),
            };
        }
        svg.trim_end().to_string()
    }
}
