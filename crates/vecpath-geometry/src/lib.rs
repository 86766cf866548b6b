//! # vecpath Geometry
//!
//! The path container and everything that builds or consumes it.
//!
//! ## Core Components
//!
//! ### Storage
//! - **Roles**: Start/Line/Bezier kinds plus marker, dash and close flags
//! - **Path**: the point store and its single compression-aware append
//!
//! ### Constructors
//! - **Shapes**: lines, rectangles, polygons, ellipses, Beziers
//! - **Arcs**: arcs and pies split into sub-arcs of at most 90 degrees
//! - **Curves**: open and closed cardinal splines
//!
//! ### Consumers
//! - **Flatten**: Bezier-to-polyline with a bounded subdivision depth
//! - **Bounds**: pen-inflated bounding box over a flattened copy
//! - **Reverse**: point order reversal that keeps subpath structure
//! - **Iterator**: subpath, segment-run and marker walks
//! - **Interop**: lyon paths and SVG path data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vecpath_geometry::{Path, RectF, DEFAULT_FLATNESS};
//!
//! let mut path = Path::new();
//! path.add_ellipse(RectF::new(0.0, 0.0, 40.0, 20.0));
//! path.flatten(None, DEFAULT_FLATNESS);
//! let bounds = path.bounds(None, None);
//! ```

pub mod arc;
pub mod bounds;
pub mod curve;
pub mod flatten;
pub mod interop;
pub mod iterator;
pub mod path;
pub mod reverse;
pub mod role;
pub mod shapes;

pub use bounds::Pen;
pub use curve::{CardinalTangents, CurveMode, TangentSolver, CURVE_MIN_TERMS, DEFAULT_TENSION};
pub use flatten::{
    CubicBezier, FlattenOutcome, BOUNDS_FLATNESS, DEFAULT_FLATNESS, FLATTEN_RECURSION_LIMIT,
};
pub use iterator::{PathIterator, SegmentRun, Subpath};
pub use path::{Path, PathData};
pub use role::{PathNode, PointFlags, PointKind, PointRole};
pub use shapes::ELLIPSE_KAPPA;

pub use vecpath_core::{FillRule, Matrix, PathError, Point, PointTransform, RectF, Result};
