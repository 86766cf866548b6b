//! # vecpath
//!
//! A GDI+-compatible vector path container.
//!
//! ## Architecture
//!
//! vecpath is organized as a workspace with multiple crates:
//!
//! 1. **vecpath-core** - Points, rectangles, affine matrices, fill rules, errors
//! 2. **vecpath-geometry** - The path store, constructors, flattening, bounds
//! 3. **vecpath-settings** - Flatness and tension defaults, JSON/TOML persistence
//! 4. **vecpath** - Path documents and the command line front end
//!
//! ## Features
//!
//! - **Constructors**: lines, rectangles, polygons, ellipses, arcs, pies,
//!   Beziers and cardinal curves
//! - **Flattening**: bounded-depth Bezier subdivision
//! - **Queries**: bounds with pen inflation, reversal, markers, iteration
//! - **Interop**: lyon paths and SVG path data

pub mod document;

pub use document::{DrawCommand, PathDocument};

pub use vecpath_core::{FillRule, Matrix, PathError, Point, PointTransform, RectF, Result};
pub use vecpath_geometry::{FlattenOutcome, Path, PathData, Pen, PointKind, PointRole};
pub use vecpath_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
