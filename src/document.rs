//! Path documents
//!
//! A JSON description of a path as a fill rule plus an ordered list of
//! drawing commands, replayed onto a fresh [`Path`].

use std::path::Path as FsPath;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use vecpath_core::{FillRule, Matrix, Point, RectF, Result};
use vecpath_geometry::Path;
use vecpath_settings::Config;

/// One drawing call, tagged by `op` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
    },
    Lines {
        points: Vec<Point>,
    },
    Rectangle {
        rect: RectF,
    },
    Rectangles {
        rects: Vec<RectF>,
    },
    Polygon {
        points: Vec<Point>,
    },
    Ellipse {
        rect: RectF,
    },
    Arc {
        rect: RectF,
        start_angle: f64,
        sweep_angle: f64,
    },
    Pie {
        rect: RectF,
        start_angle: f64,
        sweep_angle: f64,
    },
    Bezier {
        points: [Point; 4],
    },
    Beziers {
        points: Vec<Point>,
    },
    /// Open cardinal curve; tension falls back to the configured default.
    Curve {
        points: Vec<Point>,
        #[serde(default)]
        tension: Option<f64>,
    },
    ClosedCurve {
        points: Vec<Point>,
        #[serde(default)]
        tension: Option<f64>,
    },
    StartFigure,
    CloseFigure,
    CloseAllFigures,
    SetMarker,
    ClearMarkers,
    Transform {
        matrix: Matrix,
    },
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathDocument {
    /// Overrides the configured fill rule when present.
    #[serde(default)]
    pub fill_rule: Option<FillRule>,
    pub commands: Vec<DrawCommand>,
}

impl PathDocument {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Invalid path document")
    }

    pub fn load(path: &FsPath) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Replays every command onto a new path.
    pub fn build_path(&self, config: &Config) -> Result<Path> {
        let mut path = Path::with_fill_rule(self.fill_rule.unwrap_or(config.fill_rule));
        for (index, command) in self.commands.iter().enumerate() {
            if let Err(err) = apply(&mut path, command, config) {
                warn!("Command {} ({:?}) rejected: {}", index, command, err);
                return Err(err);
            }
        }
        debug!(
            "Built path with {} points from {} commands",
            path.point_count(),
            self.commands.len()
        );
        Ok(path)
    }
}

fn apply(path: &mut Path, command: &DrawCommand, config: &Config) -> Result<()> {
    let default_tension = config.curve.tension;
    match command {
        DrawCommand::Line { from, to } => path.add_line(*from, *to),
        DrawCommand::Lines { points } => path.add_lines(points)?,
        DrawCommand::Rectangle { rect } => path.add_rectangle(*rect),
        DrawCommand::Rectangles { rects } => path.add_rectangles(rects)?,
        DrawCommand::Polygon { points } => path.add_polygon(points)?,
        DrawCommand::Ellipse { rect } => path.add_ellipse(*rect),
        DrawCommand::Arc {
            rect,
            start_angle,
            sweep_angle,
        } => path.add_arc(*rect, *start_angle, *sweep_angle),
        DrawCommand::Pie {
            rect,
            start_angle,
            sweep_angle,
        } => path.add_pie(*rect, *start_angle, *sweep_angle),
        DrawCommand::Bezier { points: [p1, p2, p3, p4] } => path.add_bezier(*p1, *p2, *p3, *p4),
        DrawCommand::Beziers { points } => path.add_beziers(points)?,
        DrawCommand::Curve { points, tension } => {
            path.add_curve(points, tension.unwrap_or(default_tension))?
        }
        DrawCommand::ClosedCurve { points, tension } => {
            path.add_closed_curve(points, tension.unwrap_or(default_tension))?
        }
        DrawCommand::StartFigure => path.start_figure(),
        DrawCommand::CloseFigure => path.close_figure(),
        DrawCommand::CloseAllFigures => path.close_all_figures(),
        DrawCommand::SetMarker => path.set_marker(),
        DrawCommand::ClearMarkers => path.clear_markers(),
        DrawCommand::Transform { matrix } => path.transform(matrix),
        DrawCommand::Reverse => path.reverse(),
    }
    Ok(())
}
