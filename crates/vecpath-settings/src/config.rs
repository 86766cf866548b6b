//! Configuration for path construction and flattening
//!
//! Supports JSON and TOML file formats, chosen by file extension, stored in
//! the platform configuration directory by default.
//!
//! Configuration is organized into logical sections:
//! - Flatten settings (tolerances for flattening and bounds)
//! - Curve settings (default cardinal tension)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use vecpath_core::FillRule;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Tolerances used when curves are turned into line segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenSettings {
    /// Maximum distance between a curve and its polyline.
    pub flatness: f64,
    /// Coarser tolerance used for bounding boxes.
    pub bounds_flatness: f64,
}

impl Default for FlattenSettings {
    fn default() -> Self {
        Self {
            flatness: 0.25,
            bounds_flatness: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Cardinal spline tension; 0 gives straight segments.
    pub tension: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self { tension: 0.5 }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fill rule given to newly created paths
    pub fill_rule: FillRule,
    pub flatten: FlattenSettings,
    pub curve: CurveSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

fn out_of_range(key: &str, value: f64) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file, under the platform config
    /// directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("vecpath").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // Flatness may be infinite but must be a positive number
        if self.flatten.flatness.is_nan() || self.flatten.flatness <= 0.0 {
            return Err(out_of_range("flatten.flatness", self.flatten.flatness));
        }
        if self.flatten.bounds_flatness.is_nan() || self.flatten.bounds_flatness <= 0.0 {
            return Err(out_of_range(
                "flatten.bounds_flatness",
                self.flatten.bounds_flatness,
            ));
        }
        if !self.curve.tension.is_finite() || self.curve.tension < 0.0 {
            return Err(out_of_range("curve.tension", self.curve.tension));
        }
        Ok(())
    }
}
