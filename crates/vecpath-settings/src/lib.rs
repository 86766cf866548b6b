//! vecpath Settings Crate
//!
//! Handles the defaults applied when building and flattening paths, and
//! their persistence as JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, CurveSettings, FlattenSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
