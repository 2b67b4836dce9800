//! Raster Configuration
//!
//! Colors and tuning knobs for the polygon renderer. Defaults reproduce the
//! classic editor look: blue outline, red outline when the polygon crosses
//! itself, green fill on black.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::RenderMode;

/// Renderer colors and tuning, loadable from JSON.
///
/// Missing fields fall back to [`RasterConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Outline color for simple polygons (RGBA, 0..1)
    pub outline_color: [f32; 4],
    /// Outline color for self-intersecting or degenerate polygons
    pub complex_outline_color: [f32; 4],
    /// Interior fill color
    pub fill_color: [f32; 4],
    /// Surface clear color
    pub background_color: [f32; 4],
    /// Distance (world units) within which a click grabs an existing vertex
    pub pick_radius: f32,
    /// Upper bound on the bounding-box capacity hint used to pre-reserve
    /// pixel buffers
    pub max_reserve_pixels: usize,
    /// Which renderer the editor starts with
    pub render_mode: RenderMode,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            outline_color: [0.0, 0.0, 1.0, 1.0],
            complex_outline_color: [1.0, 0.0, 0.0, 1.0],
            fill_color: [0.0, 1.0, 0.0, 1.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
            pick_radius: 32.0,
            max_reserve_pixels: 1 << 20,
            render_mode: RenderMode::Software,
        }
    }
}

impl RasterConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors that can occur while loading a [`RasterConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
