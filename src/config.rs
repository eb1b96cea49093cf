use std::path::Path;

use egui::{Color32, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings file picked up from the working directory at startup
pub const CONFIG_FILE_NAME: &str = "drawpad.json";

/// Inclusive range accepted by a tool-size slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl SizeRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Settings for a drawing canvas.
///
/// Every field has a default, so a partial JSON document only needs to name
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas background, also the color the eraser paints with
    pub background: Color32,
    /// Initial visible canvas size in points
    pub canvas_size: Vec2,
    /// Scrollable region before the first zoom
    pub scroll_region: Rect,
    /// Multiplicative zoom step applied per wheel notch
    pub zoom_step: f32,
    pub brush_color: Color32,
    pub brush_width: u32,
    pub eraser_width: u32,
    pub brush_range: SizeRange,
    pub eraser_range: SizeRange,
    /// Largest raster export allowed, in pixels per side
    pub max_export_dimension: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            canvas_size: vec2(900.0, 550.0),
            scroll_region: Rect::from_min_max(pos2(0.0, 0.0), pos2(1000.0, 700.0)),
            zoom_step: 1.1,
            brush_color: Color32::BLACK,
            brush_width: 5,
            eraser_width: 10,
            brush_range: SizeRange::new(1, 20),
            eraser_range: SizeRange::new(1, 50),
            max_export_dimension: 8192,
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration from JSON, falling back to defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Load `path` if it exists. A missing file gives the defaults; an
    /// unreadable or invalid one is logged and also gives the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring canvas config: {}", err);
                Self::default()
            }
        }
    }
}
