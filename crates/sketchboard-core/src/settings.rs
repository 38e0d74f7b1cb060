//! Drawing settings and canvas configuration.

use crate::camera::DEFAULT_VIRTUAL_EXTENT;
use crate::shapes::{SerializableColor, ShapeStyle};
use crate::tools::Mode;
use serde::{Deserialize, Serialize};

/// Default minimum pointer travel (device pixels, per axis) before a pan is applied.
pub const DEFAULT_PAN_THRESHOLD: f64 = 1.0;

/// Current toolbar settings applied to new shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stroke color for new shapes.
    pub stroke_color: SerializableColor,
    /// Stroke width for new shapes.
    pub stroke_width: f64,
    /// Active interaction mode.
    pub mode: Mode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 1.0,
            mode: Mode::Rectangle,
        }
    }
}

impl Settings {
    /// Style applied to shapes drawn with these settings.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.stroke_color, self.stroke_width)
    }
}

/// Static configuration of a canvas session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Side length of the square virtual canvas.
    pub virtual_extent: f64,
    /// Pointer moves smaller than this on both axes do not pan.
    pub pan_threshold: f64,
    /// Initial toolbar settings.
    pub settings: Settings,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            virtual_extent: DEFAULT_VIRTUAL_EXTENT,
            pan_threshold: DEFAULT_PAN_THRESHOLD,
            settings: Settings::default(),
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
