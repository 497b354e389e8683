//! Scene presets: shape, color, and particle count from a JSON file.

use glam::Vec3;
use nimbus_shapes::ShapeKind;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or interpreting a scene preset.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color string: {0}")]
    InvalidColor(String),
}

/// A scene preset file: `{"shape": "heart", "color": "#ff6b9d", "count": 6000}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenePreset {
    pub shape: ShapeKind,
    pub color: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    6000
}

/// Load a preset from a JSON file.
pub fn load_preset(path: &Path) -> Result<ScenePreset, PresetError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Parse a `#rrggbb` hex color into linear-ish RGB in 0-1.
pub fn parse_color(hex: &str) -> Result<Vec3, PresetError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PresetError::InvalidColor(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map(|v| v as f32 / 255.0)
    };
    Ok(Vec3::new(
        channel(0..2).map_err(|_| PresetError::InvalidColor(hex.to_string()))?,
        channel(2..4).map_err(|_| PresetError::InvalidColor(hex.to_string()))?,
        channel(4..6).map_err(|_| PresetError::InvalidColor(hex.to_string()))?,
    ))
}
