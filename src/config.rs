use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::palette::{self, ColorPreset, SizePreset};

/// A color preset as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    /// `#rrggbb`
    pub hex: String,
}

/// Window and brush preset settings for the paint app.
///
/// The defaults are the reference layout: a 600x600 canvas, four colors and three sizes.
/// The first color and the first size are the initial brush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the reference settings
pub struct PaintConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub colors: Vec<ColorEntry>,
    pub sizes: Vec<SizePreset>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Paint".to_string(),
            canvas_width: 600,
            canvas_height: 600,
            colors: palette::default_colors()
                .into_iter()
                .map(|preset| ColorEntry {
                    hex: palette::to_hex_color(preset.color),
                    name: preset.name,
                })
                .collect(),
            sizes: palette::default_sizes(),
        }
    }
}

impl PaintConfig {
    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());

        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that there is something to pick from and somewhere to draw
    pub fn validate(&self) -> ConfigResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.colors.is_empty() {
            return Err(ConfigError::NoColors);
        }
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }

        self.color_presets().map(|_| ())
    }

    /// The color entries with their hex values parsed
    pub fn color_presets(&self) -> ConfigResult<Vec<ColorPreset>> {
        self.colors
            .iter()
            .map(|entry| Ok(ColorPreset::new(entry.name.clone(), palette::parse_hex_color(&entry.hex)?)))
            .collect()
    }
}
