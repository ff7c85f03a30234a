use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A named brush color offered by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: String,
    pub color: Color32,
}

/// A named brush diameter offered by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePreset {
    pub name: String,
    pub diameter: i32,
}

impl ColorPreset {
    pub fn new(name: impl Into<String>, color: Color32) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl SizePreset {
    pub fn new(name: impl Into<String>, diameter: i32) -> Self {
        Self {
            name: name.into(),
            diameter,
        }
    }
}

pub const BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
pub const GREEN: Color32 = Color32::from_rgb(0x00, 0x80, 0x2b);
pub const YELLOW: Color32 = Color32::from_rgb(0xff, 0xff, 0x00);
pub const GRAY: Color32 = Color32::from_rgb(0xd9, 0xd9, 0xd9);

pub const SMALL: i32 = 10;
pub const MEDIUM: i32 = 20;
pub const LARGE: i32 = 50;

/// Black, green, yellow and gray
pub fn default_colors() -> Vec<ColorPreset> {
    vec![
        ColorPreset::new("Black", BLACK),
        ColorPreset::new("Green", GREEN),
        ColorPreset::new("Yellow", YELLOW),
        ColorPreset::new("Gray", GRAY),
    ]
}

/// Small, medium and large
pub fn default_sizes() -> Vec<SizePreset> {
    vec![
        SizePreset::new("Small", SMALL),
        SizePreset::new("Medium", MEDIUM),
        SizePreset::new("Large", LARGE),
    ]
}

/// Parses a `#rrggbb` color. The leading `#` is optional.
pub fn parse_hex_color(hex: &str) -> ConfigResult<Color32> {
    let invalid = || ConfigError::InvalidHexColor(hex.to_string());

    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Formats a color as `#rrggbb`, ignoring alpha
pub fn to_hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
