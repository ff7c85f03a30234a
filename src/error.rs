use thiserror::Error;

/// Errors that can occur while loading the paint configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    #[error("Config has no color presets")]
    NoColors,

    #[error("Config has no size presets")]
    NoSizes,

    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
