#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod palette;
pub mod panels;
pub mod point;
pub mod renderer;
pub mod surface;

pub use app::PaintApp;
pub use command::Command;
pub use config::PaintConfig;
pub use error::ConfigError;
pub use event::{EventBus, EventHandler, SurfaceEvent};
pub use point::PaintPoint;
pub use renderer::{CommandRecorder, DrawCommand, FillTarget, PainterTarget};
pub use surface::DrawingSurface;
