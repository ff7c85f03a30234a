use crate::command::Command;
use crate::config::PaintConfig;
use crate::palette::{ColorPreset, SizePreset};
use crate::panels;
use crate::surface::DrawingSurface;

/// The paint window: color buttons on the left, size buttons and Clear on the right,
/// the canvas in the middle.
#[derive(Debug)]
pub struct PaintApp {
    surface: DrawingSurface,
    colors: Vec<ColorPreset>,
    sizes: Vec<SizePreset>,
    canvas_size: egui::Vec2,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::from_config(&PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        Self::from_config(config)
    }

    /// Builds the app state from a config; the first color and size become the brush
    pub fn from_config(config: &PaintConfig) -> Self {
        let colors = config.color_presets().unwrap_or_else(|err| {
            log::error!("Ignoring color presets: {}", err);
            PaintConfig::default().color_presets().unwrap_or_default()
        });
        let sizes = config.sizes.clone();

        let mut surface = DrawingSurface::new();
        if let Some(color) = colors.first() {
            surface.set_active_color(color.color);
        }
        if let Some(size) = sizes.first() {
            surface.set_active_diameter(size.diameter);
        }

        Self {
            surface,
            colors,
            sizes,
            canvas_size: egui::vec2(config.canvas_width as f32, config.canvas_height as f32),
        }
    }

    /// Applies a command from the UI to the drawing surface
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::AddPoint { .. } => {}
            _ => log::info!("Executing {}: {:?}", command.name(), command),
        }

        command.apply(&mut self.surface);
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn colors(&self) -> &[ColorPreset] {
        &self.colors
    }

    pub fn sizes(&self) -> &[SizePreset] {
        &self.sizes
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        self.canvas_size
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels first so the canvas gets the remaining space
        panels::color_panel(self, ctx);
        panels::size_panel(self, ctx);
        panels::central_panel(self, ctx);

        if self.surface.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
