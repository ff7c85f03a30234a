// src/renderer.rs
use eframe::egui::{self, Color32, Pos2};

/// Something the drawing surface can be replayed onto.
///
/// This is the only drawing primitive the model needs: pick a fill color, then fill an
/// axis-aligned ellipse inscribed in an integer rectangle.
pub trait FillTarget {
    /// Sets the color used by subsequent fills
    fn set_fill_color(&mut self, color: Color32);

    /// Fills the ellipse bounded by the rectangle with top-left `(x, y)` and the given size
    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// A single drawing instruction, as issued to a [`FillTarget`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    SetFillColor(Color32),
    FillEllipse {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Fill target that records what it was asked to draw
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands received so far, in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl FillTarget for CommandRecorder {
    fn set_fill_color(&mut self, color: Color32) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::FillEllipse {
            x,
            y,
            width,
            height,
        });
    }
}

/// Fill target drawing onto an egui painter
///
/// Coordinates are relative to `origin`, normally the top-left corner of the canvas rect.
/// Anything outside the painter's clip rect is clipped by egui.
pub struct PainterTarget<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    fill_color: Color32,
}

impl<'a> PainterTarget<'a> {
    /// Creates a new target drawing with `painter`, with canvas coordinate (0, 0) at `origin`
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     origin (Pos2): Screen position of the canvas' top-left corner
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            fill_color: Color32::BLACK,
        }
    }
}

impl FillTarget for PainterTarget<'_> {
    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        // An empty rectangle fills nothing
        if width <= 0 || height <= 0 {
            return;
        }

        let radius = egui::vec2(width as f32 / 2.0, height as f32 / 2.0);
        let center = self.origin + egui::vec2(x as f32, y as f32) + radius;

        self.painter
            .add(egui::Shape::ellipse_filled(center, radius, self.fill_color));
    }
}
