use egui::Color32;

use crate::surface::DrawingSurface;

/// Actions the UI shell can perform on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stamps a point with the active brush
    AddPoint {
        x: i32,
        y: i32,
    },
    SetColor(Color32),
    SetDiameter(i32),
    /// Erases every point
    Clear,
}

impl Command {
    /// Applies this command, returning true if the canvas needs to be redrawn
    pub fn apply(&self, surface: &mut DrawingSurface) -> bool {
        match *self {
            Command::AddPoint { x, y } => surface.add_point(x, y),
            Command::SetColor(color) => surface.set_active_color(color),
            Command::SetDiameter(diameter) => surface.set_active_diameter(diameter),
            Command::Clear => surface.clear(),
        }

        self.requests_redraw()
    }

    /// Whether applying this command changes what is on the canvas
    pub fn requests_redraw(&self) -> bool {
        matches!(self, Command::AddPoint { .. } | Command::Clear)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPoint { .. } => "AddPoint",
            Command::SetColor(_) => "SetColor",
            Command::SetDiameter(_) => "SetDiameter",
            Command::Clear => "Clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reports_redraw() {
        let mut surface = DrawingSurface::new();

        assert!(Command::AddPoint { x: 1, y: 1 }.apply(&mut surface));
        assert!(!Command::SetColor(Color32::YELLOW).apply(&mut surface));
        assert!(!Command::SetDiameter(20).apply(&mut surface));
        assert!(Command::Clear.apply(&mut surface));
    }

    #[test]
    fn test_apply_updates_surface() {
        let mut surface = DrawingSurface::new();

        Command::SetColor(Color32::GRAY).apply(&mut surface);
        Command::SetDiameter(50).apply(&mut surface);
        Command::AddPoint { x: 8, y: 9 }.apply(&mut surface);

        let point = surface.points()[0];
        assert_eq!(point.color(), Color32::GRAY);
        assert_eq!(point.diameter(), 50);
        assert_eq!((point.x(), point.y()), (8, 9));

        Command::Clear.apply(&mut surface);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Clear.name(), "Clear");
        assert_eq!(Command::SetDiameter(10).name(), "SetDiameter");
    }
}
