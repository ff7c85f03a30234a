use egui::Color32;

use crate::point::PaintPoint;

/// Changes to a [`DrawingSurface`](crate::surface::DrawingSurface), in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    PointAdded(PaintPoint),
    ColorChanged {
        old: Color32,
        new: Color32,
    },
    DiameterChanged {
        old: i32,
        new: i32,
    },
    Cleared {
        /// Number of points removed by the clear
        removed: usize,
    },
}

impl SurfaceEvent {
    /// Whether this change is visible on the canvas.
    ///
    /// Brush changes only affect points added later, so they leave the canvas as it is.
    pub fn requests_redraw(&self) -> bool {
        matches!(self, Self::PointAdded(_) | Self::Cleared { .. })
    }
}
