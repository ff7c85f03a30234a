use egui::Color32;

use crate::event::{EventBus, SurfaceEvent};
use crate::point::PaintPoint;
use crate::renderer::FillTarget;

/// Diameter used for new points until the shell picks another one
pub const DEFAULT_DIAMETER: i32 = 10;

/// The drawing model: every point painted so far plus the brush used for the next one.
///
/// Points are kept in the order they were added, which is also the order they are
/// rendered in: later points draw on top of earlier ones.
///
/// The surface never draws by itself. Changes that alter the canvas raise a redraw
/// request, which the UI shell picks up with [`DrawingSurface::take_redraw_request`]
/// or by subscribing to [`DrawingSurface::events`].
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    points: Vec<PaintPoint>,
    active_color: Color32,
    active_diameter: i32,
    needs_redraw: bool,
    events: EventBus,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    /// An empty surface with a small black brush
    pub fn new() -> Self {
        Self::with_brush(Color32::BLACK, DEFAULT_DIAMETER)
    }

    /// An empty surface with the given initial brush
    pub fn with_brush(color: Color32, diameter: i32) -> Self {
        Self {
            points: Vec::new(),
            active_color: color,
            active_diameter: diameter,
            needs_redraw: false,
            events: EventBus::new(),
        }
    }

    /// Stamps a new point at `(x, y)` using the active color and diameter
    pub fn add_point(&mut self, x: i32, y: i32) {
        let point = PaintPoint::new(x, y, self.active_color, self.active_diameter);
        log::debug!(
            "Adding point #{} at ({}, {}) size {}",
            self.points.len(),
            x,
            y,
            self.active_diameter
        );

        self.points.push(point);
        self.notify(SurfaceEvent::PointAdded(point));
    }

    /// Changes the color of points added from now on
    pub fn set_active_color(&mut self, color: Color32) {
        let old = std::mem::replace(&mut self.active_color, color);
        self.notify(SurfaceEvent::ColorChanged { old, new: color });
    }

    /// Changes the diameter of points added from now on
    pub fn set_active_diameter(&mut self, diameter: i32) {
        let old = std::mem::replace(&mut self.active_diameter, diameter);
        self.notify(SurfaceEvent::DiameterChanged { old, new: diameter });
    }

    /// Removes every point
    pub fn clear(&mut self) {
        let removed = self.points.len();
        self.points.clear();

        log::info!("Cleared {} points", removed);
        self.notify(SurfaceEvent::Cleared { removed });
    }

    /// Replays every point onto `target`, oldest first
    pub fn render(&self, target: &mut impl FillTarget) {
        for point in &self.points {
            let (x, y, width, height) = point.bounds();

            target.set_fill_color(point.color());
            target.fill_ellipse(x, y, width, height);
        }
    }

    /// Returns whether the canvas changed since the last call, and resets the request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// True if a change is waiting to be drawn
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn points(&self) -> &[PaintPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn active_diameter(&self) -> i32 {
        self.active_diameter
    }

    /// The bus this surface announces its changes on
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn notify(&mut self, event: SurfaceEvent) {
        if event.requests_redraw() {
            self.needs_redraw = true;
        }

        self.events.emit(&event);
    }
}
