use egui::Color32;

/// One stamped dot on the canvas.
///
/// Points are snapshots: the brush settings in effect when the point was
/// created are copied in, and nothing changes them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintPoint {
    x: i32,
    y: i32,
    color: Color32,
    diameter: i32,
}

impl PaintPoint {
    /// Create a new point. Any diameter is accepted, including zero or negative ones.
    pub fn new(x: i32, y: i32, color: Color32, diameter: i32) -> Self {
        Self {
            x,
            y,
            color,
            diameter,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    /// The fill rectangle of the dot as `(x, y, width, height)`, top-left anchored
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.diameter, self.diameter)
    }
}
