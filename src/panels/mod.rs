mod central_panel;
mod color_panel;
mod size_panel;

pub use central_panel::central_panel;
pub use color_panel::color_panel;
pub use size_panel::size_panel;

/// Width of the preset buttons in the side panels
pub(crate) const BUTTON_WIDTH: f32 = 80.0;
