use egui::{Pos2, Response};

/// Converts a screen position to integer canvas coordinates relative to `origin`
///
/// Positions are rounded to the nearest pixel; positions left of or above the canvas
/// give negative coordinates.
pub fn to_canvas_coords(pos: Pos2, origin: Pos2) -> (i32, i32) {
    let offset = pos - origin;
    (offset.x.round() as i32, offset.y.round() as i32)
}

/// The canvas position to stamp for this frame, if the pointer is being dragged across it
///
/// A point is produced only on frames where the pointer actually moved, so holding the
/// button still does not pile up points.
pub fn canvas_drag_point(response: &Response) -> Option<(i32, i32)> {
    if !response.dragged() || response.drag_delta() == egui::Vec2::ZERO {
        return None;
    }

    response
        .interact_pointer_pos()
        .map(|pos| to_canvas_coords(pos, response.rect.min))
}
