use crate::command::Command;
use crate::input;
use crate::renderer::PainterTarget;
use crate::PaintApp;

/// The drawing canvas: dragging stamps points, and the whole surface is replayed every frame
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(app.canvas_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        if let Some((x, y)) = input::canvas_drag_point(&response) {
            app.execute(Command::AddPoint { x, y });
        }

        painter.rect_filled(canvas_rect, 0.0, egui::Color32::WHITE);

        let mut target = PainterTarget::new(&painter, canvas_rect.min);
        app.surface().render(&mut target);
    });
}
