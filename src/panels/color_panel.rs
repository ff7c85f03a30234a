use crate::command::Command;
use crate::components::PresetButton;
use crate::PaintApp;

use super::BUTTON_WIDTH;

/// One button per color preset, stacked vertically on the left of the canvas
pub fn color_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("color_panel")
        .resizable(false)
        .show(ctx, |ui| {
            let active_color = app.surface().active_color();
            let mut picked = None;

            for preset in app.colors() {
                let button = PresetButton::new(&preset.name, preset.color == active_color)
                    .with_swatch(preset.color)
                    .with_width(BUTTON_WIDTH);

                if button.show(ui).clicked() {
                    log::info!("Color selected from UI: {}", preset.name);
                    picked = Some(preset.color);
                }
            }

            if let Some(color) = picked {
                app.execute(Command::SetColor(color));
            }
        });
}
