use crate::command::Command;
use crate::components::PresetButton;
use crate::PaintApp;

use super::BUTTON_WIDTH;

/// Size presets followed by the Clear button, on the right of the canvas
pub fn size_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("size_panel")
        .resizable(false)
        .show(ctx, |ui| {
            let active_diameter = app.surface().active_diameter();
            let mut command = None;

            for preset in app.sizes() {
                let button = PresetButton::new(&preset.name, preset.diameter == active_diameter)
                    .with_width(BUTTON_WIDTH);

                if button.show(ui).clicked() {
                    log::info!("Size selected from UI: {} ({})", preset.name, preset.diameter);
                    command = Some(Command::SetDiameter(preset.diameter));
                }
            }

            if PresetButton::new("Clear", false)
                .with_width(BUTTON_WIDTH)
                .show(ui)
                .clicked()
            {
                command = Some(Command::Clear);
            }

            if let Some(command) = command {
                app.execute(command);
            }
        });
}
