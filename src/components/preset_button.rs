use eframe::egui;

/// A labelled button for a brush preset, optionally showing a color swatch
pub struct PresetButton<'a> {
    pub label: &'a str,
    pub swatch: Option<egui::Color32>,
    pub selected: bool,
    pub width: f32,
}

impl<'a> PresetButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            swatch: None,
            selected,
            width: 80.0,
        }
    }

    pub fn with_swatch(mut self, color: egui::Color32) -> Self {
        self.swatch = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(self.width, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(30)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let mut text_pos = rect.center();
            if let Some(color) = self.swatch {
                let swatch_rect = egui::Rect::from_center_size(
                    egui::pos2(rect.left() + 14.0, rect.center().y),
                    egui::vec2(14.0, 14.0),
                );
                ui.painter().rect_filled(swatch_rect, 2.0, color);
                ui.painter()
                    .rect_stroke(swatch_rect, 2.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
                text_pos.x += 8.0;
            }

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };

            ui.painter().text(
                text_pos,
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
