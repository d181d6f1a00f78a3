use eframe::egui;

use crate::palette::SWATCH_BORDER;

/// One palette entry.
pub struct Swatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl Swatch {
    pub const SIZE: f32 = 40.0;
    pub const ROUNDING: f32 = 10.0;

    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn border_width(&self) -> f32 {
        if self.selected { 3.0 } else { 1.0 }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(Self::SIZE, Self::SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, Self::ROUNDING, self.color);
            ui.painter().rect_stroke(
                rect,
                Self::ROUNDING,
                egui::Stroke::new(self.border_width(), SWATCH_BORDER),
            );
        }

        response
    }
}
