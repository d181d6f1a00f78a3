use eframe::egui;

/// Text shown on every action button.
pub const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(0x88, 0x88, 0x88);
/// Background of a highlighted or pressed button.
pub const UNDERLAY_COLOR: egui::Color32 = egui::Color32::from_rgb(0xcc, 0xcc, 0xcc);

/// Flat full-width button of the action bar.
pub struct ActionButton<'a> {
    pub label: &'a str,
    pub highlighted: bool,
    pub height: f32,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str, highlighted: bool) -> Self {
        Self {
            label,
            highlighted,
            height: 56.0,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.highlighted || response.is_pointer_button_down_on() {
                UNDERLAY_COLOR
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 0.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(16.0),
                LABEL_COLOR,
            );
        }

        response
    }
}
