use egui::Color32;

/// Swatch colors, in display order.
pub const COLORS: [Color32; 12] = [
    Color32::from_rgb(0x00, 0x00, 0x00), // black
    Color32::from_rgb(0xff, 0xff, 0xff), // white
    Color32::from_rgb(0xff, 0x00, 0x00), // red
    Color32::from_rgb(0xff, 0xff, 0x00), // yellow
    Color32::from_rgb(0x00, 0x80, 0x00), // green
    Color32::from_rgb(0x00, 0x00, 0xff), // blue
    Color32::from_rgb(0xfc, 0x9d, 0x9d),
    Color32::from_rgb(0x32, 0xe0, 0xc4),
    Color32::from_rgb(0x84, 0x8c, 0xcf),
    Color32::from_rgb(0x4b, 0x5d, 0x67),
    Color32::from_rgb(0xff, 0x52, 0x00),
    Color32::from_rgb(0xf6, 0x72, 0x80),
];

/// Border drawn around every swatch.
pub const SWATCH_BORDER: Color32 = Color32::from_rgb(0x1f, 0x40, 0x68);

/// Fixed color palette with a single selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color32],
    selected: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: &COLORS,
            selected: 0,
        }
    }
}

impl Palette {
    pub fn colors(&self) -> &[Color32] {
        self.colors
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The active pen color.
    pub fn selected_color(&self) -> Color32 {
        self.colors[self.selected]
    }

    /// Selects the swatch at `index`. Returns `false` and keeps the current
    /// selection when `index` is outside the palette.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.colors.len() {
            log::warn!("Ignoring palette index {} (palette has {} colors)", index, self.colors.len());
            return false;
        }
        self.selected = index;
        true
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }
}
