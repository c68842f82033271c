//! Panel colors and layout metrics

use egui::Color32;

/// Gap between a panel and the viewport edge
pub const PANEL_MARGIN: f32 = 24.0;

/// Panel corner radius
pub const PANEL_ROUNDING: f32 = 12.0;

/// Panel title font size
pub const PANEL_TITLE_SIZE: f32 = 48.0;

/// Panel title color
pub const PANEL_TITLE_COLOR: Color32 = Color32::WHITE;

const PANEL_COLORS: [Color32; 5] = [
    Color32::from_rgb(0x3a, 0x6e, 0xa5),
    Color32::from_rgb(0xc0, 0x4b, 0x4b),
    Color32::from_rgb(0x4b, 0x9c, 0x6a),
    Color32::from_rgb(0xd0, 0x8c, 0x2f),
    Color32::from_rgb(0x7a, 0x55, 0xa8),
];

/// Fill color for the panel at `index` (0-based), cycling through the palette
pub fn panel_color(index: usize) -> Color32 {
    PANEL_COLORS[index % PANEL_COLORS.len()]
}
