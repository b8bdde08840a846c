mod button;
mod dropdown;
mod panel;
mod stepper;

pub use button::Button;
pub use dropdown::ColorDropdown;
pub use panel::{PanelAction, SettingsPanel, step_cell_size, step_interval, step_sizing};
pub use stepper::Stepper;

// UI constants - functions for responsive layout
use macroquad::prelude::{Color, screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const PANEL_MARGIN: f32 = 12.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Alive color presets offered by the panel
pub const ALIVE_COLORS: &[(&str, u32)] = &[
    ("White", 0xffffff),
    ("Mint", 0x00ff96),
    ("Amber", 0xffb000),
    ("Cyan", 0x00c8ff),
    ("Magenta", 0xff40c0),
];

/// Dead color presets offered by the panel
pub const DEAD_COLORS: &[(&str, u32)] = &[
    ("Charcoal", 0x222222),
    ("Black", 0x000000),
    ("Navy", 0x101830),
    ("Slate", 0x3a3f4b),
    ("Moss", 0x0f2a1a),
];

/// Convert a `0xRRGGBB` value to an opaque color
pub fn rgb(hex: u32) -> Color {
    Color::from_rgba(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
        255,
    )
}

/// Get the X position where the panel content starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH - PANEL_MARGIN
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH - 2.0 * PANEL_MARGIN
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_channels() {
        let color = rgb(0x336699);
        assert_eq!(color, Color::from_rgba(0x33, 0x66, 0x99, 255));
    }

    #[test]
    fn test_presets_include_defaults() {
        assert!(ALIVE_COLORS.iter().any(|(_, c)| *c == 0xffffff));
        assert!(DEAD_COLORS.iter().any(|(_, c)| *c == 0x222222));
    }
}
