use macroquad::prelude::*;

const FILL: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const FILL_HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            color: FILL,
            hover_color: FILL_HOVER,
        }
    }

    /// Builder for an accent-colored button
    pub fn with_colors(mut self, color: Color, hover_color: Color) -> Self {
        self.color = color;
        self.hover_color = hover_color;
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.move_to(vec2(x, y));
    }

    /// Check if mouse is hovering over button (edges included)
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        let Rect { x, y, w, h } = self.rect;
        (x..=x + w).contains(&mouse_pos.0) && (y..=y + h).contains(&mouse_pos.1)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let fill = if self.is_hovered(mouse_pos) { self.hover_color } else { self.color };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        // Short buttons (settings rows) get the smaller font
        let font_size: u16 = if h < 30.0 { 16 } else { 20 };
        let dims = measure_text(&self.label, None, font_size, 1.0);
        draw_text(
            &self.label,
            x + (w - dims.width) / 2.0,
            y + (h + dims.height) / 2.0,
            f32::from(font_size),
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos)
    }
}
