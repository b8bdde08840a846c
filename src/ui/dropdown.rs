use super::rgb;
use macroquad::prelude::*;

const SWATCH: f32 = 16.0;

/// Dropdown of named color swatches
#[derive(Clone)]
pub struct ColorDropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<(&'static str, u32)>,
    is_open: bool,
    label: String,
}

impl ColorDropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<(&'static str, u32)>) -> Self {
        Self {
            x,
            y,
            width,
            height: 26.0,
            items,
            is_open: false,
            label: label.into(),
        }
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Close the dropdown
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Name for a color, or its hex code when it is not a preset
    fn describe(&self, color: u32) -> String {
        self.items
            .iter()
            .find(|(_, c)| *c == color)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| format!("#{color:06x}"))
    }

    /// Draw the closed box, and the menu when open
    pub fn draw(&self, current: u32, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 4.0, 13.0, GRAY);

        let box_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, box_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);
        self.draw_swatch(self.y, current);
        draw_text(&self.describe(current), self.x + SWATCH + 10.0, self.y + 18.0, 15.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );
        for (i, (name, color)) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if *color == current {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            self.draw_swatch(item_y, *color);
            draw_text(name, self.x + SWATCH + 10.0, item_y + 18.0, 15.0, WHITE);
        }
        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, WHITE);
    }

    fn draw_swatch(&self, y: f32, color: u32) {
        let top = y + (self.height - SWATCH) / 2.0;
        draw_rectangle(self.x + 5.0, top, SWATCH, SWATCH, rgb(color));
        draw_rectangle_lines(self.x + 5.0, top, SWATCH, SWATCH, 1.0, GRAY);
    }

    /// Handle a click at `mouse_pos`; returns the picked color when the
    /// selection changed
    pub fn click(&mut self, current: u32, mouse_pos: (f32, f32)) -> Option<u32> {
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }

        self.is_open = false;
        (0..self.items.len())
            .find(|&i| self.is_hovered_item(mouse_pos, i))
            .map(|i| self.items[i].1)
            .filter(|&color| color != current)
    }

    /// Whether the pointer is over the box or its open menu
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + index as f32 * self.height
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.item_y(index);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }
}
