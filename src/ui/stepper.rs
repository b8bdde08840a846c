use super::Button;
use macroquad::prelude::*;

const STEP_BUTTON: f32 = 26.0;

/// A labelled numeric setting with -/+ buttons
#[derive(Clone)]
pub struct Stepper {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    minus: Button,
    plus: Button,
}

impl Stepper {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>) -> Self {
        let mut stepper = Self {
            x,
            y,
            width,
            label: label.into(),
            minus: Button::new(0.0, 0.0, STEP_BUTTON, STEP_BUTTON, "-"),
            plus: Button::new(0.0, 0.0, STEP_BUTTON, STEP_BUTTON, "+"),
        };
        stepper.set_position(x, y);
        stepper
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.minus.set_position(x + self.width - 2.0 * STEP_BUTTON - 4.0, y);
        self.plus.set_position(x + self.width - STEP_BUTTON, y);
    }

    /// -1 or +1 when a button was clicked this frame
    pub fn update(&self, mouse_pos: (f32, f32)) -> Option<i64> {
        if self.minus.is_clicked(mouse_pos) {
            Some(-1)
        } else if self.plus.is_clicked(mouse_pos) {
            Some(1)
        } else {
            None
        }
    }

    pub fn draw(&self, value: &str, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y + 11.0, 13.0, GRAY);
        draw_text(value, self.x, self.y + 25.0, 16.0, WHITE);
        self.minus.draw(mouse_pos);
        self.plus.draw(mouse_pos);
    }
}
