use macroquad::prelude::*;
use crate::application::{BoardLayout, Camera, Repaint, Session, TickSource};
use crate::domain::{CellState, Grid};
use crate::ui::{SettingsPanel, panel_x, rgb, PANEL_MARGIN, PANEL_WIDTH};

pub const BACKGROUND: Color = Color::new(0.067, 0.067, 0.067, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// One texel per cell, kept in sync with the grid incrementally.
/// Only cells reported as changed are rewritten; a full repaint happens
/// after a rebuild or a color change.
pub struct CellCanvas {
    image: Image,
    texture: Texture2D,
    alive: Color,
    dead: Color,
}

impl CellCanvas {
    pub fn new(grid: &Grid, alive: u32, dead: u32) -> Self {
        let (rows, cols) = grid.dimensions();
        let image = Image::gen_image_color(cols as u16, rows as u16, rgb(dead));
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        let mut canvas = Self {
            image,
            texture,
            alive: rgb(alive),
            dead: rgb(dead),
        };
        canvas.repaint_all(grid);
        canvas
    }

    fn color_for(&self, state: CellState) -> Color {
        if state.is_alive() { self.alive } else { self.dead }
    }

    fn repaint_all(&mut self, grid: &Grid) {
        for (row, col, state) in grid.iter_cells() {
            self.image.set_pixel(col as u32, row as u32, self.color_for(state));
        }
        self.texture.update(&self.image);
    }

    /// Pull pending changes from the session and upload them
    pub fn sync<T: TickSource>(&mut self, session: &mut Session<T>) {
        match session.take_repaint() {
            Repaint::Full => {
                let grid = session.grid();
                let (rows, cols) = grid.dimensions();
                let settings = session.settings();
                if (self.image.height as usize, self.image.width as usize) != (rows, cols) {
                    *self = Self::new(grid, settings.alive_color, settings.dead_color);
                } else {
                    self.alive = rgb(settings.alive_color);
                    self.dead = rgb(settings.dead_color);
                    self.repaint_all(grid);
                }
            }
            Repaint::Cells(changes) if changes.is_empty() => {}
            Repaint::Cells(changes) => {
                for change in changes {
                    let color = self.color_for(change.state);
                    self.image.set_pixel(change.col as u32, change.row as u32, color);
                }
                self.texture.update(&self.image);
            }
        }
    }
}

/// Draw the board, with gaps between cells once they are large enough to see
pub fn draw_board(canvas: &CellCanvas, layout: &BoardLayout) {
    let (x, y, width, height) = layout.bounds();
    let gap = layout.pitch - layout.cell;

    draw_texture_ex(
        &canvas.texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(width, height)),
            ..Default::default()
        },
    );

    if gap >= 1.0 && layout.pitch >= 4.0 {
        for col in 1..layout.cols {
            let line_x = x + col as f32 * layout.pitch - gap / 2.0;
            draw_line(line_x, y, line_x, y + height, gap, BACKGROUND);
        }
        for row in 1..layout.rows {
            let line_y = y + row as f32 * layout.pitch - gap / 2.0;
            draw_line(x, line_y, x + width, line_y, gap, BACKGROUND);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x() - PANEL_MARGIN,
        0.0,
        PANEL_WIDTH + 2.0 * PANEL_MARGIN,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with widgets, status and key help
pub fn draw_controls<T: TickSource>(
    session: &Session<T>,
    panel: &SettingsPanel,
    camera: &Camera,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    let px = panel_x();
    let running = session.is_running();
    let base_y = screen_height() - 230.0;

    let (rows, cols) = session.grid().dimensions();
    let info = [
        (format!("Grid: {}x{}", cols, rows), GRAY),
        (format!("Cells: {}", format_number(rows * cols)), GRAY),
        (format!("Population: {}", format_number(session.grid().population())), GRAY),
        (
            format!("Step: {:.1}ms ({})", session.last_step_time_ms, session.strategy().name()),
            GRAY,
        ),
        (format!("FPS: {} | Zoom: {:.1}x", get_fps(), camera.zoom), GRAY),
    ];
    info.iter().enumerate().for_each(|(i, (text, color))| {
        draw_text_label(text, px, base_y + i as f32 * 15.0, 13.0, *color);
    });

    let generation = session.generation().to_string();
    let labels = [
        ("Generation:", px, base_y + 90.0, 16.0, WHITE),
        (generation.as_str(), px, base_y + 110.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Status:", px, base_y + 140.0, 16.0, WHITE),
        (
            if running { "Running" } else { "Paused" },
            px,
            base_y + 158.0,
            16.0,
            if running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("Space: run/pause  Esc: reset", px, base_y + 185.0, 12.0, GRAY),
        ("E: draw/erase  R: random", px, base_y + 199.0, 12.0, GRAY),
        ("Up/Down: speed  Wheel: zoom", px, base_y + 213.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Widgets last so open menus cover the status text
    panel.draw(session.settings(), running, mouse_pos);
}
