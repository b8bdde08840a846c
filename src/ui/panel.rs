use super::{ALIVE_COLORS, BUTTON_HEIGHT, Button, ColorDropdown, DEAD_COLORS, PANEL_WIDTH, Stepper, panel_x};
use crate::application::Settings;
use crate::domain::SizingPolicy;
use macroquad::prelude::*;

const SIDE_STEP: i64 = 10;
const CELL_PX_STEP: i64 = 1;
const MAX_CELLS_STEP: i64 = 10_000;
const CELL_SIZE_STEP: f32 = 0.05;
const INTERVAL_STEP: i64 = 10;

/// Something the user asked for through the panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    ToggleRun,
    Reset,
    ToggleMode,
    /// New settings; `debounce` holds them until editing pauses
    Edit { settings: Settings, debounce: bool },
}

/// Right-hand control panel: run/reset buttons and the collapsible
/// settings section, which is only reachable while the simulation is stopped.
pub struct SettingsPanel {
    pub expanded: bool,
    run_button: Button,
    reset_button: Button,
    settings_button: Button,
    mode_button: Button,
    first_side: Stepper,
    second_side: Stepper,
    cell_size: Stepper,
    interval: Stepper,
    alive: ColorDropdown,
    dead: ColorDropdown,
}

impl SettingsPanel {
    pub fn new() -> Self {
        let px = panel_x();
        let accent = (Color::from_rgba(60, 140, 90, 255), Color::from_rgba(80, 180, 115, 255));
        Self {
            expanded: true,
            run_button: Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start")
                .with_colors(accent.0, accent.1),
            reset_button: Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
            settings_button: Button::new(px, 120.0, PANEL_WIDTH, 28.0, "Settings"),
            mode_button: Button::new(px, 165.0, PANEL_WIDTH, 28.0, "Mode: Draw"),
            first_side: Stepper::new(px, 205.0, PANEL_WIDTH, "Width"),
            second_side: Stepper::new(px, 245.0, PANEL_WIDTH, "Height"),
            cell_size: Stepper::new(px, 285.0, PANEL_WIDTH, "Cell size"),
            interval: Stepper::new(px, 325.0, PANEL_WIDTH, "Update interval"),
            alive: ColorDropdown::new(px, 385.0, PANEL_WIDTH, "Alive color", ALIVE_COLORS.to_vec()),
            dead: ColorDropdown::new(px, 435.0, PANEL_WIDTH, "Dead color", DEAD_COLORS.to_vec()),
        }
    }

    /// The settings section is drawn and interactive
    pub fn section_visible(&self, running: bool) -> bool {
        self.expanded && !running
    }

    /// Whether the pointer is over the panel (or an open menu)
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= panel_x() || self.alive.is_hovered(mouse_pos) || self.dead.is_hovered(mouse_pos)
    }

    /// Re-anchor widgets to the current window width
    fn layout(&mut self) {
        let px = panel_x();
        self.run_button.set_position(px, 20.0);
        self.reset_button.set_position(px, 70.0);
        self.settings_button.set_position(px, 120.0);
        self.mode_button.set_position(px, 165.0);
        self.first_side.set_position(px, 205.0);
        self.second_side.set_position(px, 245.0);
        self.cell_size.set_position(px, 285.0);
        self.interval.set_position(px, 325.0);
        self.alive.set_position(px, 385.0);
        self.dead.set_position(px, 435.0);
    }

    /// Handle this frame's clicks against the current settings
    pub fn update(&mut self, settings: &Settings, running: bool, mouse_pos: (f32, f32)) -> Vec<PanelAction> {
        self.layout();
        self.run_button.set_label(if running { "Pause" } else { "Start" });
        self.mode_button.set_label(format!("Mode: {}", settings.mode.name()));

        let mut actions = Vec::new();
        if self.run_button.is_clicked(mouse_pos) {
            if !running {
                self.expanded = false;
            }
            actions.push(PanelAction::ToggleRun);
        }
        if self.reset_button.is_clicked(mouse_pos) {
            actions.push(PanelAction::Reset);
        }
        if !running && self.settings_button.is_clicked(mouse_pos) {
            self.expanded = !self.expanded;
        }
        if !self.section_visible(running) {
            self.alive.close();
            self.dead.close();
            return actions;
        }

        // An open menu covers the widgets below it; it gets the click first
        if self.alive.is_open() || self.dead.is_open() {
            self.update_colors(settings, mouse_pos, &mut actions);
            return actions;
        }

        if self.mode_button.is_clicked(mouse_pos) {
            actions.push(PanelAction::ToggleMode);
        }
        let edits = [
            self.first_side.update(mouse_pos).map(|d| step_sizing(settings, true, d)),
            self.second_side.update(mouse_pos).map(|d| step_sizing(settings, false, d)),
            self.cell_size.update(mouse_pos).map(|d| step_cell_size(settings, d)),
            self.interval.update(mouse_pos).map(|d| step_interval(settings, d)),
        ];
        actions.extend(
            edits
                .into_iter()
                .flatten()
                .map(|settings| PanelAction::Edit { settings, debounce: true }),
        );
        self.update_colors(settings, mouse_pos, &mut actions);
        actions
    }

    fn update_colors(&mut self, settings: &Settings, mouse_pos: (f32, f32), actions: &mut Vec<PanelAction>) {
        if is_mouse_button_pressed(MouseButton::Left) {
            route_color_click(&mut self.alive, &mut self.dead, settings, mouse_pos, actions);
        }
    }

    pub fn draw(&self, settings: &Settings, running: bool, mouse_pos: (f32, f32)) {
        self.run_button.draw(mouse_pos);
        self.reset_button.draw(mouse_pos);
        if running {
            return;
        }
        self.settings_button.draw(mouse_pos);
        if !self.expanded {
            return;
        }

        self.mode_button.draw(mouse_pos);
        let (first, second) = sizing_labels(&settings.sizing);
        self.first_side.draw(&first, mouse_pos);
        self.second_side.draw(&second, mouse_pos);
        self.cell_size.draw(&format!("{:.2}", settings.cell_size), mouse_pos);
        self.interval.draw(&format!("{} ms", settings.update_interval_ms), mouse_pos);

        // Open menu last so it appears on top
        if self.alive.is_open() {
            self.dead.draw(settings.dead_color, mouse_pos);
            self.alive.draw(settings.alive_color, mouse_pos);
        } else {
            self.alive.draw(settings.alive_color, mouse_pos);
            self.dead.draw(settings.dead_color, mouse_pos);
        }
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand one click to the color menus. The alive menu overlaps the dead
/// box when open, so a click it consumes never reaches the dead menu.
fn route_color_click(
    alive: &mut ColorDropdown,
    dead: &mut ColorDropdown,
    settings: &Settings,
    mouse_pos: (f32, f32),
    actions: &mut Vec<PanelAction>,
) {
    if dead.is_open() {
        if let Some(dead_color) = dead.click(settings.dead_color, mouse_pos) {
            actions.push(PanelAction::Edit {
                settings: Settings { dead_color, ..settings.clone() },
                debounce: false,
            });
        }
        return;
    }

    let alive_was_open = alive.is_open();
    if let Some(alive_color) = alive.click(settings.alive_color, mouse_pos) {
        actions.push(PanelAction::Edit {
            settings: Settings { alive_color, ..settings.clone() },
            debounce: false,
        });
    }
    if alive_was_open || alive.is_open() {
        return;
    }

    if let Some(dead_color) = dead.click(settings.dead_color, mouse_pos) {
        actions.push(PanelAction::Edit {
            settings: Settings { dead_color, ..settings.clone() },
            debounce: false,
        });
    }
}

/// Display strings for the two sizing steppers
fn sizing_labels(sizing: &SizingPolicy) -> (String, String) {
    match *sizing {
        SizingPolicy::Fixed { rows, cols } => (format!("{cols} cols"), format!("{rows} rows")),
        SizingPolicy::Responsive { cell_px, max_cells } => {
            (format!("{cell_px:.0} px/cell"), format!("max {max_cells} cells"))
        }
    }
}

/// Step the first (width / cell px) or second (height / cap) sizing value
pub fn step_sizing(settings: &Settings, first: bool, delta: i64) -> Settings {
    let sizing = match (settings.sizing, first) {
        (SizingPolicy::Fixed { rows, cols }, true) => SizingPolicy::Fixed {
            rows,
            cols: cols.saturating_add_signed((delta * SIDE_STEP) as isize).max(1),
        },
        (SizingPolicy::Fixed { rows, cols }, false) => SizingPolicy::Fixed {
            rows: rows.saturating_add_signed((delta * SIDE_STEP) as isize).max(1),
            cols,
        },
        (SizingPolicy::Responsive { cell_px, max_cells }, true) => SizingPolicy::Responsive {
            cell_px: (cell_px + (delta * CELL_PX_STEP) as f32).max(crate::domain::sizing::MIN_CELL_PX),
            max_cells,
        },
        (SizingPolicy::Responsive { cell_px, max_cells }, false) => SizingPolicy::Responsive {
            cell_px,
            max_cells: max_cells
                .saturating_add_signed((delta * MAX_CELLS_STEP) as isize)
                .max(MAX_CELLS_STEP as usize),
        },
    };
    Settings { sizing, ..settings.clone() }.validated()
}

pub fn step_cell_size(settings: &Settings, delta: i64) -> Settings {
    let raw = settings.cell_size + delta as f32 * CELL_SIZE_STEP;
    Settings {
        cell_size: (raw * 100.0).round() / 100.0,
        ..settings.clone()
    }
    .validated()
}

pub fn step_interval(settings: &Settings, delta: i64) -> Settings {
    Settings {
        update_interval_ms: settings
            .update_interval_ms
            .saturating_add_signed(delta * INTERVAL_STEP),
        ..settings.clone()
    }
    .validated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_SIDE;

    #[test]
    fn test_step_fixed_sides() {
        let settings = Settings::default();
        let wider = step_sizing(&settings, true, 1);
        assert_eq!(wider.sizing, SizingPolicy::Fixed { rows: 90, cols: 170 });
        let shorter = step_sizing(&settings, false, -1);
        assert_eq!(shorter.sizing, SizingPolicy::Fixed { rows: 80, cols: 160 });

        let tiny = Settings { sizing: SizingPolicy::Fixed { rows: 5, cols: 5 }, ..settings };
        assert_eq!(
            step_sizing(&tiny, false, -1).sizing,
            SizingPolicy::Fixed { rows: 1, cols: 5 }
        );
    }

    #[test]
    fn test_step_fixed_stops_at_max_side() {
        let settings = Settings {
            sizing: SizingPolicy::Fixed { rows: 10, cols: MAX_SIDE },
            ..Settings::default()
        };
        assert_eq!(step_sizing(&settings, true, 1), settings);
    }

    #[test]
    fn test_step_responsive() {
        let settings = Settings {
            sizing: SizingPolicy::Responsive { cell_px: 3.0, max_cells: 10_000 },
            ..Settings::default()
        };
        assert_eq!(
            step_sizing(&settings, true, -1).sizing,
            SizingPolicy::Responsive { cell_px: 2.0, max_cells: 10_000 }
        );
        assert_eq!(
            step_sizing(&settings, true, -5).sizing,
            SizingPolicy::Responsive { cell_px: 2.0, max_cells: 10_000 }
        );
        assert_eq!(
            step_sizing(&settings, false, -1).sizing,
            SizingPolicy::Responsive { cell_px: 3.0, max_cells: 10_000 }
        );
    }

    #[test]
    fn test_step_cell_size_rounds_and_clamps() {
        let settings = Settings::default();
        assert_eq!(step_cell_size(&settings, 1).cell_size, 0.25);
        let small = Settings { cell_size: 0.05, ..Settings::default() };
        assert_eq!(step_cell_size(&small, -1).cell_size, 0.05);
    }

    #[test]
    fn test_step_interval() {
        let settings = Settings::default();
        assert_eq!(step_interval(&settings, 1).update_interval_ms, 110);
        assert_eq!(step_interval(&settings, -100).update_interval_ms, 10);
    }

    fn color_menus() -> (ColorDropdown, ColorDropdown) {
        (
            ColorDropdown::new(0.0, 385.0, PANEL_WIDTH, "Alive color", ALIVE_COLORS.to_vec()),
            ColorDropdown::new(0.0, 435.0, PANEL_WIDTH, "Dead color", DEAD_COLORS.to_vec()),
        )
    }

    #[test]
    fn test_alive_pick_over_dead_box_does_not_open_dead_menu() {
        let (mut alive, mut dead) = color_menus();
        let settings = Settings::default();
        let mut actions = Vec::new();

        // Open the alive menu, then pick the item lying over the dead box
        route_color_click(&mut alive, &mut dead, &settings, (10.0, 400.0), &mut actions);
        assert!(alive.is_open());
        route_color_click(&mut alive, &mut dead, &settings, (10.0, 450.0), &mut actions);

        assert!(!alive.is_open());
        assert!(!dead.is_open());
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            PanelAction::Edit { settings: picked, debounce: false }
                if picked.alive_color == ALIVE_COLORS[1].1
        ));
    }

    #[test]
    fn test_dead_menu_opens_when_alive_closed() {
        let (mut alive, mut dead) = color_menus();
        let mut actions = Vec::new();
        route_color_click(&mut alive, &mut dead, &Settings::default(), (10.0, 450.0), &mut actions);
        assert!(dead.is_open());
        assert!(!alive.is_open());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_sizing_labels() {
        let (first, second) = sizing_labels(&SizingPolicy::Fixed { rows: 90, cols: 160 });
        assert_eq!(first, "160 cols");
        assert_eq!(second, "90 rows");
    }
}
