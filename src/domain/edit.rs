//! Manual editing of the board through draw/erase gestures.

use super::{CellState, Grid};
use serde::{Deserialize, Serialize};

/// What a manual edit writes into a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Draw,
    Erase,
}

impl EditMode {
    /// The state an edit in this mode writes
    pub const fn target(self) -> CellState {
        match self {
            EditMode::Draw => CellState::Alive,
            EditMode::Erase => CellState::Dead,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            EditMode::Draw => EditMode::Erase,
            EditMode::Erase => EditMode::Draw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditMode::Draw => "Draw",
            EditMode::Erase => "Erase",
        }
    }
}

/// Editor tracks the draw/erase mode and the cell last touched by the
/// current drag so lingering over one cell toggles it only once.
#[derive(Debug, Default)]
pub struct Editor {
    mode: EditMode,
    last_toggled: Option<(i32, i32)>,
    in_gesture: bool,
}

impl Editor {
    pub fn new(mode: EditMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    pub const fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    pub const fn last_toggled(&self) -> Option<(i32, i32)> {
        self.last_toggled
    }

    /// Write the mode's target state into a cell if it differs.
    /// Returns true when the cell changed.
    pub fn toggle_cell(&self, grid: &mut Grid, row: i32, col: i32) -> bool {
        let target = self.mode.target();
        match grid.get(row, col) {
            Ok(current) if current != target => {
                grid.set(row, col, target);
                true
            }
            _ => false,
        }
    }

    pub fn begin_gesture(&mut self) {
        self.in_gesture = true;
        self.last_toggled = None;
    }

    pub fn end_gesture(&mut self) {
        self.in_gesture = false;
        self.last_toggled = None;
    }

    /// Apply the pointer's current cell, skipping a repeat of the last one
    pub fn handle_pointer_move(&mut self, grid: &mut Grid, row: i32, col: i32) -> bool {
        if self.last_toggled == Some((row, col)) || !grid.contains(row, col) {
            return false;
        }
        self.last_toggled = Some((row, col));
        self.toggle_cell(grid, row, col)
    }
}
