//! How many rows and columns the board gets.

use super::grid::{MAX_CELLS, MAX_SIDE};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS: usize = 90;
pub const DEFAULT_COLS: usize = 160;

/// Smallest cell edge, in pixels, a responsive layout will produce
pub const MIN_CELL_PX: f32 = 2.0;

/// Sizing policy for the board
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SizingPolicy {
    /// Explicit dimensions, independent of the window
    Fixed { rows: usize, cols: usize },
    /// Fill the available area with cells of `cell_px` pixels,
    /// never exceeding `max_cells` in total
    Responsive { cell_px: f32, max_cells: usize },
}

impl Default for SizingPolicy {
    fn default() -> Self {
        SizingPolicy::Fixed { rows: DEFAULT_ROWS, cols: DEFAULT_COLS }
    }
}

impl SizingPolicy {
    /// Compute (rows, cols) for a viewport of the given pixel size.
    /// The result always has both sides in 1..=MAX_SIDE and at most
    /// MAX_CELLS cells.
    pub fn dimensions(&self, viewport: (f32, f32)) -> (usize, usize) {
        match self.normalized() {
            SizingPolicy::Fixed { rows, cols } => (rows, cols),
            SizingPolicy::Responsive { cell_px, max_cells } => {
                let (width, height) = (viewport.0.max(0.0), viewport.1.max(0.0));
                let rows = clamp_side((height / cell_px).floor() as usize);
                let cols = clamp_side((width / cell_px).floor() as usize);
                fit_under_cap(rows, cols, max_cells)
            }
        }
    }

    /// The same policy with every value inside the supported range.
    /// Fixed sides are clamped and then shrunk together until the board
    /// fits under MAX_CELLS.
    pub fn normalized(self) -> Self {
        match self {
            SizingPolicy::Fixed { rows, cols } => {
                let (rows, cols) = fit_under_cap(clamp_side(rows), clamp_side(cols), MAX_CELLS);
                SizingPolicy::Fixed { rows, cols }
            }
            SizingPolicy::Responsive { cell_px, max_cells } => SizingPolicy::Responsive {
                cell_px: if cell_px.is_finite() { cell_px.max(MIN_CELL_PX) } else { MIN_CELL_PX },
                max_cells: max_cells.clamp(1, MAX_CELLS),
            },
        }
    }

    pub const fn is_responsive(&self) -> bool {
        matches!(self, SizingPolicy::Responsive { .. })
    }
}

fn clamp_side(n: usize) -> usize {
    n.clamp(1, MAX_SIDE)
}

/// Shrink both sides by the same factor until `rows * cols <= cap`
fn fit_under_cap(mut rows: usize, mut cols: usize, cap: usize) -> (usize, usize) {
    if rows * cols <= cap {
        return (rows, cols);
    }
    let scale = (cap as f64 / (rows * cols) as f64).sqrt();
    rows = clamp_side((rows as f64 * scale).floor() as usize);
    cols = clamp_side((cols as f64 * scale).floor() as usize);
    while rows * cols > cap {
        if cols >= rows && cols > 1 {
            cols -= 1;
        } else {
            rows -= 1;
        }
    }
    (rows, cols)
}
