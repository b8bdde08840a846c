mod cell;
mod grid;
mod patterns;
pub mod edit;
pub mod engine;
pub mod sizing;

pub use cell::{Cell, CellState};
pub use grid::{CellChange, Grid, GridError, MAX_CELLS, MAX_SIDE};
pub use patterns::{Pattern, presets};
pub use edit::{EditMode, Editor};
pub use engine::{StepReport, StepStrategy};
pub use sizing::SizingPolicy;
