//! Generation update for the board.
//!
//! A step runs in two phases. The compute phase reads only committed
//! `state` values and fills every cell's `next_state`; the commit phase
//! then writes back through [`Grid::set`] for cells whose value moved, so
//! the grid's change log holds exactly the cells that changed.

use super::{CellState, Grid};
use rayon::prelude::*;

/// Grids at or above this many cells use the parallel compute phase by default
pub const PARALLEL_THRESHOLD: usize = 250_000;

/// How the compute phase of a generation is evaluated.
/// The commit phase is always serial, so there is one writer of `state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows fanned out across the rayon pool
    Parallel,
}

impl StepStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    /// Pick a strategy for a grid of the given cell count
    pub fn for_size(cells: usize) -> Self {
        if cells >= PARALLEL_THRESHOLD {
            StepStrategy::Parallel
        } else {
            StepStrategy::Serial
        }
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }
}

/// Outcome of one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
}

impl StepReport {
    pub const fn changed(&self) -> usize {
        self.births + self.deaths
    }
}

/// Advance the grid by one generation in place
pub fn step(grid: &mut Grid, strategy: StepStrategy) -> StepReport {
    compute(grid, strategy);
    commit(grid)
}

/// Phase 1: derive every `next_state` from the pre-step grid
fn compute(grid: &mut Grid, strategy: StepStrategy) {
    let (_, cols) = grid.dimensions();
    let evolve = |idx: usize, grid: &Grid| {
        let neighbors = grid.live_neighbors(idx / cols, idx % cols);
        grid.cells()[idx].state.evolve(neighbors)
    };

    let next: Vec<CellState> = {
        let snapshot: &Grid = grid;
        match strategy {
            StepStrategy::Serial => (0..snapshot.len()).map(|idx| evolve(idx, snapshot)).collect(),
            StepStrategy::Parallel => (0..snapshot.len())
                .into_par_iter()
                .with_min_len(cols)
                .map(|idx| evolve(idx, snapshot))
                .collect(),
        }
    };

    grid.cells_mut()
        .iter_mut()
        .zip(next)
        .for_each(|(cell, next_state)| cell.next_state = next_state);
}

/// Phase 2: apply pending states that differ from the committed ones
fn commit(grid: &mut Grid) -> StepReport {
    let (_, cols) = grid.dimensions();
    let pending: Vec<(usize, CellState)> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.next_state != cell.state)
        .map(|(idx, cell)| (idx, cell.next_state))
        .collect();

    let mut report = StepReport::default();
    for (idx, state) in pending {
        if state.is_alive() {
            report.births += 1;
        } else {
            report.deaths += 1;
        }
        grid.set((idx / cols) as i32, (idx % cols) as i32, state);
    }
    report
}
