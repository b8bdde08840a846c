use super::{Cell, CellState};
use thiserror::Error;

/// Largest allowed row or column count
pub const MAX_SIDE: usize = 2000;
/// Largest allowed total cell count
pub const MAX_CELLS: usize = 1_000_000;

/// Errors raised by the grid store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or cols is zero, or the grid would exceed the safety caps
    #[error("invalid grid dimension {rows}x{cols} (sides 1..={}, at most {} cells)", MAX_SIDE, MAX_CELLS)]
    InvalidDimension { rows: usize, cols: usize },
    /// A read addressed a coordinate outside the grid
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
}

/// A committed write that changed a cell's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// Grid owns the rows x cols board of cells, stored row-major.
///
/// Every write through [`Grid::set`] that actually changes a cell is
/// appended to a change log, so a renderer can repaint only what moved.
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    changes: Vec<CellChange>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    /// Dimensions are validated before anything is allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            changes: Vec::new(),
        })
    }

    /// Validate a candidate size against the safety caps
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
        let fits = rows > 0
            && cols > 0
            && rows <= MAX_SIDE
            && cols <= MAX_SIDE
            && rows * cols <= MAX_CELLS;
        if fits {
            Ok(())
        } else {
            Err(GridError::InvalidDimension { rows, cols })
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert signed coordinates to a flat index, None when off-grid
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let (r, c) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Read a cell's state. Off-grid reads are an error.
    pub fn get(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        self.index(row, col)
            .map(|idx| self.cells[idx].state)
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Write a cell's state. Off-grid writes are silently ignored.
    pub fn set(&mut self, row: i32, col: i32, state: CellState) {
        let Some(idx) = self.index(row, col) else {
            return;
        };
        let cell = &mut self.cells[idx];
        if cell.state != state {
            cell.state = state;
            self.changes.push(CellChange {
                row: idx / self.cols,
                col: idx % self.cols,
                state,
            });
        }
    }

    /// Count live cells in the Moore neighborhood; off-grid neighbors count as dead
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as i32, col as i32);

        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| self.index(row + dr, col + dc))
            .map(|idx| self.cells[idx].state.as_u8())
            .sum()
    }

    /// Kill every cell in place, keeping the allocation
    pub fn reset_all(&mut self) {
        for idx in 0..self.cells.len() {
            let (row, col) = ((idx / self.cols) as i32, (idx % self.cols) as i32);
            self.set(row, col, CellState::Dead);
            self.cells[idx].next_state = CellState::Dead;
        }
    }

    /// Fill the grid with random soup of the given density (0.0..=1.0)
    pub fn randomize(&mut self, density: f64) {
        use rand::Rng;
        let mut rng = rand::rng();
        let density = density.clamp(0.0, 1.0);

        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                self.set(row, col, rng.random_bool(density).into());
            }
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.state.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx / self.cols, idx % self.cols, cell.state))
    }

    /// Drain the change log accumulated since the last call
    pub fn take_changes(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }

    pub(super) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(super) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.len(), 28);
        assert_eq!(grid.population(), 0);
        assert!(grid.iter_cells().all(|(_, _, s)| s == CellState::Dead));
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).err(),
            Some(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(MAX_SIDE + 1, 1).is_err());
        assert!(Grid::new(1000, 1001).is_err());
        assert!(Grid::new(1000, 1000).is_ok());
    }

    #[test]
    fn test_get_out_of_bounds_fails() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            grid.get(-1, 0),
            Err(GridError::OutOfBounds { row: -1, col: 0, .. })
        ));
        assert!(grid.get(0, 3).is_err());
        assert!(grid.get(3, 0).is_err());
        assert_eq!(grid.get(2, 2), Ok(CellState::Dead));
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let mut grid = Grid::new(3, 3).unwrap();
        for (r, c) in [(-1, -1), (-1, 1), (3, 0), (0, 3), (1, i32::MAX), (i32::MIN, 1)] {
            grid.set(r, c, CellState::Alive);
        }
        assert_eq!(grid.population(), 0);
        assert!(grid.take_changes().is_empty());
    }

    #[test]
    fn test_set_records_only_real_changes() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 2, CellState::Alive);
        grid.set(1, 2, CellState::Alive);
        grid.set(0, 0, CellState::Dead);

        let changes = grid.take_changes();
        assert_eq!(
            changes,
            vec![CellChange { row: 1, col: 2, state: CellState::Alive }]
        );
        assert!(grid.take_changes().is_empty());
    }

    #[test]
    fn test_live_neighbors_treats_edges_as_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                grid.set(r, c, CellState::Alive);
            }
        }
        assert_eq!(grid.live_neighbors(1, 1), 8);
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(0, 1), 5);
        assert_eq!(grid.live_neighbors(2, 2), 3);
    }

    #[test]
    fn test_reset_all_keeps_dimensions() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, CellState::Alive);
        grid.set(4, 0, CellState::Alive);
        grid.take_changes();

        grid.reset_all();
        assert_eq!(grid.dimensions(), (5, 5));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.take_changes().len(), 2);
    }

    #[test]
    fn test_randomize_extremes() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.randomize(1.0);
        assert_eq!(grid.population(), 100);
        grid.randomize(0.0);
        assert_eq!(grid.population(), 0);
    }
}
