use super::{CellState, Grid};

/// A named arrangement of live cells that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of live cells
}

impl Pattern {
    /// Create a new pattern from live cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Cells landing off-grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: i32, col: i32) {
        for &(dr, dc) in &self.cells {
            grid.set(row + dr as i32, col + dc as i32, CellState::Alive);
        }
    }

    /// Stamp the pattern centred on the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (rows, cols) = grid.dimensions();
        let row = (rows as i32 - self.rows as i32) / 2;
        let col = (cols as i32 - self.cols as i32) / 2;
        self.place_on(grid, row, col);
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// R-pentomino - methuselah that stabilizes at generation 1103
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }

    /// Look a pattern up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StepStrategy, engine};

    fn snapshot(grid: &Grid) -> Vec<(usize, usize, CellState)> {
        grid.iter_cells().collect()
    }

    #[test]
    fn test_pattern_extent() {
        let toad = presets::toad();
        assert_eq!((toad.rows, toad.cols), (2, 4));
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
    }

    #[test]
    fn test_place_clips_at_edges() {
        let mut grid = Grid::new(4, 4).unwrap();
        presets::block().place_on(&mut grid, 3, 3);
        assert_eq!(grid.population(), 1);
        presets::block().place_on(&mut grid, -1, -1);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut grid = Grid::new(10, 10).unwrap();
            pattern.place_centered(&mut grid);
            let start = snapshot(&grid);

            engine::step(&mut grid, StepStrategy::Serial);
            assert_ne!(snapshot(&grid), start, "{} should change", pattern.name);
            engine::step(&mut grid, StepStrategy::Serial);
            assert_eq!(snapshot(&grid), start, "{} should return", pattern.name);
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(presets::find("Glider").map(|p| p.name), Some("glider"));
        assert!(presets::find("gosper").is_none());
    }
}
