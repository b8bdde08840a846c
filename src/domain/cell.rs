/// CellState is the binary value held by every cell of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Numeric form (0 = dead, 1 = alive), used for neighbor sums
    pub const fn as_u8(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// A stored cell: the committed state plus the scratch slot the rule
/// engine fills during the compute phase of a generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub state: CellState,
    pub next_state: CellState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(CellState::Alive.evolve(n), CellState::Dead);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(CellState::Dead.evolve(n), CellState::Dead);
        }
    }

    #[test]
    fn test_default_cell_is_dead() {
        let cell = Cell::default();
        assert_eq!(cell.state, CellState::Dead);
        assert_eq!(cell.next_state, CellState::Dead);
    }
}
