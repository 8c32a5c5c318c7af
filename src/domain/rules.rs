use super::Cell;

/// Trait for cellular automaton rules.
/// The stepping code only needs a cell's state and its live neighbor count.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
/// 1. Live cell with fewer than 2 or more than 3 neighbors dies
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. Everything else keeps its state
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway B3/S23"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, n) if !(2..=3).contains(&n) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (cell, _) => cell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(ConwayRule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(ConwayRule.evolve(Cell::Alive, 1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(ConwayRule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(ConwayRule.evolve(Cell::Alive, 3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(ConwayRule.evolve(Cell::Alive, n), Cell::Dead);
        }
    }

    #[test]
    fn test_reproduction_only_at_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(ConwayRule.evolve(Cell::Dead, n), expected, "neighbors = {n}");
        }
    }
}
