use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, Rect, rules::Rule};

/// Default upper bound for both dimensions
pub const DEFAULT_MAX_DIMENSION: usize = 100;

/// Grid owns the row-major cell buffer of a bounded (non-wrapping) board.
/// Stepping never mutates in place: every generation is a new Grid built from a read-only snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid, clamping each dimension to [1, DEFAULT_MAX_DIMENSION]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::bounded(rows, cols, DEFAULT_MAX_DIMENSION, DEFAULT_MAX_DIMENSION)
    }

    /// Create an all-dead grid with caller-supplied maximums
    pub fn bounded(rows: usize, cols: usize, max_rows: usize, max_cols: usize) -> Self {
        let rows = rows.clamp(1, max_rows.max(1));
        let cols = cols.clamp(1, max_cols.max(1));
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Grid with the listed (row, col) cells alive; out-of-bounds entries are skipped
    pub fn with_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        live.iter().for_each(|&(row, col)| grid.set(row, col, Cell::Alive));
        grid
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip one cell. Returns false (and changes nothing) when out of bounds.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.toggle_range(Rect::single(row, col));
        true
    }

    /// Apply `value_fn` to every cell of the inclusive rectangle, clipped to the grid
    pub fn set_range(&mut self, rect: Rect, value_fn: impl Fn(Cell) -> Cell) {
        if rect.top() >= self.rows || rect.left() >= self.cols {
            return;
        }
        let bottom = rect.bottom().min(self.rows - 1);
        let right = rect.right().min(self.cols - 1);

        for row in rect.top()..=bottom {
            let start = self.index(row, rect.left());
            let end = self.index(row, right);
            self.cells[start..=end]
                .iter_mut()
                .for_each(|cell| *cell = value_fn(*cell));
        }
    }

    /// Flip every cell of the rectangle against its own current value
    pub fn toggle_range(&mut self, rect: Rect) {
        self.set_range(rect, Cell::toggle);
    }

    /// Count live Moore neighbors. Neighbors past the edge count as dead (no wrapping).
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, rule: &dyn Rule, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        rule.evolve(current, self.count_live_neighbors(row, col))
    }

    /// Compute the next generation (serial)
    pub fn step(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(rule, row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Compute the next generation with one rayon task per row.
    /// Produces exactly the same grid as `step`.
    pub fn step_parallel(&self, rule: &dyn Rule) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                out.iter_mut()
                    .enumerate()
                    .for_each(|(col, cell)| *cell = self.next_cell(rule, row, col));
            });

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Make each cell alive with probability `density` (clamped to [0, 1])
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = if rng.random_bool(density) { Cell::Alive } else { Cell::Dead });
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|c| if c.is_alive() { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
