use std::time::Duration;

use tracing::{debug, info, trace};

use super::{EngineConfig, SimulationLoop};
use crate::domain::{Cell, ConwayRule, Grid, Rect, Rule, SelectionEditor};
use crate::error::EditError;

/// Engine is the boundary the host drives: it owns the grid, the selection gesture
/// and the run loop, and it is the only place either mutation source touches the grid.
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    rule: Box<dyn Rule>,
    selection: SelectionEditor,
    sim: SimulationLoop,
    generation: u64,
    zoom: f32,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let (rows, cols) = config.clamp_dimensions(config.initial_rows, config.initial_cols);
        let grid = Grid::bounded(rows, cols, config.max_rows, config.max_cols);
        let sim = SimulationLoop::new(config.cadence);
        let zoom = config.clamp_zoom(1.0);
        Self {
            config,
            grid,
            rule: Box::new(ConwayRule),
            selection: SelectionEditor::new(),
            sim,
            generation: 0,
            zoom,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    pub fn cadence(&self) -> Duration {
        self.sim.cadence()
    }

    pub fn set_cadence(&mut self, cadence: Duration) {
        self.sim.set_cadence(cadence);
    }

    /// In-progress selection rectangle, for drawing an overlay
    pub fn selection(&self) -> Option<Rect> {
        self.selection.current()
    }

    /// Replace the grid with an all-dead grid of the clamped size. Stops the loop.
    pub fn resize(&mut self, rows: usize, cols: usize) -> (usize, usize) {
        let (rows, cols) = self.config.clamp_dimensions(rows, cols);
        self.grid = Grid::bounded(rows, cols, self.config.max_rows, self.config.max_cols);
        self.selection.cancel();
        self.sim.stop();
        self.generation = 0;
        info!(rows, cols, "grid resized");
        (rows, cols)
    }

    /// Rebuild an all-dead grid at the current size. Run state is left alone.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.selection.cancel();
        self.generation = 0;
        info!("grid reset");
    }

    /// Fill the grid randomly using the configured density
    pub fn randomize(&mut self) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.grid.randomize(&mut rand::rng(), self.config.random_density);
        self.generation = 0;
        info!(live = self.grid.live_count(), "grid randomized");
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), EditError> {
        if self.sim.is_running() {
            debug!("edit refused: simulation running");
            return Err(EditError::SimulationRunning);
        }
        Ok(())
    }

    fn ensure_in_bounds(&self, row: usize, col: usize) -> Result<(), EditError> {
        if self.grid.contains(row, col) {
            return Ok(());
        }
        let (rows, cols) = self.grid.dimensions();
        debug!(row, col, rows, cols, "edit refused: out of bounds");
        Err(EditError::OutOfBounds { row, col, rows, cols })
    }

    /// Flip a single cell
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.ensure_in_bounds(row, col)?;
        self.grid.toggle(row, col);
        Ok(())
    }

    /// Set a single cell to `cell` (drag painting)
    pub fn paint_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.ensure_in_bounds(row, col)?;
        self.grid.set(row, col, cell);
        Ok(())
    }

    pub fn begin_selection(&mut self, row: usize, col: usize) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.ensure_in_bounds(row, col)?;
        self.selection.begin(row, col);
        Ok(())
    }

    /// Move the selection's free corner; out-of-bounds positions are ignored
    pub fn extend_selection(&mut self, row: usize, col: usize) {
        if self.grid.contains(row, col) {
            self.selection.extend(row, col);
        }
    }

    /// Finish the gesture and toggle every cell in the resolved rectangle.
    /// `Ok(None)` means there was no gesture to apply.
    pub fn commit_selection(&mut self) -> Result<Option<Rect>, EditError> {
        if !self.selection.is_active() {
            return Ok(None);
        }
        self.ensure_editable()?;
        let Some(rect) = self.selection.complete() else {
            return Ok(None);
        };
        self.grid.toggle_range(rect);
        debug!(?rect, cells = rect.cell_count(), "selection toggled");
        Ok(Some(rect))
    }

    /// Enter Running. An unfinished selection gesture is dropped.
    pub fn start(&mut self) {
        if self.sim.is_running() {
            return;
        }
        self.selection.cancel();
        self.sim.start();
        info!(generation = self.generation, "simulation started");
    }

    pub fn stop(&mut self) {
        if !self.sim.is_running() {
            return;
        }
        self.sim.stop();
        info!(generation = self.generation, "simulation stopped");
    }

    pub fn toggle_running(&mut self) {
        if self.sim.is_running() { self.stop() } else { self.start() }
    }

    /// Report elapsed host time; runs one generation when due. Returns whether it did.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.sim.poll(elapsed) {
            return false;
        }
        self.advance();
        true
    }

    /// Run exactly one generation while stopped
    pub fn step_once(&mut self) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.grid = self.grid.step(self.rule.as_ref());
        self.generation += 1;
        trace!(generation = self.generation, live = self.grid.live_count(), "generation");
    }

    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Display scale only; grid semantics never depend on it
    pub fn set_zoom(&mut self, level: f32) -> f32 {
        self.zoom = self.config.clamp_zoom(level);
        self.zoom
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rows: usize, cols: usize) -> Engine {
        Engine::new(EngineConfig {
            initial_rows: rows,
            initial_cols: cols,
            ..EngineConfig::default()
        })
    }

    fn select(engine: &mut Engine, from: (usize, usize), to: (usize, usize)) -> Option<Rect> {
        engine.begin_selection(from.0, from.1).unwrap();
        engine.extend_selection(to.0, to.1);
        engine.commit_selection().unwrap()
    }

    #[test]
    fn test_default_engine() {
        let engine = Engine::default();
        assert_eq!(engine.dimensions(), (60, 60));
        assert_eq!(engine.zoom(), 1.0);
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_selection_toggles_rectangle_and_back() {
        let mut engine = engine(5, 5);
        let rect = select(&mut engine, (1, 1), (3, 3)).unwrap();
        assert_eq!(rect.cell_count(), 9);

        let grid = engine.grid();
        assert_eq!(grid.live_count(), 9);
        for (row, col, cell) in grid.iter_cells() {
            assert_eq!(cell.is_alive(), (1..=3).contains(&row) && (1..=3).contains(&col));
        }

        select(&mut engine, (1, 1), (3, 3));
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn test_selection_flips_mixed_cells_individually() {
        let mut engine = engine(4, 4);
        engine.toggle_cell(0, 0).unwrap();
        select(&mut engine, (1, 1), (0, 0));
        let live: Vec<_> = engine
            .grid()
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(live, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_commit_without_selection_is_nothing() {
        let mut engine = engine(5, 5);
        assert_eq!(engine.commit_selection(), Ok(None));
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn test_single_cell_selection() {
        let mut engine = engine(5, 5);
        engine.begin_selection(2, 2).unwrap();
        assert_eq!(engine.commit_selection(), Ok(Some(Rect::single(2, 2))));
        assert_eq!(engine.grid().get(2, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_extend_out_of_bounds_is_ignored() {
        let mut engine = engine(5, 5);
        engine.begin_selection(1, 1).unwrap();
        engine.extend_selection(2, 2);
        engine.extend_selection(9, 9);
        assert_eq!(engine.selection(), Some(Rect::from_corners((1, 1), (2, 2))));
    }

    #[test]
    fn test_out_of_bounds_edits_are_refused() {
        let mut engine = engine(5, 5);
        assert_eq!(
            engine.toggle_cell(5, 0),
            Err(EditError::OutOfBounds { row: 5, col: 0, rows: 5, cols: 5 })
        );
        assert!(engine.begin_selection(0, 7).is_err());
        assert!(engine.selection().is_none());
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn test_edits_refused_while_running() {
        let mut engine = engine(5, 5);
        engine.start();
        assert_eq!(engine.toggle_cell(1, 1), Err(EditError::SimulationRunning));
        assert_eq!(engine.paint_cell(1, 1, Cell::Alive), Err(EditError::SimulationRunning));
        assert_eq!(engine.begin_selection(1, 1), Err(EditError::SimulationRunning));
        assert_eq!(engine.randomize(), Err(EditError::SimulationRunning));
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn test_commit_refused_while_running_keeps_gesture() {
        let mut engine = engine(5, 5);
        engine.start();
        engine.selection.begin(1, 1);
        assert_eq!(engine.commit_selection(), Err(EditError::SimulationRunning));
        assert_eq!(engine.selection(), Some(Rect::single(1, 1)));
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn test_paint_sets_instead_of_toggling() {
        let mut engine = engine(5, 5);
        engine.paint_cell(2, 2, Cell::Alive).unwrap();
        engine.paint_cell(2, 2, Cell::Alive).unwrap();
        assert_eq!(engine.grid().get(2, 2), Some(Cell::Alive));

        engine.paint_cell(2, 2, Cell::Dead).unwrap();
        engine.paint_cell(2, 2, Cell::Dead).unwrap();
        assert_eq!(engine.grid().get(2, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_paint_out_of_bounds_is_refused() {
        let mut engine = engine(5, 5);
        assert_eq!(
            engine.paint_cell(0, 5, Cell::Alive),
            Err(EditError::OutOfBounds { row: 0, col: 5, rows: 5, cols: 5 })
        );
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn test_start_drops_pending_selection() {
        let mut engine = engine(5, 5);
        engine.begin_selection(0, 0).unwrap();
        engine.start();
        assert!(engine.selection().is_none());
        engine.stop();
        assert_eq!(engine.commit_selection(), Ok(None));
    }

    #[test]
    fn test_resize_clamps_and_clears() {
        let mut engine = engine(10, 10);
        engine.toggle_cell(3, 3).unwrap();
        assert_eq!(engine.resize(200, 5), (100, 5));
        assert_eq!(engine.dimensions(), (100, 5));
        assert_eq!(engine.grid().live_count(), 0);
        assert_eq!(engine.resize(0, 0), (1, 1));
    }

    #[test]
    fn test_resize_stops_simulation() {
        let mut engine = engine(10, 10);
        engine.start();
        engine.resize(20, 20);
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_reset_keeps_dimensions_and_run_state() {
        let mut engine = engine(8, 12);
        engine.toggle_cell(1, 1).unwrap();
        engine.reset();
        assert_eq!(engine.dimensions(), (8, 12));
        assert_eq!(engine.grid().live_count(), 0);

        engine.start();
        engine.reset();
        assert!(engine.is_running());
    }

    #[test]
    fn test_tick_steps_on_cadence() {
        let mut engine = engine(5, 5);
        for col in 1..=3 {
            engine.toggle_cell(2, col).unwrap();
        }
        assert!(!engine.tick(Duration::from_secs(1)));

        engine.start();
        assert!(engine.tick(Duration::ZERO));
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.grid().get(1, 2), Some(Cell::Alive));
        assert_eq!(engine.grid().get(2, 1), Some(Cell::Dead));

        assert!(!engine.tick(Duration::from_millis(50)));
        assert!(engine.tick(Duration::from_millis(50)));
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.grid().get(2, 1), Some(Cell::Alive));

        engine.stop();
        assert!(!engine.tick(Duration::from_secs(1)));
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_step_once_only_when_stopped() {
        let mut engine = engine(5, 5);
        engine.toggle_cell(0, 0).unwrap();
        engine.step_once().unwrap();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.grid().live_count(), 0);

        engine.start();
        assert_eq!(engine.step_once(), Err(EditError::SimulationRunning));
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut engine = engine(5, 5);
        assert_eq!(engine.set_zoom(0.2), 0.6);
        assert_eq!(engine.set_zoom(1.7), 1.7);
        assert_eq!(engine.set_zoom(12.0), 3.0);
        assert_eq!(engine.zoom(), 3.0);
        assert_eq!(engine.dimensions(), (5, 5));
    }
}
