use std::time::Duration;

use crate::domain::DEFAULT_MAX_DIMENSION;

/// Static configuration for an engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Rows of the grid created at startup.
    pub initial_rows: usize,
    /// Columns of the grid created at startup.
    pub initial_cols: usize,
    /// Upper bound applied to every resize request.
    pub max_rows: usize,
    pub max_cols: usize,
    /// Time between generations while running.
    pub cadence: Duration,
    /// Display zoom bounds (inclusive).
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Probability of a cell being alive after `Engine::randomize`.
    pub random_density: f64,
}

impl EngineConfig {
    /// Clamp requested dimensions to [1, max]
    pub fn clamp_dimensions(&self, rows: usize, cols: usize) -> (usize, usize) {
        (rows.clamp(1, self.max_rows.max(1)), cols.clamp(1, self.max_cols.max(1)))
    }

    pub fn clamp_zoom(&self, level: f32) -> f32 {
        if level.is_nan() {
            return 1.0_f32.clamp(self.min_zoom, self.max_zoom);
        }
        level.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_rows: 60,
            initial_cols: 60,
            max_rows: DEFAULT_MAX_DIMENSION,
            max_cols: DEFAULT_MAX_DIMENSION,
            cadence: Duration::from_millis(100),
            min_zoom: 0.6,
            max_zoom: 3.0,
            random_density: 0.3,
        }
    }
}
