use thiserror::Error;

/// Reasons an edit was refused. A refused edit never touches the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// Edits are only accepted while the simulation is stopped.
    #[error("grid edits are disabled while the simulation is running")]
    SimulationRunning,
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
