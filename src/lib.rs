// Domain layer - grid, rule, selection gesture
pub mod domain;

// Application layer - engine boundary and run loop
pub mod application;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Rect, Rule, ConwayRule, SelectionEditor};
pub use application::{Engine, EngineConfig, Camera, SimulationLoop, RunState};
pub use error::EditError;
pub use ui::Button;
