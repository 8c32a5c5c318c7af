mod camera;
mod config;
mod engine;
mod simulation;

pub use camera::Camera;
pub use config::EngineConfig;
pub use engine::Engine;
pub use simulation::{RunState, SimulationLoop, MIN_CADENCE, MAX_CADENCE};
