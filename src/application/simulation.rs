use std::time::Duration;

/// Bounds for `SimulationLoop::set_cadence`
pub const MIN_CADENCE: Duration = Duration::from_millis(10);
pub const MAX_CADENCE: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Two-state run loop. Owns no timer: the host reports elapsed time through `poll`
/// and steps the grid whenever a step comes due.
#[derive(Clone, Debug)]
pub struct SimulationLoop {
    state: RunState,
    cadence: Duration,
    accumulated: Duration,
}

impl SimulationLoop {
    pub fn new(cadence: Duration) -> Self {
        Self {
            state: RunState::Stopped,
            cadence: cadence.clamp(MIN_CADENCE, MAX_CADENCE),
            accumulated: Duration::ZERO,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    pub const fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn set_cadence(&mut self, cadence: Duration) {
        self.cadence = cadence.clamp(MIN_CADENCE, MAX_CADENCE);
    }

    /// Enter Running. The first step is due on the very next poll.
    pub fn start(&mut self) {
        if !self.is_running() {
            self.state = RunState::Running;
            self.accumulated = self.cadence;
        }
    }

    /// Enter Stopped. Checked on the next poll; a step already underway finishes.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.accumulated = Duration::ZERO;
    }

    pub fn toggle(&mut self) {
        if self.is_running() { self.stop() } else { self.start() }
    }

    /// Advance the clock and report whether a generation should run now
    pub fn poll(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.accumulated += elapsed;
        if self.accumulated >= self.cadence {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
