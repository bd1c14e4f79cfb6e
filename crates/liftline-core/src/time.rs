// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Simulation Clock View
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (current_time, new_time)
// ─────────────────────────────────────────────────────────────────────

/// Read-only view of the external time stepper for one step.
///
/// Passed by reference into every per-step call and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimTime {
    /// Time n.
    pub current_time: f64,
    /// Time n+1.
    pub new_time: f64,
    pub time_index: usize,
}

impl SimTime {
    pub fn new(current_time: f64, new_time: f64, time_index: usize) -> Self {
        Self {
            current_time,
            new_time,
            time_index,
        }
    }

    /// Clock at setup: no time has elapsed yet.
    pub fn initial(time: f64) -> Self {
        Self::new(time, time, 0)
    }

    pub fn dt(&self) -> f64 {
        self.new_time - self.current_time
    }

    /// Clock for the following step with step size `dt`.
    pub fn advance(&self, dt: f64) -> Self {
        Self::new(self.new_time, self.new_time + dt, self.time_index + 1)
    }
}
