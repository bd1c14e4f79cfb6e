// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Diagnostic Records
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (write_netcdf)
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Per-step snapshot of one wing, handed to an output sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WingOutputRecord {
    pub label: String,
    /// Simulation time the record refers to (time n+1).
    pub time: f64,
    pub time_index: usize,
    /// Total lift over all points.
    pub lift: f64,
    /// Total drag over all points.
    pub drag: f64,
    /// Angle of attack per point (degrees).
    pub aoa: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
    /// Relative wind per point in the local (chordwise, spanwise, normal) frame.
    pub vel_rel: Vec<[f64; 3]>,
    /// Force on the fluid per point.
    pub force: Vec<[f64; 3]>,
}

impl WingOutputRecord {
    pub fn num_points(&self) -> usize {
        self.aoa.len()
    }

    pub fn to_json(&self) -> String {
        // Non-finite floats serialize as null.
        serde_json::to_string(self).unwrap_or_default()
    }
}
