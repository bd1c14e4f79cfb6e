// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Configuration
// Mirrors wing-relevant subset of: amr-wind/wind_energy/actuator/wing/wing_ops.H
// ─────────────────────────────────────────────────────────────────────

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LiftlineError, LiftlineResult};

/// Top-level configuration: every wing driven by one actuator manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorConfig {
    pub wings: Vec<WingConfig>,

    /// Emit output records every `output_frequency` time steps.
    /// Default: 10.
    #[serde(default = "default_output_frequency")]
    pub output_frequency: usize,
}

fn default_output_frequency() -> usize {
    10
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            wings: Vec::new(),
            output_frequency: default_output_frequency(),
        }
    }
}

impl ActuatorConfig {
    /// Validate the manager settings and every wing.
    pub fn validate(&self) -> LiftlineResult<()> {
        if self.output_frequency < 1 {
            return Err(LiftlineError::Config(format!(
                "output_frequency must be >= 1, got {}",
                self.output_frequency
            )));
        }
        let mut labels = HashSet::new();
        for wing in &self.wings {
            if !labels.insert(wing.label.as_str()) {
                return Err(LiftlineError::Config(format!(
                    "duplicate wing label '{}'",
                    wing.label
                )));
            }
            wing.validate()?;
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> LiftlineResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LiftlineError::Config(format!("JSON parse error: {e}")))
    }
}

/// Body kind: selects the sectional aerodynamics model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WingType {
    /// Tabulated airfoil polar.
    #[default]
    FixedWing,
    /// Thin-airfoil theory, no polar table needed.
    FlatPlate,
}

/// How forces are discretized for the fluid solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    Line,
    Disk,
}

/// Prescribed rigid motion of a wing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionConfig {
    /// Wing stays where it is.
    #[default]
    None,
    /// Constant translation at `velocity` (m/s).
    Linear { velocity: [f64; 3] },
    /// Displacement `amplitude * sin(2π t / period)`.
    Sine { period: f64, amplitude: [f64; 3] },
}

/// Pitch angle as a function of time. Pitch values are radians and are
/// added to the angle of attack as interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchSchedule {
    pub time: Vec<f64>,
    pub pitch: Vec<f64>,
}

/// Airfoil polar. Angle of attack in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarConfig {
    pub aoa: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
}

/// Filtered lifting-line correction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FllcConfig {
    /// Correction activates on the first step with time > start_time.
    #[serde(default)]
    pub start_time: f64,

    /// Under-relaxation factor for the correction velocity.
    /// Default: 0.1.
    #[serde(default = "default_relaxation")]
    pub relaxation: f64,

    /// Optimal smoothing as a fraction of chord. Falls back to the
    /// wing's `epsilon_chord[0]` when absent.
    #[serde(default)]
    pub epsilon_chord: Option<f64>,
}

fn default_relaxation() -> f64 {
    0.1
}

impl Default for FllcConfig {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            relaxation: default_relaxation(),
            epsilon_chord: None,
        }
    }
}

/// One lifting body discretized as a line of actuator points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WingConfig {
    pub label: String,

    #[serde(default)]
    pub wing_type: WingType,

    #[serde(default)]
    pub source: SourceType,

    pub num_points: usize,

    /// Root end of the span line.
    pub start: [f64; 3],

    /// Tip end of the span line.
    pub end: [f64; 3],

    /// Reference chordwise direction. Default: +x (inflow along x).
    #[serde(default = "default_blade_x")]
    pub blade_x: [f64; 3],

    /// Either a single chord applied to every point or one per point.
    pub chord: Vec<f64>,

    /// Smoothing radius floor (m).
    pub epsilon: [f64; 3],

    /// Smoothing radius as a fraction of chord.
    #[serde(default)]
    pub epsilon_chord: [f64; 3],

    /// Static pitch (degrees), used when no schedule is given.
    #[serde(default)]
    pub pitch: f64,

    #[serde(default)]
    pub pitch_schedule: Option<PitchSchedule>,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub airfoil: Option<PolarConfig>,

    #[serde(default)]
    pub fllc: Option<FllcConfig>,
}

fn default_blade_x() -> [f64; 3] {
    [1.0, 0.0, 0.0]
}

impl WingConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> LiftlineResult<()> {
        let label = &self.label;
        if self.num_points < 2 {
            return Err(LiftlineError::Config(format!(
                "{label}: num_points must be >= 2, got {}",
                self.num_points
            )));
        }
        if self.chord.len() != 1 && self.chord.len() != self.num_points {
            return Err(LiftlineError::InvalidTableLengths {
                what: "chord",
                expected: self.num_points,
                actual: self.chord.len(),
            });
        }
        if let Some(c) = self.chord.iter().find(|&&c| !(c > 0.0)) {
            return Err(LiftlineError::Config(format!(
                "{label}: chord must be > 0, got {c}"
            )));
        }
        if self.epsilon.iter().any(|&e| !(e > 0.0)) {
            return Err(LiftlineError::Config(format!(
                "{label}: epsilon components must be > 0, got {:?}",
                self.epsilon
            )));
        }
        if self.epsilon_chord.iter().any(|&e| e < 0.0) {
            return Err(LiftlineError::Config(format!(
                "{label}: epsilon_chord components must be >= 0, got {:?}",
                self.epsilon_chord
            )));
        }
        let span_sq: f64 = (0..3).map(|k| (self.end[k] - self.start[k]).powi(2)).sum();
        if span_sq <= 0.0 {
            return Err(LiftlineError::Geometry(format!(
                "{label}: start and end coincide"
            )));
        }
        if self.blade_x.iter().all(|&b| b == 0.0) {
            return Err(LiftlineError::Geometry(format!(
                "{label}: blade_x must be non-zero"
            )));
        }
        if let MotionConfig::Sine { period, .. } = self.motion {
            if !(period > 0.0) {
                return Err(LiftlineError::Config(format!(
                    "{label}: sine motion period must be > 0, got {period}"
                )));
            }
        }
        if let Some(schedule) = &self.pitch_schedule {
            if schedule.pitch.len() != schedule.time.len() {
                return Err(LiftlineError::InvalidTableLengths {
                    what: "pitch schedule",
                    expected: schedule.time.len(),
                    actual: schedule.pitch.len(),
                });
            }
            if schedule.time.windows(2).any(|w| w[1] < w[0]) {
                return Err(LiftlineError::Config(format!(
                    "{label}: pitch schedule times must be non-decreasing"
                )));
            }
        }
        if let Some(polar) = &self.airfoil {
            polar.validate()?;
        } else if self.wing_type == WingType::FixedWing {
            return Err(LiftlineError::Config(format!(
                "{label}: FixedWing requires an airfoil polar"
            )));
        }
        if let Some(fllc) = &self.fllc {
            if !(fllc.relaxation > 0.0 && fllc.relaxation <= 1.0) {
                return Err(LiftlineError::Config(format!(
                    "{label}: fllc relaxation must be in (0, 1], got {}",
                    fllc.relaxation
                )));
            }
            let eps_chord = fllc.epsilon_chord.unwrap_or(self.epsilon_chord[0]);
            if !(eps_chord > 0.0) {
                return Err(LiftlineError::Config(format!(
                    "{label}: fllc needs a positive epsilon_chord, got {eps_chord}"
                )));
            }
        }
        Ok(())
    }

    /// Chord at point `i`, broadcasting a single value.
    pub fn chord_at(&self, i: usize) -> f64 {
        if self.chord.len() == 1 {
            self.chord[0]
        } else {
            self.chord[i]
        }
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> LiftlineResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LiftlineError::Config(format!("JSON parse error: {e}")))
    }
}

impl PolarConfig {
    pub fn validate(&self) -> LiftlineResult<()> {
        if self.aoa.is_empty() {
            return Err(LiftlineError::Config("airfoil polar is empty".to_string()));
        }
        for (what, column) in [("polar cl", &self.cl), ("polar cd", &self.cd)] {
            if column.len() != self.aoa.len() {
                return Err(LiftlineError::InvalidTableLengths {
                    what,
                    expected: self.aoa.len(),
                    actual: column.len(),
                });
            }
        }
        Ok(())
    }
}
