// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Actuator Wing
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (init_data_structures)
// ─────────────────────────────────────────────────────────────────────
//! One lifting body: configuration-derived metadata, its point grid and
//! the sectional aerodynamics model selected by wing and source kind.

use liftline_interp::{AirfoilLookup, AirfoilTable, Table, ThinAirfoil};
use liftline_types::{
    LiftlineError, LiftlineResult, SourceType, WingConfig, WingOutputRecord, WingType,
};

use crate::fllc::FllcStage;
use crate::force;
use crate::frame::LocalFrame;
use crate::grid::ActuatorGrid;
use crate::math::{to_array, vec3, Vec3};
use crate::motion::{self, Motion};
use crate::source;
use crate::time::SimTime;

/// Pitch offset added to the geometric angle of attack.
#[derive(Debug, Clone, PartialEq)]
pub enum PitchControl {
    /// Constant pitch (radians).
    Fixed(f64),
    /// Pitch interpolated in time, clamped outside the schedule. The
    /// tabulated values are used as given (radians).
    Schedule(Table),
}

impl PitchControl {
    fn from_config(config: &WingConfig) -> LiftlineResult<Self> {
        match &config.pitch_schedule {
            Some(schedule) if !schedule.time.is_empty() => Ok(PitchControl::Schedule(
                Table::single(schedule.time.clone(), schedule.pitch.clone())?,
            )),
            _ => Ok(PitchControl::Fixed(config.pitch.to_radians())),
        }
    }

    /// Pitch (radians) at time `t`.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        match self {
            PitchControl::Fixed(p) => *p,
            PitchControl::Schedule(table) => table.interpolate(0, t),
        }
    }
}

/// Per-wing configuration and per-step state.
#[derive(Debug)]
pub struct WingData {
    pub label: String,
    pub num_pts: usize,
    pub start: Vec3,
    pub end: Vec3,
    pub frame: LocalFrame,
    pub motion: Motion,
    /// Translational velocity of the wing over the last step.
    pub vel_tr: Vec3,
    pub pitch: PitchControl,
    pub epsilon_chord: Vec3,
    /// Angle of attack per point (degrees).
    pub aoa: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
    pub lift: f64,
    pub drag: f64,
    pub fllc: FllcStage,
}

/// A wing plus its grid and airfoil model.
pub struct ActuatorWing {
    pub meta: WingData,
    pub grid: ActuatorGrid,
    airfoil: Box<dyn AirfoilLookup>,
}

/// Pick the sectional model for a wing kind and source kind.
pub fn airfoil_for(config: &WingConfig) -> LiftlineResult<Box<dyn AirfoilLookup>> {
    match (config.wing_type, config.source) {
        (WingType::FixedWing, SourceType::Line) => {
            let polar = config.airfoil.as_ref().ok_or_else(|| {
                LiftlineError::Config(format!("{}: FixedWing requires an airfoil polar", config.label))
            })?;
            Ok(Box::new(AirfoilTable::from_config(polar)?))
        }
        (WingType::FlatPlate, SourceType::Line) => Ok(Box::new(ThinAirfoil::default())),
        (wing, source) => Err(LiftlineError::UnsupportedActuator {
            wing: format!("{wing:?}"),
            source_kind: format!("{source:?}"),
        }),
    }
}

impl ActuatorWing {
    pub fn new(config: &WingConfig) -> LiftlineResult<Self> {
        let airfoil = airfoil_for(config)?;
        Self::with_airfoil(config, airfoil)
    }

    /// Build with a caller-supplied sectional model. The configured wing
    /// kind is not consulted for dispatch.
    pub fn with_airfoil(
        config: &WingConfig,
        airfoil: Box<dyn AirfoilLookup>,
    ) -> LiftlineResult<Self> {
        config.validate()?;
        let npts = config.num_points;
        let start = vec3(config.start);
        let end = vec3(config.end);
        let frame = LocalFrame::new(&(end - start), &vec3(config.blade_x))?;
        let epsilon_chord = vec3(config.epsilon_chord);
        let grid = init_grid(config, &start, &end, &epsilon_chord);

        let meta = WingData {
            label: config.label.clone(),
            num_pts: npts,
            start,
            end,
            frame,
            motion: Motion::from(&config.motion),
            vel_tr: Vec3::zeros(),
            pitch: PitchControl::from_config(config)?,
            epsilon_chord,
            aoa: vec![0.0; npts],
            cl: vec![0.0; npts],
            cd: vec![0.0; npts],
            lift: 0.0,
            drag: 0.0,
            fllc: FllcStage::from_config(config.fllc.as_ref(), config.epsilon_chord[0]),
        };
        log::info!(
            "wing '{}': {} points, span {:.4}, fllc {}",
            meta.label,
            npts,
            (end - start).norm(),
            if meta.fllc.is_enabled() { "on" } else { "off" }
        );

        Ok(Self {
            meta,
            grid,
            airfoil,
        })
    }

    pub fn label(&self) -> &str {
        &self.meta.label
    }

    pub fn num_points(&self) -> usize {
        self.meta.num_pts
    }

    pub fn airfoil(&self) -> &dyn AirfoilLookup {
        self.airfoil.as_ref()
    }

    /// Move the velocity sample points to the settled (time n) force points.
    pub fn update_positions(&mut self) {
        motion::refresh_positions(&mut self.grid.vel_pos, &self.grid.pos, self.meta.num_pts);
    }

    /// Take freshly sampled fluid velocities and apply the lifting-line
    /// correction if it is active.
    pub fn update_velocities(&mut self, sampled: &[Vec3]) -> LiftlineResult<()> {
        if sampled.len() != self.meta.num_pts {
            return Err(LiftlineError::InvalidTableLengths {
                what: "sampled velocity",
                expected: self.meta.num_pts,
                actual: sampled.len(),
            });
        }
        self.grid.vel.copy_from_slice(sampled);
        if self.meta.fllc.is_initialized() {
            let mut view = self.grid.component_view();
            self.meta.fllc.apply(&mut view)?;
        }
        Ok(())
    }

    pub fn compute_forces(&mut self, time: &SimTime) -> LiftlineResult<()> {
        force::compute_forces(&mut self.meta, &mut self.grid, self.airfoil.as_ref(), time)
    }

    /// Body-force density this wing contributes at `point`.
    pub fn source_term_at(&self, point: &Vec3) -> Vec3 {
        source::line_source_at(&self.grid, point)
    }

    pub fn output_record(&self, time: &SimTime) -> WingOutputRecord {
        WingOutputRecord {
            label: self.meta.label.clone(),
            time: time.new_time,
            time_index: time.time_index,
            lift: self.meta.lift,
            drag: self.meta.drag,
            aoa: self.meta.aoa.clone(),
            cl: self.meta.cl.clone(),
            cd: self.meta.cd.clone(),
            vel_rel: self.grid.vel_rel.iter().map(to_array).collect(),
            force: self.grid.force.iter().map(to_array).collect(),
        }
    }
}

/// Evenly spaced points from `start` to `end` inclusive. End points
/// represent half a segment so the segment lengths sum to the span.
fn init_grid(config: &WingConfig, start: &Vec3, end: &Vec3, epsilon_chord: &Vec3) -> ActuatorGrid {
    let npts = config.num_points;
    let mut grid = ActuatorGrid::new(npts);
    let seg = (end - start) / (npts - 1) as f64;
    let ds = seg.norm();
    let eps = vec3(config.epsilon);

    for i in 0..npts {
        let chord = config.chord_at(i);
        grid.pos[i] = start + seg * i as f64;
        grid.vel_pos[i] = grid.pos[i];
        grid.chord[i] = chord;
        grid.epsilon[i] = eps.zip_map(&(epsilon_chord * chord), f64::max);
        grid.dx[i] = if i == 0 || i == npts - 1 { 0.5 * ds } else { ds };
    }
    grid
}
