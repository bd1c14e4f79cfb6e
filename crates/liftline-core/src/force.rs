// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Force Assembly
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (compute_forces)
// ─────────────────────────────────────────────────────────────────────
//! Sectional lift and drag per actuator point.
//!
//! Each point is independent: the relative wind, angle of attack and
//! force of point `i` only read slot `i` of the grid. Totals are summed
//! afterwards in index order so results do not depend on scheduling.

use liftline_interp::AirfoilLookup;
use liftline_types::{LiftlineError, LiftlineResult};

use crate::frame::LocalFrame;
use crate::grid::ActuatorGrid;
use crate::math::{Vec3, TINY};
use crate::time::SimTime;
use crate::wing::WingData;

/// Loads and diagnostics for one actuator point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLoad {
    /// Force on the fluid.
    pub force: Vec3,
    /// Relative wind in the local frame.
    pub vel_rel: Vec3,
    pub aoa_deg: f64,
    pub cl: f64,
    pub cd: f64,
    pub lift: f64,
    pub drag: f64,
}

/// Evaluate one section from its sampled velocity.
///
/// `pitch` is in radians and added to the geometric angle of attack.
#[inline]
pub fn section_load(
    frame: &LocalFrame,
    vel: &Vec3,
    vel_tr: &Vec3,
    pitch: f64,
    chord: f64,
    dx: f64,
    airfoil: &dyn AirfoilLookup,
) -> SectionLoad {
    let wind = frame.project_sectional(&(vel - vel_tr));
    let vmag = wind.norm();
    let aoa = wind.z.atan2(wind.x) + pitch;
    let (cl, cd) = airfoil.lookup(aoa);

    let q = 0.5 * vmag * vmag * chord * dx;
    let lift = q * cl;
    let drag = q * cd;
    let (drag_dir, lift_dir) = frame.drag_lift_dirs(&wind);

    SectionLoad {
        force: -(lift_dir * lift + drag_dir * drag),
        vel_rel: wind,
        aoa_deg: aoa.to_degrees(),
        cl,
        cd,
        lift,
        drag,
    }
}

/// Advance the wing to the new time and assemble forces on every point.
///
/// Also performs the one-time activation of the lifting-line correction
/// once the current time passes its start time.
pub fn compute_forces(
    meta: &mut WingData,
    grid: &mut ActuatorGrid,
    airfoil: &dyn AirfoilLookup,
    time: &SimTime,
) -> LiftlineResult<()> {
    let npts = meta.num_pts;
    meta.vel_tr = meta
        .motion
        .advance(&mut grid.pos, time.current_time, time.new_time);

    let pitch = meta.pitch.at(time.current_time);
    log::trace!("wing '{}': pitch {:.4} deg", meta.label, pitch.to_degrees());

    let frame = &meta.frame;
    let vel_tr = meta.vel_tr;
    let (vel, chord, dx) = (&grid.vel, &grid.chord, &grid.dx);
    let eval = |i: usize| section_load(frame, &vel[i], &vel_tr, pitch, chord[i], dx[i], airfoil);

    #[cfg(feature = "parallel")]
    let loads: Vec<SectionLoad> = {
        use rayon::prelude::*;
        (0..npts).into_par_iter().map(eval).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let loads: Vec<SectionLoad> = (0..npts).map(eval).collect();

    // Index-order reduction; nothing is written back unless it is finite.
    let (lift, drag) = loads
        .iter()
        .fold((0.0_f64, 0.0_f64), |(l, d), load| (l + load.lift, d + load.drag));
    if !(lift.is_finite() && drag.is_finite()) {
        return Err(LiftlineError::Numerical(format!(
            "wing '{}': non-finite totals (lift={lift}, drag={drag}) at t={}",
            meta.label, time.new_time
        )));
    }

    let orientation = meta.frame.matrix();
    let mut calm = 0usize;
    for (i, load) in loads.iter().enumerate() {
        grid.force[i] = load.force;
        grid.vel_rel[i] = load.vel_rel;
        grid.orientation[i] = orientation;
        meta.aoa[i] = load.aoa_deg;
        meta.cl[i] = load.cl;
        meta.cd[i] = load.cd;
        if load.vel_rel.norm() < TINY {
            calm += 1;
        }
    }
    if calm > 0 {
        log::warn!("wing '{}': {calm} points with zero relative wind", meta.label);
    }
    meta.lift = lift;
    meta.drag = drag;
    log::debug!(
        "wing '{}' step {}: lift {:.6e} drag {:.6e}",
        meta.label,
        time.time_index,
        lift,
        drag
    );

    let view = grid.component_view();
    meta.fllc.maybe_initialize(time.current_time, &view);
    Ok(())
}
