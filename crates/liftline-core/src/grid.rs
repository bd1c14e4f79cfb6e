// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Actuator Point Grid
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (make_component_view)
// ─────────────────────────────────────────────────────────────────────
//! Parallel per-point arrays for one wing. All arrays share one length
//! and one point ordering (root to tip) for the life of the wing.

use crate::math::{Mat3, Vec3};

#[derive(Debug, Clone)]
pub struct ActuatorGrid {
    /// Force point positions.
    pub pos: Vec<Vec3>,
    /// Where the fluid velocity is sampled.
    pub vel_pos: Vec<Vec3>,
    /// Sampled fluid velocity (plus any FLLC correction).
    pub vel: Vec<Vec3>,
    /// Force exerted on the fluid.
    pub force: Vec<Vec3>,
    /// Anisotropic smoothing radius in the local frame.
    pub epsilon: Vec<Vec3>,
    /// Rows are the local chordwise, spanwise and normal unit vectors.
    pub orientation: Vec<Mat3>,
    pub chord: Vec<f64>,
    /// Spanwise segment length represented by each point.
    pub dx: Vec<f64>,
    /// Relative wind in the local frame; spanwise component is zero.
    pub vel_rel: Vec<Vec3>,
}

impl ActuatorGrid {
    pub fn new(num_pts: usize) -> Self {
        Self {
            pos: vec![Vec3::zeros(); num_pts],
            vel_pos: vec![Vec3::zeros(); num_pts],
            vel: vec![Vec3::zeros(); num_pts],
            force: vec![Vec3::zeros(); num_pts],
            epsilon: vec![Vec3::zeros(); num_pts],
            orientation: vec![Mat3::identity(); num_pts],
            chord: vec![0.0; num_pts],
            dx: vec![0.0; num_pts],
            vel_rel: vec![Vec3::zeros(); num_pts],
        }
    }

    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Borrow the live arrays the lifting-line correction works on.
    pub fn component_view(&mut self) -> ComponentView<'_> {
        ComponentView {
            pos: &self.pos,
            vel_pos: &self.vel_pos,
            vel: &mut self.vel,
            force: &self.force,
            epsilon: &self.epsilon,
            orientation: &self.orientation,
            chord: &self.chord,
            dx: &self.dx,
            vel_rel: &self.vel_rel,
        }
    }
}

/// Borrowed view over a wing's grid. Only the sampled velocity is
/// writable; everything else is observed as the force kernel left it.
pub struct ComponentView<'a> {
    pub pos: &'a [Vec3],
    pub vel_pos: &'a [Vec3],
    pub vel: &'a mut [Vec3],
    pub force: &'a [Vec3],
    pub epsilon: &'a [Vec3],
    pub orientation: &'a [Mat3],
    pub chord: &'a [f64],
    pub dx: &'a [f64],
    pub vel_rel: &'a [Vec3],
}

impl ComponentView<'_> {
    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }
}
