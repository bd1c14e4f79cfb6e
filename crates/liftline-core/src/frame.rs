// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Local Blade Frame
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (blade frame in compute_forces)
// ─────────────────────────────────────────────────────────────────────

use liftline_types::{LiftlineError, LiftlineResult};

use crate::math::{unit, Mat3, Vec3, TINY};

/// Orthonormal sectional frame: x chordwise, y spanwise, z normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    pub blade_x: Vec3,
    pub blade_y: Vec3,
    pub blade_z: Vec3,
}

impl LocalFrame {
    /// Build from the span vector and a reference chordwise direction.
    ///
    /// The reference direction need not be perpendicular to the span; it
    /// is re-orthogonalized against it.
    pub fn new(span: &Vec3, reference_x: &Vec3) -> LiftlineResult<Self> {
        let blade_y = span
            .try_normalize(TINY)
            .ok_or_else(|| LiftlineError::Geometry("span has zero length".to_string()))?;
        let blade_x = unit(reference_x);
        let blade_z = blade_x.cross(&blade_y).try_normalize(TINY).ok_or_else(|| {
            LiftlineError::Geometry(
                "reference chord direction is parallel to the span".to_string(),
            )
        })?;
        let blade_x = unit(&blade_y.cross(&blade_z));
        Ok(Self {
            blade_x,
            blade_y,
            blade_z,
        })
    }

    /// Rows are the frame axes, so `matrix() * v` gives local components.
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_rows(&[
            self.blade_x.transpose(),
            self.blade_y.transpose(),
            self.blade_z.transpose(),
        ])
    }

    pub fn from_matrix(m: &Mat3) -> Self {
        Self {
            blade_x: m.row(0).transpose(),
            blade_y: m.row(1).transpose(),
            blade_z: m.row(2).transpose(),
        }
    }

    /// Chordwise/normal components of `v`; the spanwise part is dropped.
    #[inline]
    pub fn project_sectional(&self, v: &Vec3) -> Vec3 {
        Vec3::new(v.dot(&self.blade_x), 0.0, v.dot(&self.blade_z))
    }

    /// Global drag and lift unit directions for a local relative wind.
    ///
    /// Drag follows the in-plane wind; lift is `drag × span`. Both are
    /// zero when the wind vanishes.
    #[inline]
    pub fn drag_lift_dirs(&self, wind_local: &Vec3) -> (Vec3, Vec3) {
        let drag_dir = unit(&(self.blade_x * wind_local.x + self.blade_z * wind_local.z));
        let lift_dir = unit(&drag_dir.cross(&self.blade_y));
        (drag_dir, lift_dir)
    }
}
