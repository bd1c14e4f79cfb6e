// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Fluid Velocity Sampling
// Mirrors: amr-wind/wind_energy/actuator/Actuator.cpp (update_velocities)
// ─────────────────────────────────────────────────────────────────────
//! Velocity sampling interface.
//!
//! The flow solver owns the velocity field; the actuator only asks for
//! values at its sampling points. Uniform inflow covers tests and
//! free-stream cases, and any field function can be plugged in through
//! `ExternalSampler`.

use crate::math::Vec3;

/// Trait for fluid velocity providers.
pub trait VelocitySampler: Send + Sync {
    /// Write the fluid velocity at each of `points` into `out`.
    /// Both slices have the same length.
    fn sample(&self, points: &[Vec3], out: &mut [Vec3]);
}

/// Spatially constant velocity field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformInflow {
    pub velocity: Vec3,
}

impl UniformInflow {
    pub fn new(velocity: Vec3) -> Self {
        Self { velocity }
    }
}

impl VelocitySampler for UniformInflow {
    fn sample(&self, _points: &[Vec3], out: &mut [Vec3]) {
        out.fill(self.velocity);
    }
}

type FieldFn = Box<dyn Fn(&Vec3) -> Vec3 + Send + Sync>;

/// Velocity field evaluated point by point through a closure.
pub struct ExternalSampler {
    field: FieldFn,
}

impl ExternalSampler {
    pub fn new(field: impl Fn(&Vec3) -> Vec3 + Send + Sync + 'static) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl VelocitySampler for ExternalSampler {
    fn sample(&self, points: &[Vec3], out: &mut [Vec3]) {
        for (v, p) in out.iter_mut().zip(points) {
            *v = (self.field)(p);
        }
    }
}
