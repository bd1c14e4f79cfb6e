// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Prescribed Wing Kinematics
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (update_pos, update_vel)
// ─────────────────────────────────────────────────────────────────────
//! Advances force points from time n to n+1 and reports the rigid
//! translational velocity of the wing over that interval.

use std::f64::consts::TAU;

use liftline_types::MotionConfig;

use crate::math::{vec3, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    None,
    Linear { velocity: Vec3 },
    Sine { period: f64, amplitude: Vec3 },
}

impl From<&MotionConfig> for Motion {
    fn from(config: &MotionConfig) -> Self {
        match *config {
            MotionConfig::None => Motion::None,
            MotionConfig::Linear { velocity } => Motion::Linear {
                velocity: vec3(velocity),
            },
            MotionConfig::Sine { period, amplitude } => Motion::Sine {
                period,
                amplitude: vec3(amplitude),
            },
        }
    }
}

impl Motion {
    /// Move `points` from `tn` to `tnp1` and return the body velocity.
    ///
    /// For periodic motion the velocity is the finite-difference rate of
    /// the displacement; with `tnp1 <= tn` nothing moves and it is zero.
    pub fn advance(&self, points: &mut [Vec3], tn: f64, tnp1: f64) -> Vec3 {
        match *self {
            Motion::None => Vec3::zeros(),
            Motion::Linear { velocity } => {
                let dt = tnp1 - tn;
                for p in points.iter_mut() {
                    *p += velocity * dt;
                }
                velocity
            }
            Motion::Sine { period, amplitude } => {
                let dt = tnp1 - tn;
                if dt <= 0.0 {
                    return Vec3::zeros();
                }
                let disp = amplitude * ((TAU * tnp1 / period).sin() - (TAU * tn / period).sin());
                for p in points.iter_mut() {
                    *p += disp;
                }
                disp / dt
            }
        }
    }
}

/// Put the velocity sampling points at the current force points.
pub fn refresh_positions(vel_pos: &mut [Vec3], pos: &[Vec3], npts: usize) {
    vel_pos[..npts].copy_from_slice(&pos[..npts]);
}
