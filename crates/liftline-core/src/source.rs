// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Line-Source Projection
// Mirrors: amr-wind/wind_energy/actuator/Actuator.cpp (compute_source_term)
// ─────────────────────────────────────────────────────────────────────
//! Smearing of point forces onto the fluid as a body-force density.
//!
//! Each actuator point spreads its force with an anisotropic Gaussian
//! expressed in the point's local frame. The kernel integrates to one,
//! so the total momentum source equals the total force.

use std::f64::consts::PI;

use crate::grid::ActuatorGrid;
use crate::math::Vec3;

/// Normalized anisotropic Gaussian at local offset `d`.
#[inline]
pub fn gaussian_3d(d: &Vec3, eps: &Vec3) -> f64 {
    let arg = (d.x / eps.x).powi(2) + (d.y / eps.y).powi(2) + (d.z / eps.z).powi(2);
    (-arg).exp() / (PI.powf(1.5) * eps.x * eps.y * eps.z)
}

/// Body-force density at `point` from every point of `grid`.
pub fn line_source_at(grid: &ActuatorGrid, point: &Vec3) -> Vec3 {
    let mut src = Vec3::zeros();
    for i in 0..grid.len() {
        let d = grid.orientation[i] * (point - grid.pos[i]);
        src += grid.force[i] * gaussian_3d(&d, &grid.epsilon[i]);
    }
    src
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::LocalFrame;

    #[test]
    fn test_gaussian_integrates_to_one() {
        let eps = Vec3::new(0.5, 0.3, 0.4);
        let h = 0.05;
        let n = 60;
        let mut total = 0.0;
        for i in -n..=n {
            for j in -n..=n {
                for k in -n..=n {
                    let d = Vec3::new(i as f64 * h, j as f64 * h, k as f64 * h);
                    total += gaussian_3d(&d, &eps);
                }
            }
        }
        total *= h * h * h;
        assert!((total - 1.0).abs() < 1e-6, "integral = {total}");
    }

    #[test]
    fn test_peak_value() {
        let eps = Vec3::new(1.0, 2.0, 0.5);
        let expected = 1.0 / (PI.powf(1.5) * 1.0);
        assert!((gaussian_3d(&Vec3::zeros(), &eps) - expected).abs() < 1e-14);
    }

    #[test]
    fn test_anisotropy_follows_local_frame() {
        // Chord along global z: the wide chordwise radius applies to z.
        let frame = LocalFrame::new(&Vec3::y(), &Vec3::z()).unwrap();
        let mut grid = ActuatorGrid::new(1);
        grid.force[0] = Vec3::new(0.0, 0.0, -2.0);
        grid.epsilon[0] = Vec3::new(1.0, 0.2, 0.2);
        grid.orientation[0] = frame.matrix();

        let along_chord = line_source_at(&grid, &Vec3::new(0.0, 0.0, 0.5));
        let across = line_source_at(&grid, &Vec3::new(0.5, 0.0, 0.0));
        assert!(along_chord.z < across.z, "{along_chord} vs {across}");
        assert!(along_chord.x.abs() < 1e-15);
    }

    #[test]
    fn test_sources_superpose() {
        let mut grid = ActuatorGrid::new(2);
        grid.pos[1] = Vec3::new(0.0, 1.0, 0.0);
        grid.force = vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(-3.0, 0.0, 0.0)];
        grid.epsilon = vec![Vec3::new(0.4, 0.4, 0.4); 2];
        let p = Vec3::new(0.1, 0.3, 0.0);
        let s = line_source_at(&grid, &p);
        let g0 = gaussian_3d(&p, &grid.epsilon[0]);
        let g1 = gaussian_3d(&(p - grid.pos[1]), &grid.epsilon[1]);
        assert!((s.x - (-g0 - 3.0 * g1)).abs() < 1e-14);
    }
}
