// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Vector Aliases
// ─────────────────────────────────────────────────────────────────────

use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Mat3 = na::Matrix3<f64>;

/// Norms below this are treated as zero when normalizing.
pub const TINY: f64 = 1e-10;

#[inline]
pub fn vec3(a: [f64; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

#[inline]
pub fn to_array(v: &Vec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

/// Unit vector, or zero when `v` is (numerically) zero.
#[inline]
pub fn unit(v: &Vec3) -> Vec3 {
    v.try_normalize(TINY).unwrap_or_else(Vec3::zeros)
}
