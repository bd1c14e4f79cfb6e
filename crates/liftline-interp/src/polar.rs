// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Airfoil Polar Lookup
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (airfoil lookup)
// ─────────────────────────────────────────────────────────────────────
//! Sectional lift/drag coefficients as a function of angle of attack.
//!
//! `AirfoilLookup` is the single-variable seam the force kernel calls;
//! richer polar models (Reynolds-number blending, dynamic stall) plug in
//! behind the same trait.

use std::f64::consts::PI;

use liftline_types::{LiftlineResult, PolarConfig};

use crate::table::Table;

const CL: usize = 0;
const CD: usize = 1;

/// Maps angle of attack (radians) to `(cl, cd)`.
pub trait AirfoilLookup: Send + Sync {
    fn lookup(&self, aoa: f64) -> (f64, f64);
}

/// Tabulated polar with flat extrapolation beyond the tabulated angles.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilTable {
    table: Table,
}

impl AirfoilTable {
    /// Build from angles in radians.
    pub fn new(aoa: Vec<f64>, cl: Vec<f64>, cd: Vec<f64>) -> LiftlineResult<Self> {
        Ok(Self {
            table: Table::new(aoa, vec![cl, cd])?,
        })
    }

    /// Build from angles in degrees.
    pub fn from_degrees(aoa_deg: &[f64], cl: Vec<f64>, cd: Vec<f64>) -> LiftlineResult<Self> {
        let aoa = aoa_deg.iter().map(|a| a.to_radians()).collect();
        Self::new(aoa, cl, cd)
    }

    pub fn from_config(polar: &PolarConfig) -> LiftlineResult<Self> {
        polar.validate()?;
        let table = Self::from_degrees(&polar.aoa, polar.cl.clone(), polar.cd.clone())?;
        log::debug!(
            "airfoil table: {} entries, aoa [{:.1}, {:.1}] deg",
            polar.aoa.len(),
            polar.aoa[0],
            polar.aoa[polar.aoa.len() - 1]
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Tabulated angles (radians).
    pub fn aoa(&self) -> &[f64] {
        self.table.x()
    }
}

impl AirfoilLookup for AirfoilTable {
    #[inline]
    fn lookup(&self, aoa: f64) -> (f64, f64) {
        let mut row = [0.0; 2];
        self.table.interpolate_row(aoa, &mut row);
        (row[CL], row[CD])
    }
}

/// Thin-airfoil theory: `cl = 2π·aoa`, no drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinAirfoil {
    pub lift_slope: f64,
}

impl Default for ThinAirfoil {
    fn default() -> Self {
        Self { lift_slope: 2.0 * PI }
    }
}

impl AirfoilLookup for ThinAirfoil {
    #[inline]
    fn lookup(&self, aoa: f64) -> (f64, f64) {
        (self.lift_slope * aoa, 0.0)
    }
}
