// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Table Interpolation Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Sorted-table search, piecewise-linear interpolation and airfoil
//! polar lookup.
//!
//! # Clamp policy
//!
//! 1. **Flat extrapolation**: queries outside `[x[0], x[last]]` return the
//!    boundary ordinate unmodified. Tables with fewer than two points
//!    always return their first ordinate.
//!
//! 2. **No near-zero division**: bracketing abscissas closer than
//!    `DENOM_EPS` snap to the upper sample.
//!
//! 3. **Structural violations are errors**: mismatched column lengths
//!    return `InvalidTableLengths`; a query the hinted scan cannot bracket
//!    returns `UnreachableSearchState`.

pub mod linear;
pub mod polar;
pub mod search;
pub mod table;

pub use linear::{linear, linear_each, linear_monotonic, DENOM_EPS};
pub use polar::{AirfoilLookup, AirfoilTable, ThinAirfoil};
pub use search::{bisection_search, check_bounds, find_index, Index, Limits};
pub use table::Table;
