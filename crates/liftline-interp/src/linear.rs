// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Piecewise-Linear Interpolation
// Mirrors: amr-wind/utilities/linear_interpolation.H (linear, linear_monotonic)
// ─────────────────────────────────────────────────────────────────────
//! Piecewise-linear interpolation over sorted tables.
//!
//! Out-of-range queries return the boundary ordinate unmodified (flat
//! extrapolation). Near-duplicate abscissas (spacing <= `DENOM_EPS`)
//! snap to the upper sample instead of dividing by a tiny denominator.
//! An empty table yields NaN.

use liftline_types::{LiftlineError, LiftlineResult};

use crate::search::{bisection_search, find_index, Index};

/// Abscissa spacing below which the upper sample is taken.
pub const DENOM_EPS: f64 = 1.0e-8;

#[inline]
pub(crate) fn check_lengths(what: &'static str, expected: usize, actual: usize) -> LiftlineResult<()> {
    if expected != actual {
        return Err(LiftlineError::InvalidTableLengths {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Evaluate at a classified index. Caller guarantees `xs.len() == ys.len()`.
#[inline]
pub(crate) fn eval_at(xs: &[f64], ys: &[f64], idx: Index, x: f64) -> f64 {
    if ys.is_empty() {
        return f64::NAN;
    }
    if !idx.is_valid() {
        return ys[idx.idx];
    }
    let j = idx.idx;
    let denom = xs[j + 1] - xs[j];
    let fac_r = if denom > DENOM_EPS {
        (x - xs[j]) / denom
    } else {
        1.0
    };
    let fac_l = 1.0 - fac_r;
    fac_l * ys[j] + fac_r * ys[j + 1]
}

/// Interpolate a single query.
#[inline]
pub fn linear(xs: &[f64], ys: &[f64], x: f64) -> LiftlineResult<f64> {
    check_lengths("linear table", xs.len(), ys.len())?;
    Ok(eval_at(xs, ys, bisection_search(xs, x), x))
}

/// Interpolate an increasing sequence of queries in one sweep.
///
/// Uses the hinted scan so a full pass costs O(len(xs) + len(xout)).
pub fn linear_monotonic(
    xs: &[f64],
    ys: &[f64],
    xout: &[f64],
    yout: &mut [f64],
) -> LiftlineResult<()> {
    check_lengths("monotonic table", xs.len(), ys.len())?;
    check_lengths("monotonic output", xout.len(), yout.len())?;

    let mut hint = 1;
    for (&x, y) in xout.iter().zip(yout.iter_mut()) {
        let idx = find_index(xs, x, hint)?;
        *y = eval_at(xs, ys, idx, x);
        hint = idx.idx + 1;
    }
    Ok(())
}

/// Interpolate arbitrary (unordered) queries, one bisection each.
pub fn linear_each(
    xs: &[f64],
    ys: &[f64],
    xout: &[f64],
    yout: &mut [f64],
) -> LiftlineResult<()> {
    check_lengths("table", xs.len(), ys.len())?;
    check_lengths("output", xout.len(), yout.len())?;

    for (&x, y) in xout.iter().zip(yout.iter_mut()) {
        *y = eval_at(xs, ys, bisection_search(xs, x), x);
    }
    Ok(())
}
