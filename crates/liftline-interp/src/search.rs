// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Sorted-Table Search
// Mirrors: amr-wind/utilities/linear_interpolation.H (check_bounds, bisection_search, find_index)
// ─────────────────────────────────────────────────────────────────────
//! Locate the bracketing interval of a query in a non-decreasing table.
//!
//! Two strategies share one bounds classification:
//! - `bisection_search` for isolated queries, O(log n).
//! - `find_index` for monotone query sweeps: scanning from a hint makes a
//!   full pass amortized O(n + m).

use liftline_types::{LiftlineError, LiftlineResult};

/// Where a query falls relative to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limits {
    /// Below the first entry, or the table has fewer than two points.
    BelowRange,
    /// Above the last entry.
    AboveRange,
    /// Bracketed by `x[idx]` and `x[idx + 1]`.
    Valid,
}

/// Search result.
///
/// For `Valid`, `idx <= len - 2`. For the out-of-range classes `idx` is
/// the boundary index (0 or `len - 1`) whose ordinate is returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index {
    pub idx: usize,
    pub lim: Limits,
}

impl Index {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lim == Limits::Valid
    }
}

/// Classify `x` against the table end points.
#[inline]
pub fn check_bounds(xs: &[f64], x: f64) -> Index {
    let n = xs.len();
    if n < 2 || x < xs[0] {
        return Index {
            idx: 0,
            lim: Limits::BelowRange,
        };
    }
    if x > xs[n - 1] {
        return Index {
            idx: n - 1,
            lim: Limits::AboveRange,
        };
    }
    Index {
        idx: 0,
        lim: Limits::Valid,
    }
}

/// Bisection search for the lower bracketing index of `x`.
#[inline]
pub fn bisection_search(xs: &[f64], x: f64) -> Index {
    let mut idx = check_bounds(xs, x);
    if !idx.is_valid() {
        return idx;
    }

    let mut il = 0usize;
    let mut ir = xs.len();
    let xl = xs[0];

    while ir - il > 1 {
        let mid = (il + ir) >> 1;
        if (x - xs[mid]) * (x - xl) <= 0.0 {
            ir = mid;
        } else {
            il = mid;
        }
    }
    // NaN queries walk right to the last index; keep the bracket in range
    // and let the NaN propagate through the blend instead.
    idx.idx = il.min(xs.len() - 2);
    idx
}

/// Linear scan for the lower bracketing index, starting at `hint`.
///
/// Pass `hint = 1` for the first query of an increasing sweep and
/// `previous.idx + 1` afterwards. Out-of-order queries still return an
/// in-bounds index, though not necessarily the tightest bracket.
#[inline]
pub fn find_index(xs: &[f64], x: f64, hint: usize) -> LiftlineResult<Index> {
    let mut idx = check_bounds(xs, x);
    if !idx.is_valid() {
        return Ok(idx);
    }

    let n = xs.len();
    let start = hint.clamp(1, n - 1);
    match xs[start..].iter().position(|&xi| x <= xi) {
        Some(offset) => {
            idx.idx = start + offset - 1;
            Ok(idx)
        }
        None => Err(LiftlineError::UnreachableSearchState { query: x }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

    #[test]
    fn test_degenerate_table_is_below_range() {
        assert_eq!(check_bounds(&[], 1.0).lim, Limits::BelowRange);
        let idx = check_bounds(&[5.0], 5.0);
        assert_eq!(idx, Index { idx: 0, lim: Limits::BelowRange });
    }

    #[test]
    fn test_out_of_range_classification() {
        assert_eq!(
            bisection_search(&XS, -1.0),
            Index { idx: 0, lim: Limits::BelowRange }
        );
        assert_eq!(
            bisection_search(&XS, 5.0),
            Index { idx: 3, lim: Limits::AboveRange }
        );
    }

    #[test]
    fn test_endpoints_are_valid() {
        let first = bisection_search(&XS, 0.0);
        assert_eq!(first, Index { idx: 0, lim: Limits::Valid });
        let last = bisection_search(&XS, 3.0);
        assert_eq!(last, Index { idx: 2, lim: Limits::Valid });
    }

    #[test]
    fn test_two_point_table() {
        let xs = [1.0, 2.0];
        assert_eq!(bisection_search(&xs, 1.5).idx, 0);
        assert_eq!(bisection_search(&xs, 2.0).idx, 0);
        assert_eq!(find_index(&xs, 1.5, 1).unwrap().idx, 0);
    }

    #[test]
    fn test_bisection_brackets_query() {
        let xs: Vec<f64> = (0..50).map(|i| (i as f64).powf(1.3)).collect();
        for k in 0..400 {
            let q = xs[49] * k as f64 / 399.0;
            let idx = bisection_search(&xs, q);
            assert!(idx.is_valid());
            assert!(idx.idx <= xs.len() - 2);
            assert!(xs[idx.idx] <= q && q <= xs[idx.idx + 1], "q={q} idx={}", idx.idx);
        }
    }

    #[test]
    fn test_hinted_matches_bisection_on_sweep() {
        let xs: Vec<f64> = (0..30).map(|i| 0.5 * i as f64 - 3.0 + (i as f64 * 0.3).sin()).collect();
        let mut sorted = xs.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut hint = 1;
        for k in 0..200 {
            let q = -6.0 + 0.12 * k as f64;
            let hinted = find_index(&sorted, q, hint).unwrap();
            let bisect = bisection_search(&sorted, q);
            assert_eq!(hinted, bisect, "q={q}");
            hint = hinted.idx + 1;
        }
    }

    #[test]
    fn test_hinted_with_duplicates() {
        let xs = [0.0, 1.0, 1.0, 1.0, 2.0];
        let mut hint = 1;
        for q in [0.0, 0.5, 1.0, 1.0, 1.5, 2.0] {
            let hinted = find_index(&xs, q, hint).unwrap();
            assert_eq!(hinted, bisection_search(&xs, q), "q={q}");
            hint = hinted.idx + 1;
        }
    }

    #[test]
    fn test_hinted_out_of_order_stays_in_bounds() {
        let idx = find_index(&XS, 0.5, 3).unwrap();
        assert!(idx.is_valid());
        assert!(idx.idx <= XS.len() - 2);
        // Hint past the end is clamped.
        let idx = find_index(&XS, 2.5, 99).unwrap();
        assert_eq!(idx.idx, 2);
    }

    #[test]
    fn test_hinted_nan_is_unreachable() {
        assert!(matches!(
            find_index(&XS, f64::NAN, 1),
            Err(LiftlineError::UnreachableSearchState { .. })
        ));
    }

    #[test]
    fn test_bisection_nan_stays_in_bounds() {
        let idx = bisection_search(&XS, f64::NAN);
        assert!(idx.idx <= XS.len() - 2);
    }
}
