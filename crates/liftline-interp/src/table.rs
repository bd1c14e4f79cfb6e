// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Ordered Table
// Mirrors: amr-wind/utilities/linear_interpolation.H (multi-column linear)
// ─────────────────────────────────────────────────────────────────────

use liftline_types::{LiftlineError, LiftlineResult};

use crate::linear::{check_lengths, eval_at};
use crate::search::{bisection_search, find_index};

/// Immutable table with one non-decreasing abscissa and any number of
/// ordinate columns. Lengths are validated once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    x: Vec<f64>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(x: Vec<f64>, columns: Vec<Vec<f64>>) -> LiftlineResult<Self> {
        if x.is_empty() {
            return Err(LiftlineError::Config("table has no entries".to_string()));
        }
        if x.windows(2).any(|w| !(w[0] <= w[1])) {
            return Err(LiftlineError::Config(
                "table abscissa must be non-decreasing and finite".to_string(),
            ));
        }
        for column in &columns {
            check_lengths("table column", x.len(), column.len())?;
        }
        Ok(Self { x, columns })
    }

    /// Single-column convenience constructor.
    pub fn single(x: Vec<f64>, y: Vec<f64>) -> LiftlineResult<Self> {
        Self::new(x, vec![y])
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Interpolate column `col` at `x`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not a column of this table.
    #[inline]
    pub fn interpolate(&self, col: usize, x: f64) -> f64 {
        let idx = bisection_search(&self.x, x);
        eval_at(&self.x, &self.columns[col], idx, x)
    }

    /// Interpolate every column at `x` with a single search.
    #[inline]
    pub fn interpolate_row(&self, x: f64, out: &mut [f64]) {
        let idx = bisection_search(&self.x, x);
        for (column, o) in self.columns.iter().zip(out.iter_mut()) {
            *o = eval_at(&self.x, column, idx, x);
        }
    }

    /// Interpolate column `col` over an increasing query sweep. An
    /// unknown column is a config error.
    pub fn interpolate_monotonic(
        &self,
        col: usize,
        xout: &[f64],
        yout: &mut [f64],
    ) -> LiftlineResult<()> {
        check_lengths("monotonic output", xout.len(), yout.len())?;
        let ys = self.columns.get(col).ok_or_else(|| {
            LiftlineError::Config(format!(
                "table column {col} out of range ({} columns)",
                self.columns.len()
            ))
        })?;
        let mut hint = 1;
        for (&x, y) in xout.iter().zip(yout.iter_mut()) {
            let idx = find_index(&self.x, x, hint)?;
            *y = eval_at(&self.x, ys, idx, x);
            hint = idx.idx + 1;
        }
        Ok(())
    }
}
