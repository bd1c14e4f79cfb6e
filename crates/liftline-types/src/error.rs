// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Error Hierarchy
// Mirrors: amr-wind/utilities/linear_interpolation.H + wing_ops.H (failure paths)
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Liftline Kernel failures.
///
/// Out-of-range queries and tables with fewer than two points are not
/// represented here: they resolve through the flat-extrapolation policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiftlineError {
    /// Paired sequences (abscissa/ordinate, query/output) differ in length.
    #[error("invalid table lengths for {what}: expected {expected}, got {actual}")]
    InvalidTableLengths {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A search routine failed to bracket a query it had classified as valid.
    #[error("unreachable search state: query {query} could not be bracketed")]
    UnreachableSearchState { query: f64 },

    /// No implementation exists for this wing kind and source kind.
    #[error("unsupported actuator: {wing} wing with {source_kind} source")]
    UnsupportedActuator { wing: String, source_kind: String },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Degenerate wing geometry.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Numerical error (NaN/Inf in computation).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type LiftlineResult<T> = Result<T, LiftlineError>;
