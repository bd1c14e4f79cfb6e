// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Filtered Lifting-Line Correction
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (fllc init + correction)
// ─────────────────────────────────────────────────────────────────────
//! Tip/root correction for smeared actuator lines.
//!
//! The fluid solver resolves the wake of each point with the LES
//! smoothing radius, which under-predicts the induced velocity near
//! the tips. The correction evaluates the induced velocity of the
//! discrete trailing vortex sheet twice, once with the optimal radius
//! and once with the LES radius, and adds the (relaxed) difference to
//! the sampled velocity along the local lift direction.
//!
//! Activation is lazy: a wing carries an [`FllcStage`] that moves from
//! `Uninitialized` to `Initialized` once, on the first step whose
//! current time exceeds the configured start time.

use std::f64::consts::PI;

use liftline_types::{FllcConfig, LiftlineError, LiftlineResult};

use crate::frame::LocalFrame;
use crate::grid::ComponentView;
use crate::math::{Vec3, TINY};

/// Separation below which a trailing vortex does not act on a point.
const CORE_CUTOFF: f64 = 1e-12;

/// Initialized correction state for one wing.
#[derive(Debug, Clone)]
pub struct Fllc {
    relaxation: f64,
    eps_opt: Vec<f64>,
    eps_les: Vec<f64>,
    correction: Vec<f64>,
    residual: f64,
    iterations: usize,
}

impl Fllc {
    /// Size the correction for the wing seen through `view`.
    pub fn new(config: &FllcConfig, epsilon_chord: f64, view: &ComponentView<'_>) -> Self {
        let n = view.len();
        Self {
            relaxation: config.relaxation,
            eps_opt: view.chord.iter().map(|c| epsilon_chord * c).collect(),
            eps_les: view.epsilon.iter().map(|e| e.x).collect(),
            correction: vec![0.0; n],
            residual: 0.0,
            iterations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.correction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.correction.is_empty()
    }

    /// Current relaxed correction per point, along the lift direction.
    pub fn correction(&self) -> &[f64] {
        &self.correction
    }

    /// Largest change of the correction in the last update.
    pub fn residual(&self) -> f64 {
        self.residual
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Relax the correction toward its target and add it to `view.vel`.
    pub fn apply(&mut self, view: &mut ComponentView<'_>) -> LiftlineResult<()> {
        let n = self.len();
        if view.len() != n || view.vel.len() != n {
            return Err(LiftlineError::InvalidTableLengths {
                what: "fllc view",
                expected: n,
                actual: view.len(),
            });
        }
        if n == 0 {
            log::warn!("fllc: empty correction view, nothing to correct");
            return Ok(());
        }

        let span_dir = LocalFrame::from_matrix(&view.orientation[0]).blade_y;
        let span: Vec<f64> = view.pos.iter().map(|p| (p - view.pos[0]).dot(&span_dir)).collect();

        let mut lift_dirs: Vec<Vec3> = Vec::with_capacity(n);
        let mut gamma = Vec::with_capacity(n);
        for i in 0..n {
            let frame = LocalFrame::from_matrix(&view.orientation[i]);
            let (_, lift_dir) = frame.drag_lift_dirs(&view.vel_rel[i]);
            let lift = -view.force[i].dot(&lift_dir);
            let denom = view.vel_rel[i].norm() * view.dx[i];
            gamma.push(if denom > TINY { lift / denom } else { 0.0 });
            lift_dirs.push(lift_dir);
        }

        let (bounds, strengths) = trailing_vortices(&span, &gamma);

        let mut residual = 0.0_f64;
        for i in 0..n {
            let target = induced_velocity(span[i], self.eps_opt[i], &bounds, &strengths)
                - induced_velocity(span[i], self.eps_les[i], &bounds, &strengths);
            let updated = (1.0 - self.relaxation) * self.correction[i] + self.relaxation * target;
            residual = residual.max((updated - self.correction[i]).abs());
            self.correction[i] = updated;
            view.vel[i] += lift_dirs[i] * updated;
        }
        self.residual = residual;
        self.iterations += 1;
        log::debug!("fllc: iteration {} residual {:.3e}", self.iterations, residual);
        Ok(())
    }
}

/// Boundaries between segments (tips included) and the strength of the
/// vortex trailed at each one. Circulation is zero outside the wing.
fn trailing_vortices(span: &[f64], gamma: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = span.len();
    let mut bounds = Vec::with_capacity(n + 1);
    let mut strengths = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let b = match k {
            0 => span[0],
            k if k == n => span[n - 1],
            k => 0.5 * (span[k - 1] + span[k]),
        };
        let left = if k == 0 { 0.0 } else { gamma[k - 1] };
        let right = if k == n { 0.0 } else { gamma[k] };
        bounds.push(b);
        strengths.push(left - right);
    }
    (bounds, strengths)
}

/// Velocity along the lift direction induced at span station `s` by
/// Gaussian-regularized trailing vortices of core radius `eps`.
fn induced_velocity(s: f64, eps: f64, bounds: &[f64], strengths: &[f64]) -> f64 {
    bounds
        .iter()
        .zip(strengths)
        .filter_map(|(b, g)| {
            let r = s - b;
            if r.abs() < CORE_CUTOFF {
                return None;
            }
            Some(g / (4.0 * PI * r) * (1.0 - (-(r * r) / (eps * eps)).exp()))
        })
        .sum()
}

/// Per-wing activation state of the correction.
#[derive(Debug, Clone)]
pub enum FllcStage {
    /// No correction configured.
    Disabled,
    /// Configured but the start time has not yet been passed.
    Uninitialized {
        config: FllcConfig,
        epsilon_chord: f64,
    },
    Initialized(Fllc),
}

impl FllcStage {
    /// `wing_epsilon_chord` is used when the correction has no override.
    pub fn from_config(config: Option<&FllcConfig>, wing_epsilon_chord: f64) -> Self {
        match config {
            None => FllcStage::Disabled,
            Some(cfg) => FllcStage::Uninitialized {
                config: cfg.clone(),
                epsilon_chord: cfg.epsilon_chord.unwrap_or(wing_epsilon_chord),
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, FllcStage::Disabled)
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, FllcStage::Initialized(_))
    }

    pub fn state(&self) -> Option<&Fllc> {
        match self {
            FllcStage::Initialized(fllc) => Some(fllc),
            _ => None,
        }
    }

    /// Initialize on the first call with `current_time > start_time`.
    /// Returns true only on the call that performed the transition.
    pub fn maybe_initialize(&mut self, current_time: f64, view: &ComponentView<'_>) -> bool {
        let fllc = match self {
            FllcStage::Uninitialized {
                config,
                epsilon_chord,
            } if current_time > config.start_time => Fllc::new(config, *epsilon_chord, view),
            _ => return false,
        };
        if fllc.is_empty() {
            log::warn!("fllc: initialized with an empty view");
        }
        log::info!(
            "fllc initialized at t={current_time} ({} points, eps[0]={:.4})",
            fllc.len(),
            view.epsilon.first().map_or(0.0, |e| e.x)
        );
        *self = FllcStage::Initialized(fllc);
        true
    }

    /// Correct `view.vel` in place; no-op unless initialized.
    pub fn apply(&mut self, view: &mut ComponentView<'_>) -> LiftlineResult<()> {
        match self {
            FllcStage::Initialized(fllc) => fllc.apply(view),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ActuatorGrid;
    use crate::math::Mat3;

    /// Elliptically loaded wing along y, wind along x, lift along z.
    fn loaded_grid(n: usize) -> ActuatorGrid {
        let mut g = ActuatorGrid::new(n);
        let ds = 2.0 / (n - 1) as f64;
        for i in 0..n {
            let y = -1.0 + ds * i as f64;
            g.pos[i] = Vec3::new(0.0, y, 0.0);
            g.vel_pos[i] = g.pos[i];
            g.vel[i] = Vec3::new(10.0, 0.0, 0.0);
            g.vel_rel[i] = Vec3::new(10.0, 0.0, 0.0);
            g.chord[i] = 0.5;
            g.epsilon[i] = Vec3::new(0.5, 0.5, 0.5);
            g.dx[i] = if i == 0 || i == n - 1 { 0.5 * ds } else { ds };
            g.orientation[i] = Mat3::identity();
            let lift = (1.0 - y * y).max(0.0).sqrt() * g.dx[i];
            g.force[i] = Vec3::new(0.0, 0.0, -lift);
        }
        g
    }

    fn config(start_time: f64) -> FllcConfig {
        FllcConfig {
            start_time,
            relaxation: 0.5,
            epsilon_chord: Some(0.25),
        }
    }

    #[test]
    fn test_disabled_stage_never_initializes() {
        let mut g = loaded_grid(5);
        let mut stage = FllcStage::from_config(None, 0.25);
        assert!(!stage.is_enabled());
        assert!(!stage.maybe_initialize(100.0, &g.component_view()));
        assert!(stage.apply(&mut g.component_view()).is_ok());
        assert_eq!(g.vel[2], Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_initializes_exactly_once_after_start_time() {
        let mut g = loaded_grid(5);
        let mut stage = FllcStage::from_config(Some(&config(1.0)), 0.0);
        let mut transitions = 0;
        for k in 0..20 {
            let t = 0.25 * k as f64;
            let view = g.component_view();
            if stage.maybe_initialize(t, &view) {
                transitions += 1;
                assert!(t > 1.0, "initialized at t={t}");
            }
            assert_eq!(stage.is_initialized(), t > 1.0, "t={t}");
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_wing_epsilon_chord_fallback() {
        let cfg = FllcConfig {
            epsilon_chord: None,
            ..config(0.0)
        };
        match FllcStage::from_config(Some(&cfg), 0.4) {
            FllcStage::Uninitialized { epsilon_chord, .. } => {
                assert!((epsilon_chord - 0.4).abs() < 1e-15)
            }
            other => panic!("unexpected stage {other:?}"),
        }
    }

    #[test]
    fn test_trailing_vortices_sum_to_zero() {
        let span = [0.0, 0.5, 1.0, 1.5];
        let gamma = [1.0, 2.0, 2.0, 1.0];
        let (bounds, strengths) = trailing_vortices(&span, &gamma);
        assert_eq!(bounds, vec![0.0, 0.25, 0.75, 1.25, 1.5]);
        assert_eq!(strengths, vec![-1.0, -1.0, 0.0, 1.0, 1.0]);
        assert!(strengths.iter().sum::<f64>().abs() < 1e-15);
    }

    #[test]
    fn test_correction_adds_downwash_at_midspan() {
        let mut g = loaded_grid(21);
        let mut stage = FllcStage::from_config(Some(&config(0.0)), 0.0);
        assert!(stage.maybe_initialize(0.1, &g.component_view()));
        stage.apply(&mut g.component_view()).unwrap();

        let mid = g.vel[10];
        assert!(mid.z < 0.0, "expected downwash, got {mid}");
        assert!((mid.x - 10.0).abs() < 1e-12);
        assert!(mid.y.abs() < 1e-12);
        // Symmetric loading gives a symmetric correction.
        assert!((g.vel[3].z - g.vel[17].z).abs() < 1e-10);

        let corr = stage.state().unwrap().correction();
        assert_eq!(corr.len(), 21);
        assert!((corr[10].abs() - mid.z.abs()).abs() < 1e-12);
        assert!((corr[3] - corr[17]).abs() < 1e-10);
    }

    #[test]
    fn test_relaxation_converges() {
        let mut g = loaded_grid(11);
        let mut stage = FllcStage::from_config(Some(&config(0.0)), 0.0);
        stage.maybe_initialize(0.1, &g.component_view());
        let mut last = f64::INFINITY;
        for _ in 0..30 {
            g.vel.iter_mut().for_each(|v| *v = Vec3::new(10.0, 0.0, 0.0));
            stage.apply(&mut g.component_view()).unwrap();
            let residual = stage.state().unwrap().residual();
            assert!(residual <= last + 1e-15, "residual grew: {residual} > {last}");
            last = residual;
        }
        assert!(last < 1e-6, "residual {last}");
        assert_eq!(stage.state().unwrap().iterations(), 30);
    }

    #[test]
    fn test_view_length_mismatch() {
        let mut small = loaded_grid(5);
        let mut large = loaded_grid(7);
        let mut stage = FllcStage::from_config(Some(&config(0.0)), 0.0);
        stage.maybe_initialize(1.0, &small.component_view());
        assert!(stage.apply(&mut small.component_view()).is_ok());
        assert!(matches!(
            stage.apply(&mut large.component_view()),
            Err(LiftlineError::InvalidTableLengths { .. })
        ));
    }
}
