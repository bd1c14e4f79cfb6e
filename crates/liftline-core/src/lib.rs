// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Actuator Line Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Actuator-line representation of wings and blades: kinematics, force
//! assembly from airfoil polars, filtered lifting-line correction and
//! projection of the point forces onto the fluid.
//!
//! # Step Invariants
//!
//! 1. **Motion before forces**: a wing's positions and translational
//!    velocity are advanced to the new time before any angle of attack
//!    is computed, and fluid velocity is sampled at the positions the
//!    wing held before that advance.
//!
//! 2. **Points are independent**: force assembly for point `i` reads
//!    and writes only slot `i`. Totals are reduced afterwards in index
//!    order, so enabling the `parallel` feature does not change results.
//!
//! 3. **Correction activates once**: the lifting-line correction moves
//!    from `Uninitialized` to `Initialized` on the first step whose
//!    current time exceeds its start time, on the controlling thread,
//!    and never goes back.
//!
//! 4. **Errors are fatal**: degenerate geometry, unsupported wing kinds
//!    and non-finite totals surface as `LiftlineError`; out-of-range
//!    angles of attack clamp to the polar ends.

pub mod actuator;
pub mod fllc;
pub mod force;
pub mod frame;
pub mod grid;
pub mod math;
pub mod motion;
pub mod output;
pub mod sampler;
pub mod source;
pub mod time;
pub mod wing;

pub use actuator::Actuator;
pub use fllc::{Fllc, FllcStage};
pub use force::{compute_forces, section_load, SectionLoad};
pub use frame::LocalFrame;
pub use grid::{ActuatorGrid, ComponentView};
pub use math::{Mat3, Vec3};
pub use motion::Motion;
pub use output::{LogSink, MemorySink, OutputSink};
pub use sampler::{ExternalSampler, UniformInflow, VelocitySampler};
pub use source::{gaussian_3d, line_source_at};
pub use time::SimTime;
pub use wing::{airfoil_for, ActuatorWing, PitchControl, WingData};
