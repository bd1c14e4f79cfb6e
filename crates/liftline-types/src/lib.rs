// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Configuration, error hierarchy and diagnostic records shared by the
//! interpolation engine and the actuator-line force kernel.

pub mod config;
pub mod error;
pub mod records;

pub use config::{
    ActuatorConfig, FllcConfig, MotionConfig, PitchSchedule, PolarConfig, SourceType,
    WingConfig, WingType,
};
pub use error::{LiftlineError, LiftlineResult};
pub use records::WingOutputRecord;
