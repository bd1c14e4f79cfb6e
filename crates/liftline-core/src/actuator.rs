// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Actuator Manager
// Mirrors: amr-wind/wind_energy/actuator/Actuator.cpp
// ─────────────────────────────────────────────────────────────────────
//! Drives every wing through the per-step sequence: refresh sampling
//! points, sample the flow, apply the lifting-line correction, assemble
//! forces. Also emits diagnostics and evaluates the combined source.

use std::collections::HashSet;

use liftline_types::{ActuatorConfig, LiftlineError, LiftlineResult};

use crate::math::Vec3;
use crate::output::OutputSink;
use crate::sampler::VelocitySampler;
use crate::time::SimTime;
use crate::wing::ActuatorWing;

pub struct Actuator {
    wings: Vec<ActuatorWing>,
    output_frequency: usize,
    scratch: Vec<Vec3>,
}

impl Actuator {
    pub fn new(config: &ActuatorConfig) -> LiftlineResult<Self> {
        config.validate()?;
        let wings = config
            .wings
            .iter()
            .map(ActuatorWing::new)
            .collect::<LiftlineResult<Vec<_>>>()?;
        Self::from_wings(wings, config.output_frequency)
    }

    /// Build from already constructed wings.
    ///
    /// Applies the same checks as a parsed config: `output_frequency`
    /// must be at least 1 and wing labels must be unique.
    pub fn from_wings(wings: Vec<ActuatorWing>, output_frequency: usize) -> LiftlineResult<Self> {
        if output_frequency < 1 {
            return Err(LiftlineError::Config(format!(
                "output_frequency must be >= 1, got {output_frequency}"
            )));
        }
        {
            let mut labels = HashSet::new();
            for wing in &wings {
                if !labels.insert(wing.label()) {
                    return Err(LiftlineError::Config(format!(
                        "duplicate wing label '{}'",
                        wing.label()
                    )));
                }
            }
        }
        log::info!(
            "actuator: {} wings, output every {} steps",
            wings.len(),
            output_frequency
        );
        Ok(Self {
            wings,
            output_frequency,
            scratch: Vec::new(),
        })
    }

    pub fn wings(&self) -> &[ActuatorWing] {
        &self.wings
    }

    pub fn wing(&self, label: &str) -> Option<&ActuatorWing> {
        self.wings.iter().find(|w| w.label() == label)
    }

    pub fn num_wings(&self) -> usize {
        self.wings.len()
    }

    pub fn output_frequency(&self) -> usize {
        self.output_frequency
    }

    /// Initial force evaluation after setup, before the first step.
    pub fn post_init_actions(
        &mut self,
        time: &SimTime,
        sampler: &dyn VelocitySampler,
    ) -> LiftlineResult<()> {
        self.update(time, sampler).map_err(|e| {
            log::error!("actuator init failed at t={}: {e}", time.current_time);
            e
        })
    }

    /// Per-step force evaluation, before the flow is advanced.
    pub fn pre_advance_work(
        &mut self,
        time: &SimTime,
        sampler: &dyn VelocitySampler,
    ) -> LiftlineResult<()> {
        self.update(time, sampler).map_err(|e| {
            log::error!("actuator step {} failed: {e}", time.time_index);
            e
        })
    }

    /// Write one record per wing on output steps. Returns whether
    /// anything was written.
    pub fn post_advance_work(&self, time: &SimTime, sink: &dyn OutputSink) -> bool {
        if time.time_index % self.output_frequency != 0 {
            return false;
        }
        for wing in &self.wings {
            sink.write(wing.output_record(time));
        }
        true
    }

    /// Combined body-force density of all wings at `point`.
    pub fn source_term_at(&self, point: &Vec3) -> Vec3 {
        self.wings
            .iter()
            .fold(Vec3::zeros(), |acc, w| acc + w.source_term_at(point))
    }

    /// Lift and drag summed over all wings.
    pub fn totals(&self) -> (f64, f64) {
        self.wings
            .iter()
            .fold((0.0, 0.0), |(l, d), w| (l + w.meta.lift, d + w.meta.drag))
    }

    fn update(&mut self, time: &SimTime, sampler: &dyn VelocitySampler) -> LiftlineResult<()> {
        for wing in self.wings.iter_mut() {
            wing.update_positions();
            self.scratch.clear();
            self.scratch.resize(wing.num_points(), Vec3::zeros());
            sampler.sample(&wing.grid.vel_pos, &mut self.scratch);
            wing.update_velocities(&self.scratch)?;
            wing.compute_forces(time)?;
        }
        Ok(())
    }
}
