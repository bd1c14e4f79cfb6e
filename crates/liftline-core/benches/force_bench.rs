// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Force Assembly Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for force assembly and a full actuator step.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use liftline_core::{Actuator, ActuatorWing, SimTime, UniformInflow, Vec3};
use liftline_types::{ActuatorConfig, FllcConfig, MotionConfig, PolarConfig, WingConfig};

fn wing_config(label: &str, num_points: usize, fllc: bool) -> WingConfig {
    WingConfig {
        label: label.to_string(),
        wing_type: Default::default(),
        source: Default::default(),
        num_points,
        start: [0.0, -5.0, 0.0],
        end: [0.0, 5.0, 0.0],
        blade_x: [1.0, 0.0, 0.0],
        chord: vec![1.0],
        epsilon: [0.5, 0.5, 0.5],
        epsilon_chord: [0.25, 0.25, 0.25],
        pitch: 4.0,
        pitch_schedule: None,
        motion: MotionConfig::Sine {
            period: 2.0,
            amplitude: [0.0, 0.0, 0.2],
        },
        airfoil: Some(PolarConfig {
            aoa: (-20..=20).map(f64::from).collect(),
            cl: (-20..=20).map(|a| 0.11 * f64::from(a)).collect(),
            cd: (-20..=20).map(|a| 0.01 + 1e-4 * f64::from(a * a)).collect(),
        }),
        fllc: fllc.then(FllcConfig::default),
    }
}

// ── ActuatorWing.compute_forces() ───────────────────────────────────

fn bench_compute_forces_100(c: &mut Criterion) {
    let mut wing = ActuatorWing::new(&wing_config("w", 100, false)).expect("wing");
    wing.update_velocities(&vec![Vec3::new(10.0, 0.0, 0.5); 100])
        .expect("velocities");
    let time = SimTime::new(1.0, 1.01, 100);
    c.bench_function("compute_forces_100pt", |b| {
        b.iter(|| wing.compute_forces(black_box(&time)))
    });
}

// ── Actuator.pre_advance_work() ─────────────────────────────────────

fn bench_actuator_step(c: &mut Criterion) {
    let config = ActuatorConfig {
        wings: vec![wing_config("a", 64, true), wing_config("b", 64, false)],
        output_frequency: 10,
    };
    let mut actuator = Actuator::new(&config).expect("actuator");
    let inflow = UniformInflow::new(Vec3::new(10.0, 0.0, 0.0));
    let mut time = SimTime::initial(0.0);
    actuator.post_init_actions(&time, &inflow).expect("init");
    c.bench_function("actuator_step_2x64pt_fllc", |b| {
        b.iter(|| {
            time = time.advance(0.01);
            actuator.pre_advance_work(black_box(&time), &inflow)
        })
    });
}

criterion_group!(benches, bench_compute_forces_100, bench_actuator_step);
criterion_main!(benches);
