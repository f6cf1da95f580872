//! Convergence and time-loop tests for the RK4 step
//!
//! The spatial grid is fixed, so the semi-discrete system is a linear ODE
//! and refining `dt` isolates the temporal error of the integrator.

use fourier_rs::physics::{DiffusionReaction, Field, RateModel};
use fourier_rs::solver::{RK4Stepper, rungekutta, validate_field};

mod common;
use common::{max_abs_error, relative_error, sine_wave, spike};

const N: usize = 21;
const DX: f64 = 0.05;

/// Advection-diffusion with a small source on a fixed grid
fn coefficients() -> (Field, Field, Field, Field) {
    let source = Field::from_element(N, 0.1);
    let alfa = Field::from_element(N, 1.0);
    let beta = Field::from_element(N, 0.5);
    let dif = Field::from_element(N, 0.01);
    (source, alfa, beta, dif)
}

fn integrate(initial: &Field, total_time: f64, steps: usize) -> Field {
    let (source, alfa, beta, dif) = coefficients();
    let dt = total_time / steps as f64;

    let mut field = initial.clone();
    for _ in 0..steps {
        field = rungekutta(&field, &source, &alfa, &beta, &dif, DX, dt).unwrap();
    }
    field
}

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt^4)
    // When dt → dt/2, error should → error/16
    let initial = sine_wave(N, DX, 1.0, 1.0);
    let total_time = 0.4;

    let reference = integrate(&initial, total_time, 2560);

    let steps_list = [20, 40, 80];
    let errors: Vec<f64> = steps_list
        .iter()
        .map(|&steps| max_abs_error(&integrate(&initial, total_time, steps), &reference))
        .collect();

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        assert!(
            ratio > 12.0 && ratio < 20.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_uniform_field_without_source_is_steady() {
    let model = DiffusionReaction::uniform(N, 1.0, 0.3, 0.8, DX).unwrap();
    let stepper = RK4Stepper::new();

    let initial = Field::from_element(N, 293.15);
    let mut field = initial.clone();
    for _ in 0..200 {
        field = stepper.step(&model, &field, 1e-3).unwrap();
    }

    assert_eq!(field, initial);
}

#[test]
fn test_constant_source_heats_linearly() {
    // α = β = 0: T(t) = T₀ + S·t
    let n = 8;
    let model = DiffusionReaction::new(
        Field::from_element(n, 2.5),
        Field::zeros(n),
        Field::zeros(n),
        Field::from_element(n, 1.0),
        0.1,
    )
    .unwrap();
    let stepper = RK4Stepper::new();

    let mut field = Field::from_element(n, 10.0);
    for _ in 0..100 {
        field = stepper.step(&model, &field, 0.01).unwrap();
    }

    for value in field.iter() {
        assert!(relative_error(*value, 12.5) < 1e-12);
    }
}

#[test]
fn test_coefficients_can_change_between_steps() {
    // Caller re-supplies the source each step: S(t) = t, T(t) = T₀ + t²/2
    let n = 6;
    let dt = 0.01;
    let zeros = Field::zeros(n);
    let dif = Field::from_element(n, 1.0);

    let mut field = Field::zeros(n);
    for step in 0..100 {
        // Midpoint sampling makes the accumulated sum exact
        let t_mid = (step as f64 + 0.5) * dt;
        let source = Field::from_element(n, t_mid);
        field = rungekutta(&field, &source, &zeros, &zeros, &dif, 0.2, dt).unwrap();
    }

    for value in field.iter() {
        assert!(relative_error(*value, 0.5) < 1e-10);
    }
}

#[test]
fn test_driver_detects_unstable_time_step() {
    // Diffusive limit is dt ~ dx²/D; dt = 0.1 is far beyond it
    let model = DiffusionReaction::uniform(N, 1.0, 0.0, 1.0, DX).unwrap();
    assert_eq!(model.points(), N);
    let stepper = RK4Stepper::new();

    let mut field = spike(N, 1.0);
    let mut failed_at = None;
    for step in 1..=1000 {
        field = stepper.step(&model, &field, 0.1).unwrap();
        if validate_field(&field, step).is_err() {
            failed_at = Some(step);
            break;
        }
    }

    assert!(failed_at.is_some(), "unstable run was not detected");
}

#[test]
fn test_stable_run_stays_finite() {
    let model = DiffusionReaction::uniform(N, 1.0, 0.0, 1.0, DX).unwrap();
    let stepper = RK4Stepper::new();

    let mut field = spike(N, 1.0);
    for step in 1..=500 {
        field = stepper.step(&model, &field, 1e-4).unwrap();
        validate_field(&field, step).unwrap();
    }
}
