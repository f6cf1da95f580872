//! Runge-Kutta 4 (RK4) time step
//!
//! # Mathematical Background
//!
//! For the semi-discrete system `dT/dt = f(T)` the classical RK4 step is
//!
//! ```text
//! k₁ = f(Tₙ)
//! k₂ = f(Tₙ + dt/2 · k₁)
//! k₃ = f(Tₙ + dt/2 · k₂)
//! k₄ = f(Tₙ + dt · k₃)
//!
//! Tₙ₊₁ = Tₙ + dt/6 · (k₁ + 2(k₂ + k₃) + k₄)
//! ```
//!
//! The coefficients of `f` are frozen for the whole step; a caller with
//! time-dependent coefficients supplies new ones before the next step.
//!
//! # Stability
//!
//! No stability check is made. Keeping `dt` small enough for the
//! diffusion and advection terms on the chosen grid is the caller's job;
//! [`validate_field`](crate::solver::validate_field) helps a driver detect a
//! run that has blown up.

use log::trace;

use crate::error::Result;
use crate::physics::field::{Field, check_operator_inputs, check_positive};
use crate::physics::operator::calc_k_unchecked;
use crate::physics::traits::RateModel;

// =================================================================================================
// Stage kernel
// =================================================================================================

/// One RK4 step of `variable` with right-hand side `rate`
///
/// Shared by [`rungekutta`] and [`RK4Stepper`] so both produce bit-identical
/// fields. The operation order is fixed: stage inputs are `y + (0.5·dt)·k`,
/// the update is `y + (dt/6)·((k₁ + 2(k₂+k₃)) + k₄)`.
fn rk4_stages<F>(variable: &Field, dt: f64, mut rate: F) -> Result<Field>
where
    F: FnMut(&Field) -> Result<Field>,
{
    let half_dt = 0.5 * dt;

    // Stage 1: slope at the beginning of the step
    let k1 = rate(variable)?;

    // Stages 2 and 3: slopes at the midpoint
    let k2 = rate(&(variable + &k1 * half_dt))?;
    let k3 = rate(&(variable + &k2 * half_dt))?;

    // Stage 4: slope at the end of the step
    let k4 = rate(&(variable + &k3 * dt))?;

    let weighted_slope = k1 + (k2 + k3) * 2.0 + k4;
    Ok(variable + weighted_slope * (dt / 6.0))
}

// =================================================================================================
// Free-function step
// =================================================================================================

/// Advance `variable` by one RK4 step of size `dt`
///
/// The four stage rates are [`calc_k`](crate::physics::calc_k) evaluations
/// with `interaccion`, `alfa`, `beta`, `dif` and `dx` held fixed.
///
/// # Errors
///
/// [`InvalidInputError`](crate::InvalidInputError) under the same
/// conditions as `calc_k`, or when `dt` is not a positive finite number.
/// Inputs are validated once; the stages themselves cannot fail.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::Field;
/// use fourier_rs::solver::rungekutta;
///
/// let variable = Field::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// let zeros = Field::zeros(5);
///
/// let next = rungekutta(&variable, &zeros, &zeros, &zeros, &zeros, 1.0, 0.1).unwrap();
/// assert_eq!(next, variable);
/// ```
pub fn rungekutta(
    variable: &Field,
    interaccion: &Field,
    alfa: &Field,
    beta: &Field,
    dif: &Field,
    dx: f64,
    dt: f64,
) -> Result<Field> {
    check_operator_inputs(variable, interaccion, alfa, beta, dif, dx)?;
    check_positive("dt", dt)?;

    trace!("RK4 step: {} points, dx = {}, dt = {}", variable.len(), dx, dt);

    rk4_stages(variable, dt, |y| {
        Ok(calc_k_unchecked(y, interaccion, alfa, beta, dif, dx))
    })
}

// =================================================================================================
// Stepper over a rate model
// =================================================================================================

/// Classical fourth-order Runge-Kutta stepper
///
/// Advances any [`RateModel`] by one fixed step. Stateless: the same
/// stepper can drive several models.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{DiffusionReaction, Field};
/// use fourier_rs::solver::RK4Stepper;
///
/// let model = DiffusionReaction::uniform(21, 1.0, 0.0, 1.0, 0.05).unwrap();
/// let mut temperature = Field::from_fn(21, |i, _| (i as f64 * 0.05 * std::f64::consts::PI).sin());
///
/// let stepper = RK4Stepper::new();
/// for _ in 0..10 {
///     temperature = stepper.step(&model, &temperature, 1e-4).unwrap();
/// }
/// assert_eq!(temperature.len(), 21);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Stepper;

impl RK4Stepper {
    /// Create a new RK4 stepper
    pub fn new() -> Self {
        Self
    }

    /// Advance `variable` by one step of size `dt` under `model`
    ///
    /// # Errors
    ///
    /// Fails when `dt` is not a positive finite number or when the model
    /// rejects `variable`.
    pub fn step(&self, model: &dyn RateModel, variable: &Field, dt: f64) -> Result<Field> {
        check_positive("dt", dt)?;

        trace!("{}: RK4 step with dt = {}", model.name(), dt);

        rk4_stages(variable, dt, |y| model.rate(y))
    }

    /// Number of rate evaluations per step
    pub fn stages(&self) -> usize {
        4
    }

    pub fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
