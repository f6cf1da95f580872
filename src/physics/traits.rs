//! Rate model trait
//!
//! A rate model evaluates the right-hand side `∂T/∂t = f(T)` of a
//! semi-discretised equation. It provides the physics; the integrators in
//! [`solver`](crate::solver) provide the time stepping.

use crate::error::Result;
use crate::physics::field::Field;

/// Right-hand side of a semi-discrete evolution equation
///
/// # Responsibility
///
/// Computes the instantaneous rate of change of a field. Does NOT advance
/// it in time (that is the stepper's job). Coefficients are held fixed for
/// the lifetime of the model; time-dependent coefficients are handled by
/// building a new model for each step.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{Field, RateModel};
/// use fourier_rs::Result;
///
/// struct Cooling {
///     rate: f64,
/// }
///
/// impl RateModel for Cooling {
///     fn points(&self) -> usize { 4 }
///     fn rate(&self, variable: &Field) -> Result<Field> {
///         Ok(variable * -self.rate)
///     }
///     fn name(&self) -> &str { "Cooling" }
/// }
///
/// let model = Cooling { rate: 0.5 };
/// let rate = model.rate(&Field::from_element(4, 2.0)).unwrap();
/// assert_eq!(rate[0], -1.0);
/// ```
pub trait RateModel: Send + Sync {
    /// Number of grid points the model is defined on
    fn points(&self) -> usize;

    /// Rate of change of `variable`
    ///
    /// # Errors
    ///
    /// Fails when `variable` is not compatible with the model (typically a
    /// length different from [`points`](Self::points)).
    fn rate(&self, variable: &Field) -> Result<Field>;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}
