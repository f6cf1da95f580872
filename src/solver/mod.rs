//! Time integration
//!
//! This module advances fields in time. The right-hand side comes from the
//! [`physics`](crate::physics) module; this module only decides how to step.
//!
//! # Entry points
//!
//! - [`rungekutta`]: one RK4 step of the diffusion-reaction operator, with
//!   every coefficient passed explicitly
//! - [`RK4Stepper`]: the same step over any [`RateModel`](crate::physics::RateModel)
//! - [`validate_field`]: NaN/Inf check for time-loop drivers
//!
//! # Time loop
//!
//! The loop itself belongs to the caller:
//!
//! ```rust
//! use fourier_rs::physics::{DiffusionReaction, Field};
//! use fourier_rs::solver::{validate_field, RK4Stepper};
//!
//! # fn main() -> Result<(), fourier_rs::InvalidInputError> {
//! let n = 21;
//! let dx = 0.05;
//! let model = DiffusionReaction::uniform(n, 1.0, 0.0, 1.0, dx)?;
//! let stepper = RK4Stepper::new();
//!
//! let mut temperature = Field::from_fn(n, |i, _| if i == n / 2 { 1.0 } else { 0.0 });
//! for step in 1..=50 {
//!     temperature = stepper.step(&model, &temperature, 1e-4)?;
//!     validate_field(&temperature, step)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All entry points return [`Result`](crate::Result). Errors come from input
//! validation only; an unstable `dt` produces NaN/Inf silently, which
//! [`validate_field`] reports.

mod rk4;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the interior stencil loops to rayon is an
// execution concern, so it lives here rather than next to the stencils.
// Relaxed ordering is enough: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid points above which the interior stencil loops
/// run on rayon
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Fields with more points than this value have their interior stencils
/// split over rayon workers, but only when the crate is compiled with the
/// `parallel` feature. Results are identical either way.
///
/// # Example
///
/// ```rust
/// use fourier_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use fourier_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(4096);
/// assert_eq!(parallel_threshold(), 4096);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that sets the threshold and restores the previous value on drop.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use rk4::{RK4Stepper, rungekutta};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{InvalidInputError, Result};
use crate::physics::Field;

/// Check a field for NaN or infinite samples
///
/// Meant for time-loop drivers: the integrator performs no stability check,
/// so a `dt` too large for the grid shows up as non-finite values a few
/// steps later.
///
/// # Arguments
///
/// * `field` - Field to check
/// * `step` - Current time step (for logging)
///
/// # Errors
///
/// [`InvalidInputError::NonFinite`] for the first offending sample.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::Field;
/// use fourier_rs::solver::validate_field;
///
/// assert!(validate_field(&Field::from_vec(vec![1.0, 2.0]), 1).is_ok());
/// assert!(validate_field(&Field::from_vec(vec![1.0, f64::NAN]), 2).is_err());
/// ```
pub fn validate_field(field: &Field, step: usize) -> Result<()> {
    match field.iter().position(|x| !x.is_finite()) {
        None => Ok(()),
        Some(index) => {
            let value = field[index];
            log::warn!(
                "Non-finite value {} at index {} after step {}. \
                 Try reducing the time step.",
                value,
                index,
                step
            );
            Err(InvalidInputError::NonFinite {
                name: "field",
                index,
                value,
            })
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
