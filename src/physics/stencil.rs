//! Central-difference derivative operators
//!
//! # Stencils
//!
//! On a uniform grid with spacing Δx, interior points `1..N-1` use the
//! second-order central stencils:
//!
//! ```text
//! ∂v/∂x|ᵢ   ≈ (vᵢ₊₁ - vᵢ₋₁) / (2Δx)
//! ∂²v/∂x²|ᵢ ≈ (vᵢ₊₁ - 2vᵢ + vᵢ₋₁) / Δx²
//! ```
//!
//! # Edge points
//!
//! The two edge samples are left at `0.0` unless `full` is requested:
//!
//! | operator | index 0                        | index N-1                              |
//! |----------|--------------------------------|----------------------------------------|
//! | `ddx`    | `(v₁ - v₀) / Δx`               | `(v_{N-1} - v_{N-2}) / Δx`             |
//! | `d2dx2`  | `(v₂ - 2v₁ + v₀) / Δx²`        | `(v_{N-1} - 2v_{N-2} + v_{N-3}) / Δx²` |
//!
//! The second-derivative edges reuse the neighbouring interior stencil
//! (points {0,1,2} and {N-3,N-2,N-1}), so they equal the value at index 1
//! and N-2 respectively.
//!
//! # Parallel execution
//!
//! The interior loops carry no cross-iteration dependency. With the
//! `parallel` feature, grids larger than
//! [`parallel_threshold()`](crate::solver::parallel_threshold) are split over
//! rayon workers; every output sample is still produced by the same kernel,
//! so both paths are bit-identical.

use crate::error::Result;
use crate::physics::field::{Field, check_points, check_positive};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// First derivative
// =================================================================================================

/// First spatial derivative of `variable`
///
/// # Arguments
///
/// * `variable` - Field sampled with spacing `dx` (at least 2 points)
/// * `dx` - Grid spacing, finite and strictly positive
/// * `full` - Fill the edges with one-sided differences instead of `0.0`
///
/// # Errors
///
/// [`InvalidInputError`](crate::InvalidInputError) when `variable` has fewer
/// than 2 points or `dx` is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{ddx, Field};
///
/// let ramp = Field::from_vec(vec![0.0, 2.0, 4.0, 6.0]);
///
/// let interior = ddx(&ramp, 1.0, false).unwrap();
/// assert_eq!(interior.as_slice(), &[0.0, 2.0, 2.0, 0.0]);
///
/// let full = ddx(&ramp, 1.0, true).unwrap();
/// assert_eq!(full.as_slice(), &[2.0, 2.0, 2.0, 2.0]);
/// ```
pub fn ddx(variable: &Field, dx: f64, full: bool) -> Result<Field> {
    check_positive("dx", dx)?;
    check_points("variable", variable, 2)?;
    Ok(ddx_unchecked(variable, dx, full))
}

/// [`ddx`] without argument validation
///
/// Caller guarantees `variable.len() >= 2` and `dx > 0`.
pub(crate) fn ddx_unchecked(variable: &Field, dx: f64, full: bool) -> Field {
    let n = variable.len();
    let v = variable.as_slice();
    let mut derivative = Field::zeros(n);

    let two_dx = 2.0 * dx;
    fill_interior(derivative.as_mut_slice(), |i| (v[i + 1] - v[i - 1]) / two_dx);

    if full {
        derivative[0] = (v[1] - v[0]) / dx;
        derivative[n - 1] = (v[n - 1] - v[n - 2]) / dx;
    }

    derivative
}

// =================================================================================================
// Second derivative
// =================================================================================================

/// Second spatial derivative of `variable`
///
/// With `full`, the edges reuse the nearest three-point stencil (see the
/// module documentation); this needs at least 3 points.
///
/// # Errors
///
/// [`InvalidInputError`](crate::InvalidInputError) when `variable` has fewer
/// than 2 points (3 with `full`) or `dx` is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{d2dx2, Field};
///
/// // v = x² sampled at x = 0, 1, 2, 3, 4
/// let parabola = Field::from_vec(vec![0.0, 1.0, 4.0, 9.0, 16.0]);
///
/// let curvature = d2dx2(&parabola, 1.0, false).unwrap();
/// assert_eq!(curvature.as_slice(), &[0.0, 2.0, 2.0, 2.0, 0.0]);
/// ```
pub fn d2dx2(variable: &Field, dx: f64, full: bool) -> Result<Field> {
    check_positive("dx", dx)?;
    check_points("variable", variable, if full { 3 } else { 2 })?;
    Ok(d2dx2_unchecked(variable, dx, full))
}

/// [`d2dx2`] without argument validation
///
/// Caller guarantees `variable.len() >= 3` when `full`, `>= 2` otherwise.
pub(crate) fn d2dx2_unchecked(variable: &Field, dx: f64, full: bool) -> Field {
    let n = variable.len();
    let v = variable.as_slice();
    let mut derivative = Field::zeros(n);

    let dx2 = dx * dx;
    fill_interior(derivative.as_mut_slice(), |i| {
        (v[i + 1] - 2.0 * v[i] + v[i - 1]) / dx2
    });

    if full {
        derivative[0] = (v[2] - 2.0 * v[1] + v[0]) / dx2;
        derivative[n - 1] = (v[n - 1] - 2.0 * v[n - 2] + v[n - 3]) / dx2;
    }

    derivative
}

// =================================================================================================
// Interior loop
// =================================================================================================

/// Write `kernel(i)` into `out[i]` for every interior index `1..len-1`
fn fill_interior<F>(out: &mut [f64], kernel: F)
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    fill_interior_above(out, crate::solver::parallel_threshold(), kernel);
}

/// [`fill_interior`] with an explicit parallel threshold
///
/// Each index is written exactly once, by whichever path runs.
fn fill_interior_above<F>(out: &mut [f64], threshold: usize, kernel: F)
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    let n = out.len();
    if n < 3 {
        return;
    }
    let interior = &mut out[1..n - 1];

    if n > threshold {
        #[cfg(feature = "parallel")]
        interior
            .par_iter_mut()
            .enumerate()
            .for_each(|(j, d)| *d = kernel(j + 1));
        #[cfg(not(feature = "parallel"))]
        interior
            .iter_mut()
            .enumerate()
            .for_each(|(j, d)| *d = kernel(j + 1));
    } else {
        interior
            .iter_mut()
            .enumerate()
            .for_each(|(j, d)| *d = kernel(j + 1));
    }
}

// =================================================================================================
// Tests
// =================================================================================================
