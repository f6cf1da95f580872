//! Field types and argument validation
//!
//! A [`Field`] is a scalar quantity sampled on N equally spaced grid points.
//! Coefficient fields (`alfa`, `beta`, `dif`) and the source field
//! (`interaccion`) share the same representation and must be aligned
//! index-for-index with the field they act on.

use std::fmt;

use nalgebra::DVector;

use crate::error::{InvalidInputError, Result};

/// Scalar quantity sampled on a uniform 1D grid
pub type Field = DVector<f64>;

/// Minimum number of points for operators combining several fields
///
/// Two interior neighbours plus both edge points.
pub const MIN_POINTS: usize = 3;

// =================================================================================================
// Conductivity
// =================================================================================================

/// Conductivity used by the flux computation
///
/// Either one value for the whole domain or a profile aligned with the
/// gradient it multiplies.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{Conductivity, Field};
///
/// let uniform: Conductivity = 2.0.into();
/// let profile: Conductivity = Field::from_vec(vec![1.0, 2.0, 3.0]).into();
///
/// assert!(uniform.is_uniform());
/// assert_eq!(profile.len(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Conductivity {
    /// Same conductivity at every grid point
    Uniform(f64),

    /// Conductivity per grid point
    Profile(Field),
}

impl Conductivity {
    /// Check conductivity is uniform
    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }

    /// Number of points of a profile, `None` when uniform
    pub fn len(&self) -> Option<usize> {
        match self {
            Conductivity::Uniform(_) => None,
            Conductivity::Profile(profile) => Some(profile.len()),
        }
    }

    /// Conductivity at grid point `i`
    #[inline]
    pub(crate) fn at(&self, i: usize) -> f64 {
        match self {
            Conductivity::Uniform(value) => *value,
            Conductivity::Profile(profile) => profile[i],
        }
    }
}

impl From<f64> for Conductivity {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Field> for Conductivity {
    fn from(profile: Field) -> Self {
        Self::Profile(profile)
    }
}

impl From<&Field> for Conductivity {
    fn from(profile: &Field) -> Self {
        Self::Profile(profile.clone())
    }
}

impl From<Vec<f64>> for Conductivity {
    fn from(profile: Vec<f64>) -> Self {
        Self::Profile(Field::from_vec(profile))
    }
}

impl fmt::Display for Conductivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conductivity::Uniform(value) => write!(f, "Uniform ({})", value),
            Conductivity::Profile(profile) => write!(f, "Profile [{}]", profile.len()),
        }
    }
}

// =================================================================================================
// Validation helpers
// =================================================================================================

/// Reject spacings and steps that are not finite and strictly positive
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidInputError::NonPositive { name, value })
    }
}

/// Reject fields shorter than `min`
pub(crate) fn check_points(name: &'static str, field: &Field, min: usize) -> Result<()> {
    if field.len() < min {
        return Err(InvalidInputError::TooFewPoints {
            name,
            len: field.len(),
            min,
        });
    }
    Ok(())
}

/// Reject fields whose length differs from `expected`
pub(crate) fn check_aligned(name: &'static str, field: &Field, expected: usize) -> Result<()> {
    if field.len() != expected {
        return Err(InvalidInputError::LengthMismatch {
            name,
            expected,
            found: field.len(),
        });
    }
    Ok(())
}

/// Validate the arguments shared by the rate assembly and the RK4 step
///
/// `variable` fixes N (at least [`MIN_POINTS`]), every other field must
/// match it.
pub(crate) fn check_operator_inputs(
    variable: &Field,
    interaccion: &Field,
    alfa: &Field,
    beta: &Field,
    dif: &Field,
    dx: f64,
) -> Result<()> {
    check_positive("dx", dx)?;
    check_points("variable", variable, MIN_POINTS)?;

    let n = variable.len();
    check_aligned("interaccion", interaccion, n)?;
    check_aligned("alfa", alfa, n)?;
    check_aligned("beta", beta, n)?;
    check_aligned("dif", dif, n)?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
