//! Conductive flux (Fourier's law)
//!
//! ```text
//! q = -k · ∂T/∂x
//! ```
//!
//! The flux is a diagnostic: it is computed from a gradient supplied by the
//! caller (typically `ddx(T, dx, true)`) and never feeds back into the time
//! integration.

use crate::error::Result;
use crate::physics::field::{Conductivity, Field, check_aligned};

/// Flux `-con · variable`, elementwise
///
/// # Arguments
///
/// * `variable` - Gradient-like field
/// * `con` - Uniform conductivity or a profile aligned with `variable`
///
/// # Errors
///
/// [`InvalidInputError::LengthMismatch`](crate::InvalidInputError::LengthMismatch)
/// when a conductivity profile does not match `variable`.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{calc_q, Field};
///
/// let gradient = Field::from_vec(vec![1.0, 2.0, 3.0]);
/// let q = calc_q(&gradient, 2.0).unwrap();
/// assert_eq!(q.as_slice(), &[-2.0, -4.0, -6.0]);
/// ```
pub fn calc_q(variable: &Field, con: impl Into<Conductivity>) -> Result<Field> {
    let con = con.into();
    if let Conductivity::Profile(profile) = &con {
        check_aligned("con", profile, variable.len())?;
    }

    Ok(Field::from_fn(variable.len(), |i, _| -con.at(i) * variable[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInputError;

    #[test]
    fn test_uniform_conductivity() {
        let gradient = Field::from_vec(vec![1.0, 2.0, 3.0]);
        let q = calc_q(&gradient, 2.0).unwrap();
        assert_eq!(q, Field::from_vec(vec![-2.0, -4.0, -6.0]));
    }

    #[test]
    fn test_profile_conductivity() {
        let gradient = Field::from_vec(vec![1.0, -2.0, 0.5, 4.0]);
        let con = Field::from_vec(vec![0.5, 1.0, 2.0, 0.0]);

        let q = calc_q(&gradient, &con).unwrap();
        assert_eq!(q.as_slice(), &[-0.5, 2.0, -1.0, 0.0]);
        // Input untouched
        assert_eq!(gradient[1], -2.0);
    }

    #[test]
    fn test_profile_length_mismatch() {
        let gradient = Field::from_vec(vec![1.0, 2.0, 3.0]);
        let err = calc_q(&gradient, vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::LengthMismatch {
                name: "con",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_repeatable() {
        let gradient = Field::from_fn(16, |i, _| (i as f64 * 0.37).cos());
        let first = calc_q(&gradient, 1.3).unwrap();
        let second = calc_q(&gradient, 1.3).unwrap();
        assert_eq!(first, second);
    }
}
