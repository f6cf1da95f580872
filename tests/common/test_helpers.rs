//! Helper functions for integration tests

use fourier_rs::physics::Field;

/// Assert that two fields are close (within tolerance), element by element
pub fn assert_fields_close(actual: &Field, expected: &Field, tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Largest absolute difference between two fields
pub fn max_abs_error(actual: &Field, expected: &Field) -> f64 {
    actual
        .iter()
        .zip(expected.iter())
        .map(|(a, e)| (a - e).abs())
        .fold(0.0, f64::max)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_max_abs_error() {
        let a = Field::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Field::from_vec(vec![1.0, 2.5, 2.0]);
        assert_eq!(max_abs_error(&a, &b), 1.0);
    }
}
