//! Field builders with known derivatives

use fourier_rs::physics::Field;

/// `a + b·x` sampled at `x = i·dx`
pub fn linear_ramp(n: usize, dx: f64, a: f64, b: f64) -> Field {
    Field::from_fn(n, |i, _| a + b * (i as f64 * dx))
}

/// `a + b·x + c·x²` sampled at `x = i·dx`
pub fn quadratic(n: usize, dx: f64, a: f64, b: f64, c: f64) -> Field {
    Field::from_fn(n, |i, _| {
        let x = i as f64 * dx;
        a + b * x + c * x * x
    })
}

/// `amplitude · sin(2π·x / wavelength)` sampled at `x = i·dx`
pub fn sine_wave(n: usize, dx: f64, amplitude: f64, wavelength: f64) -> Field {
    Field::from_fn(n, |i, _| {
        amplitude * (2.0 * std::f64::consts::PI * i as f64 * dx / wavelength).sin()
    })
}

/// Zero everywhere except `height` at the middle point
pub fn spike(n: usize, height: f64) -> Field {
    Field::from_fn(n, |i, _| if i == n / 2 { height } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_have_requested_length() {
        assert_eq!(linear_ramp(7, 0.1, 0.0, 1.0).len(), 7);
        assert_eq!(quadratic(9, 0.1, 0.0, 0.0, 1.0).len(), 9);
        assert_eq!(sine_wave(11, 0.1, 1.0, 1.0).len(), 11);
        assert_eq!(spike(5, 2.0)[2], 2.0);
    }
}
