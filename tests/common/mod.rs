//! Common utilities for integration tests
#![allow(dead_code)]

pub mod profiles;
pub mod test_helpers;

// Re-export commonly used items
pub use profiles::{linear_ramp, quadratic, sine_wave, spike};
pub use test_helpers::{assert_fields_close, max_abs_error, relative_error};
