//! Spatial operators and rate models
//!
//! This module provides the "physics" half of the crate: finite-difference
//! derivative operators on a uniform 1D grid, the assembly of the
//! diffusion-advection-reaction rate, and the conductive flux.
//!
//! # Core Concepts
//!
//! - **Field**: values of a scalar quantity at N equally spaced points
//! - **Stencil**: central differences in the interior, optional one-sided edges
//! - **Rate model**: right-hand side `f(T)` of `∂T/∂t = f(T)`
//!
//! # Architecture
//!
//! Rate models are **separate from time integration**:
//! - The model provides the **equations** (this module)
//! - The stepper provides the **method** (see [`solver`](crate::solver))
//!
//! # Example
//!
//! ```rust
//! use fourier_rs::physics::{calc_q, ddx, DiffusionReaction, Field, RateModel};
//!
//! let dx = 0.1;
//! let temperature = Field::from_fn(11, |i, _| 300.0 + 10.0 * (i as f64 * dx));
//!
//! // Gradient and flux for diagnostics
//! let gradient = ddx(&temperature, dx, true).unwrap();
//! let q = calc_q(&gradient, 2.0).unwrap();
//! assert!((q[5] + 20.0).abs() < 1e-9);
//!
//! // Rate of change for the integrator
//! let model = DiffusionReaction::uniform(11, 1.0, 0.0, 0.5, dx).unwrap();
//! let rate = model.rate(&temperature).unwrap();
//! assert_eq!(rate.len(), 11);
//! ```

// module declaration
pub mod field;
pub mod flux;
pub mod operator;
pub mod stencil;
pub mod traits;

// re-export commonly used types for convenience
pub use field::{Conductivity, Field, MIN_POINTS};
pub use flux::calc_q;
pub use operator::{DiffusionReaction, calc_k};
pub use stencil::{d2dx2, ddx};
pub use traits::RateModel;
