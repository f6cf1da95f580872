//! fourier-rs: finite-difference diffusion-reaction kernels
//!
//! Numerical building blocks for the time evolution of a one-dimensional
//! field (e.g. temperature) on a uniform grid:
//!
//! ```text
//! ∂T/∂t = α · ∂/∂x(D · ∂T/∂x) + β · ∂T/∂x + S
//! ```
//!
//! discretised with central differences in space and advanced with the
//! classical fourth-order Runge-Kutta scheme in time.
//!
//! # Architecture
//!
//! 1. **Separation of Physics and Numerics**
//!    - [`physics`]: derivative operators, rate assembly, flux (what to solve)
//!    - [`solver`]: RK4 time step (how to advance it)
//!
//! 2. **Fail fast on bad inputs**
//!    - Every public operation validates lengths, spacing and time step
//!      and returns [`InvalidInputError`] instead of a silently wrong field
//!    - Validated kernels are pure: inputs are borrowed, outputs are new fields
//!
//! Grid construction, the time loop, and any I/O belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use fourier_rs::prelude::*;
//!
//! # fn main() -> Result<(), InvalidInputError> {
//! let n = 5;
//! let dx = 1.0;
//! let variable = Field::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
//! let zeros = Field::zeros(n);
//!
//! // Rate of change and one RK4 step
//! let rate = calc_k(&variable, &zeros, &zeros, &zeros, &zeros, dx)?;
//! let next = rungekutta(&variable, &zeros, &zeros, &zeros, &zeros, dx, 0.1)?;
//! assert_eq!(rate, Field::zeros(n));
//! assert_eq!(next, variable);
//!
//! // Diagnostic flux from a gradient
//! let q = calc_q(&Field::from_vec(vec![1.0, 2.0, 3.0]), 2.0)?;
//! assert_eq!(q.as_slice(), &[-2.0, -4.0, -6.0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `parallel`: run the interior stencil loops on rayon for grids larger
//!   than [`solver::parallel_threshold()`]

pub mod error;
pub mod physics;
pub mod solver;

pub use error::{InvalidInputError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use fourier_rs::prelude::*;
    //! ```
    pub use crate::error::InvalidInputError;
    pub use crate::physics::{
        Conductivity, DiffusionReaction, Field, RateModel, calc_k, calc_q, d2dx2, ddx,
    };
    pub use crate::solver::{RK4Stepper, rungekutta, validate_field};
}
