//! Diffusion-advection-reaction rate assembly
//!
//! # Equation
//!
//! The rate of change of the field T on a 1D grid is
//!
//! ```text
//! ∂T/∂t = α · ∂/∂x(D · ∂T/∂x) + β · ∂T/∂x + S
//! ```
//!
//! Where:
//! - **α** (`alfa`) : Diffusion coefficient profile
//! - **D** (`dif`) : Diffusivity inside the flux term
//! - **β** (`beta`) : Advection / linear coefficient profile
//! - **S** (`interaccion`) : Source or interaction term
//!
//! # Discretisation
//!
//! Both first derivatives use [`ddx`](crate::physics::ddx) in `full` mode, so
//! the edge rates are one-sided differences and are never silently zero.
//! The assembly is evaluated in a fixed order,
//! `(α∘X + β∘∂T/∂x) + S`, which keeps repeated runs bit-identical.

use log::debug;

use crate::error::Result;
use crate::physics::field::{
    Field, MIN_POINTS, check_aligned, check_operator_inputs, check_points, check_positive,
};
use crate::physics::stencil::ddx_unchecked;
use crate::physics::traits::RateModel;

// =================================================================================================
// Free-function assembly
// =================================================================================================

/// Instantaneous rate of change of `variable`
///
/// Returns `alfa ∘ ddx(dif ∘ ddx(variable)) + beta ∘ ddx(variable) + interaccion`,
/// all products elementwise, all derivatives with one-sided edges.
///
/// # Arguments
///
/// * `variable` - Current field T (at least 3 points)
/// * `interaccion` - Source term S added to the rate
/// * `alfa` - Coefficient applied to the diffusive flux divergence
/// * `beta` - Coefficient applied to the gradient
/// * `dif` - Diffusivity inside the flux term
/// * `dx` - Grid spacing
///
/// # Errors
///
/// [`InvalidInputError`](crate::InvalidInputError) when any field differs in
/// length from `variable`, `variable` has fewer than 3 points, or `dx` is
/// not a positive finite number.
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{calc_k, Field};
///
/// let variable = Field::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// let zeros = Field::zeros(5);
///
/// // No coefficients and no source: the field does not evolve
/// let rate = calc_k(&variable, &zeros, &zeros, &zeros, &zeros, 1.0).unwrap();
/// assert!(rate.iter().all(|&r| r == 0.0));
/// ```
pub fn calc_k(
    variable: &Field,
    interaccion: &Field,
    alfa: &Field,
    beta: &Field,
    dif: &Field,
    dx: f64,
) -> Result<Field> {
    check_operator_inputs(variable, interaccion, alfa, beta, dif, dx)?;
    Ok(calc_k_unchecked(variable, interaccion, alfa, beta, dif, dx))
}

/// [`calc_k`] without argument validation
pub(crate) fn calc_k_unchecked(
    variable: &Field,
    interaccion: &Field,
    alfa: &Field,
    beta: &Field,
    dif: &Field,
    dx: f64,
) -> Field {
    let gradient = ddx_unchecked(variable, dx, true);
    let flux_divergence = ddx_unchecked(&dif.component_mul(&gradient), dx, true);

    alfa.component_mul(&flux_divergence) + beta.component_mul(&gradient) + interaccion
}

// =================================================================================================
// Diffusion-reaction model
// =================================================================================================

/// Variable-coefficient diffusion-advection-reaction model
///
/// Owns the coefficient profiles and the grid spacing, validated once at
/// construction. Its [`rate`](RateModel::rate) is [`calc_k`].
///
/// # Example
///
/// ```rust
/// use fourier_rs::physics::{DiffusionReaction, Field, RateModel};
///
/// let n = 11;
/// let model = DiffusionReaction::new(
///     Field::zeros(n),              // interaccion
///     Field::from_element(n, 1.0),  // alfa
///     Field::zeros(n),              // beta
///     Field::from_element(n, 0.5),  // dif
///     0.1,                          // dx
/// ).unwrap();
///
/// assert_eq!(model.points(), 11);
/// let rate = model.rate(&Field::from_element(n, 20.0)).unwrap();
/// assert!(rate.iter().all(|r| r.abs() < 1e-12));
/// ```
#[derive(Debug, Clone)]
pub struct DiffusionReaction {
    /// Source / interaction term S
    interaccion: Field,

    /// Coefficient on the flux divergence α
    alfa: Field,

    /// Coefficient on the gradient β
    beta: Field,

    /// Diffusivity inside the flux D
    dif: Field,

    /// Grid spacing Δx
    dx: f64,
}

impl DiffusionReaction {
    /// Creates a model from aligned coefficient profiles
    ///
    /// `interaccion` fixes the number of points; `alfa`, `beta` and `dif`
    /// must match it.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError`](crate::InvalidInputError) when fewer than 3
    /// points are given, the profiles are not aligned, or `dx` is not a
    /// positive finite number.
    pub fn new(interaccion: Field, alfa: Field, beta: Field, dif: Field, dx: f64) -> Result<Self> {
        check_positive("dx", dx)?;
        check_points("interaccion", &interaccion, MIN_POINTS)?;

        let n = interaccion.len();
        check_aligned("alfa", &alfa, n)?;
        check_aligned("beta", &beta, n)?;
        check_aligned("dif", &dif, n)?;

        debug!("DiffusionReaction: {} points, dx = {}", n, dx);

        Ok(Self {
            interaccion,
            alfa,
            beta,
            dif,
            dx,
        })
    }

    /// Model with uniform coefficients and no source
    ///
    /// Convenient for the constant-coefficient heat equation
    /// `∂T/∂t = α·D·∂²T/∂x²` when `beta = 0`.
    pub fn uniform(points: usize, alfa: f64, beta: f64, dif: f64, dx: f64) -> Result<Self> {
        Self::new(
            Field::zeros(points),
            Field::from_element(points, alfa),
            Field::from_element(points, beta),
            Field::from_element(points, dif),
            dx,
        )
    }

    /// Source / interaction term
    pub fn interaccion(&self) -> &Field {
        &self.interaccion
    }

    /// Coefficient on the flux divergence
    pub fn alfa(&self) -> &Field {
        &self.alfa
    }

    /// Coefficient on the gradient
    pub fn beta(&self) -> &Field {
        &self.beta
    }

    /// Diffusivity inside the flux
    pub fn dif(&self) -> &Field {
        &self.dif
    }

    /// Grid spacing
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Replace the source term, keeping the other coefficients
    ///
    /// Used by drivers whose source changes between steps.
    pub fn with_interaccion(mut self, interaccion: Field) -> Result<Self> {
        check_aligned("interaccion", &interaccion, self.points())?;
        self.interaccion = interaccion;
        Ok(self)
    }
}

impl RateModel for DiffusionReaction {
    fn points(&self) -> usize {
        self.interaccion.len()
    }

    fn rate(&self, variable: &Field) -> Result<Field> {
        check_aligned("variable", variable, self.points())?;
        Ok(calc_k_unchecked(
            variable,
            &self.interaccion,
            &self.alfa,
            &self.beta,
            &self.dif,
            self.dx,
        ))
    }

    fn name(&self) -> &str {
        "Diffusion-Reaction 1D"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Variable-coefficient diffusion-advection-reaction operator \
             with central differences and one-sided edges.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
