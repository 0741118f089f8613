//! Isotropic Gaussian evaluation over coordinate vectors and grids.
//!
//! Two evaluation strategies are provided for the 2D field: the direct
//! closed-form formula, and the product of two independent 1D factors.
//! Their results are proportional rather than identical: the direct
//! formula scales by `u0 / (2*pi*sigma^2)` while each 1D factor carries
//! `u0 / sqrt(2*pi*sigma)`, so the product scales by `u0^2 / (2*pi*sigma)`.
//! The elementwise ratio direct/separable is therefore the constant
//! `1 / (u0 * sigma)` across the whole grid. Amplitude is a visual scaling
//! knob here, not a probability normalization.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::math::{Array1, Array2};

/// Length scale the default spread is derived from.
pub const DEFAULT_LENGTH_SCALE: f64 = 1.0;

/// Default peak amplitude `u0`.
pub const DEFAULT_AMPLITUDE: f64 = 0.05;

/// Read-only parameters for one evaluation call.
///
/// A `None` center means "the arithmetic mean of the coordinate argument
/// actually passed to that call", resolved once at the start of the
/// evaluation. `gaussian_1d` reads `center_x` as its single-axis center.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct GaussianParams {
    pub amplitude: f64,
    pub sigma: f64,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            sigma: 0.1 * DEFAULT_LENGTH_SCALE,
            center_x: None,
            center_y: None,
        }
    }
}

impl GaussianParams {
    fn checked_sigma(&self) -> Result<f64, FieldError> {
        // Also rejects NaN, which fails the `>` comparison.
        if self.sigma > 0.0 {
            Ok(self.sigma)
        } else {
            Err(FieldError::NonPositiveSigma(self.sigma))
        }
    }
}

#[inline]
fn gauss_1d_at(x: f64, amplitude: f64, center: f64, sigma: f64) -> f64 {
    let d = x - center;
    amplitude / (2.0 * PI * sigma).sqrt() * (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// Evaluate `u0 / sqrt(2*pi*sigma) * exp(-(x - x0)^2 / (2*sigma^2))`
/// elementwise over a coordinate vector.
///
/// The peak value at the center is `u0 / sqrt(2*pi*sigma)`.
pub fn gaussian_1d(x: &Array1<f64>, params: &GaussianParams) -> Result<Array1<f64>, FieldError> {
    let sigma = params.checked_sigma()?;
    let center = match params.center_x {
        Some(c) => c,
        None => x.mean().ok_or(FieldError::EmptyCoordinates)?,
    };
    Ok(x.mapv(|&v| gauss_1d_at(v, params.amplitude, center, sigma)))
}

/// Evaluate the isotropic 2D Gaussian with the direct formula
/// `u0 / (2*pi*sigma^2) * exp(-((x-x0)^2 + (y-y0)^2) / (2*sigma^2))`
/// elementwise over matched-shape coordinate matrices.
///
/// The peak value at the center is `u0 / (2*pi*sigma^2)`.
pub fn gaussian_2d(
    x: &Array2<f64>,
    y: &Array2<f64>,
    params: &GaussianParams,
) -> Result<Array2<f64>, FieldError> {
    let (x0, y0, sigma) = resolve_2d(x, y, params)?;

    log::debug!(
        "Evaluating direct 2D gaussian over {}x{} grid (sigma={}, center=({}, {}))",
        x.nrows(),
        x.ncols(),
        sigma,
        x0,
        y0
    );

    let norm = params.amplitude / (2.0 * PI * sigma * sigma);
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
    Ok(x.zip_mapv(y, |&xv, &yv| {
        let dx = xv - x0;
        let dy = yv - y0;
        norm * (-(dx * dx + dy * dy) * inv_two_sigma_sq).exp()
    }))
}

/// Evaluate the same field as the elementwise product of two 1D factors,
/// one per axis, with the same amplitude, center defaulting, and sigma
/// conventions as [`gaussian_1d`].
///
/// See the module docs for how this field's scale relates to
/// [`gaussian_2d`]'s.
pub fn gaussian_2d_separable(
    x: &Array2<f64>,
    y: &Array2<f64>,
    params: &GaussianParams,
) -> Result<Array2<f64>, FieldError> {
    let (x0, y0, sigma) = resolve_2d(x, y, params)?;

    let gx = x.mapv(|&v| gauss_1d_at(v, params.amplitude, x0, sigma));
    let gy = y.mapv(|&v| gauss_1d_at(v, params.amplitude, y0, sigma));
    Ok(gx.zip_mapv(&gy, |&a, &b| a * b))
}

/// Shared validation and center resolution for the 2D evaluators.
fn resolve_2d(
    x: &Array2<f64>,
    y: &Array2<f64>,
    params: &GaussianParams,
) -> Result<(f64, f64, f64), FieldError> {
    if x.shape() != y.shape() {
        return Err(FieldError::ShapeMismatch {
            left: x.shape(),
            right: y.shape(),
        });
    }
    let sigma = params.checked_sigma()?;
    let x0 = match params.center_x {
        Some(c) => c,
        None => x.mean().ok_or(FieldError::EmptyCoordinates)?,
    };
    let y0 = match params.center_y {
        Some(c) => c,
        None => y.mean().ok_or(FieldError::EmptyCoordinates)?,
    };
    Ok((x0, y0, sigma))
}
