// src/data_analysis/weighted_fit.rs

use crate::error::AnalysisError;

/// Result of a weighted least-squares fit of y = k·x (no intercept).
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Best-fit proportionality constant k.
    pub slope: f64,
    /// One-sigma uncertainty of k from the fit covariance.
    pub slope_uncertainty: f64,
    /// Residuals yᵢ − k·xᵢ.
    pub residuals: Vec<f64>,
    /// χ² = Σ (rᵢ / σᵢ)².
    pub chi_squared: f64,
}

impl FitResult {
    /// χ² per degree of freedom. `None` with fewer than two points.
    pub fn reduced_chi_squared(&self) -> Option<f64> {
        let dof = self.residuals.len().checked_sub(1)?;
        if dof == 0 {
            return None;
        }
        Some(self.chi_squared / dof as f64)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x
    }
}

/// Fits y = k·x by weighted least squares with weights wᵢ = 1/σᵢ².
///
/// The uncertainties are taken as absolute: the variance of k is
/// 1 / Σ wᵢxᵢ² and is not rescaled by the goodness of fit.
///
/// # Errors
/// * `LengthMismatch` if the three slices differ in length
/// * `InvalidUncertainty` if any σᵢ is zero, negative or not finite
/// * `DegenerateFit` if Σ wᵢxᵢ² is zero (no point away from the origin)
pub fn fit_proportional(x: &[f64], y: &[f64], sigma: &[f64]) -> Result<FitResult, AnalysisError> {
    if x.len() != y.len() || x.len() != sigma.len() {
        return Err(AnalysisError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
            sigma_len: sigma.len(),
        });
    }

    if let Some(index) = sigma.iter().position(|s| !s.is_finite() || *s <= 0.0) {
        return Err(AnalysisError::InvalidUncertainty { index });
    }

    let mut sum_wxx = 0.0;
    let mut sum_wxy = 0.0;
    for ((&xi, &yi), &si) in x.iter().zip(y).zip(sigma) {
        let w = 1.0 / (si * si);
        sum_wxx += w * xi * xi;
        sum_wxy += w * xi * yi;
    }

    if !sum_wxx.is_finite() || sum_wxx <= 0.0 {
        return Err(AnalysisError::DegenerateFit);
    }

    let slope = sum_wxy / sum_wxx;
    let slope_uncertainty = (1.0 / sum_wxx).sqrt();

    let residuals: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| yi - slope * xi)
        .collect();
    let chi_squared = residuals
        .iter()
        .zip(sigma)
        .map(|(r, s)| (r / s).powi(2))
        .sum();

    Ok(FitResult {
        slope,
        slope_uncertainty,
        residuals,
        chi_squared,
    })
}
