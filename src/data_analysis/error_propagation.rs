// src/data_analysis/error_propagation.rs

/// Force uncertainty contributed by the displacement uncertainty through F = k·x.
pub fn displacement_force_uncertainty(slope: f64, displacement_uncertainty_m: f64) -> f64 {
    (slope * displacement_uncertainty_m).abs()
}

/// Combines each statistical force uncertainty with the displacement
/// contribution in quadrature.
pub fn total_uncertainties(force_uncertainties: &[f64], displacement_contribution: f64) -> Vec<f64> {
    force_uncertainties
        .iter()
        .map(|sigma| sigma.hypot(displacement_contribution))
        .collect()
}
