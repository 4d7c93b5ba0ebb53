// src/data_analysis/spring_analysis.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // Import QuantileExt for .min() and .max() on Array1

use crate::constants::{DISPLACEMENT_UNCERTAINTY_CM, FORCE_SENSOR_RESOLUTION_N};
use crate::data_analysis::displacement::{cm_to_m, DisplacementSettings};
use crate::data_analysis::error_propagation::{displacement_force_uncertainty, total_uncertainties};
use crate::data_analysis::statistics::{table_statistics, ColumnStatistics};
use crate::data_analysis::weighted_fit::{fit_proportional, FitResult};
use crate::data_input::measurement_table::MeasurementTable;
use crate::error::AnalysisError;

/// Instrument characteristics used by the analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentUncertainty {
    /// Absolute uncertainty of the displacement scale (cm).
    pub displacement_cm: f64,
    /// Force sensor resolution (N), the floor for degenerate standard errors.
    pub force_resolution_n: f64,
}

impl Default for InstrumentUncertainty {
    fn default() -> Self {
        Self {
            displacement_cm: DISPLACEMENT_UNCERTAINTY_CM,
            force_resolution_n: FORCE_SENSOR_RESOLUTION_N,
        }
    }
}

/// One row of the report table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    pub displacement_cm: f64,
    pub displacement_uncertainty_cm: f64,
    pub mean_force_n: f64,
    pub total_uncertainty_n: f64,
}

/// Everything computed from one measurement table.
#[derive(Debug, Clone)]
pub struct SpringAnalysis {
    pub displacements_cm: Vec<f64>,
    pub displacements_m: Array1<f64>,
    pub statistics: Vec<ColumnStatistics>,
    pub fit: FitResult,
    pub instrument: InstrumentUncertainty,
    /// k·Δx, the force uncertainty caused by the displacement uncertainty.
    pub displacement_force_uncertainty_n: f64,
    pub total_uncertainties_n: Vec<f64>,
}

impl SpringAnalysis {
    /// Spring constant k (N/m).
    pub fn spring_constant(&self) -> f64 {
        self.fit.slope
    }

    /// One-sigma uncertainty of k (N/m).
    pub fn spring_constant_uncertainty(&self) -> f64 {
        self.fit.slope_uncertainty
    }

    pub fn mean_forces(&self) -> Vec<f64> {
        self.statistics.iter().map(|s| s.mean).collect()
    }

    pub fn displacement_uncertainty_m(&self) -> f64 {
        cm_to_m(self.instrument.displacement_cm)
    }

    pub fn table_entries(&self) -> Vec<TableEntry> {
        self.displacements_cm
            .iter()
            .zip(&self.statistics)
            .zip(&self.total_uncertainties_n)
            .map(|((&x, stats), &df)| TableEntry {
                displacement_cm: x,
                displacement_uncertainty_cm: self.instrument.displacement_cm,
                mean_force_n: stats.mean,
                total_uncertainty_n: df,
            })
            .collect()
    }

    /// Smallest and largest displacement (m).
    pub fn displacement_span_m(&self) -> (f64, f64) {
        let min = self.displacements_m.min().copied().unwrap_or(0.0);
        let max = self.displacements_m.max().copied().unwrap_or(0.0);
        (min, max)
    }

    /// Fitted line evaluated at `samples` evenly spaced displacements (m).
    pub fn fit_line(&self, samples: usize) -> Vec<(f64, f64)> {
        let (x_min, x_max) = self.displacement_span_m();
        Array1::linspace(x_min, x_max, samples)
            .iter()
            .map(|&x| (x, self.fit.predict(x)))
            .collect()
    }
}

/// Runs the full analysis: statistics, weighted fit through the origin and
/// error propagation.
pub fn analyze(
    table: &MeasurementTable,
    settings: &DisplacementSettings,
    instrument: InstrumentUncertainty,
) -> Result<SpringAnalysis, AnalysisError> {
    let count = table.displacement_count();
    let displacements_cm = settings.sequence_cm(count);
    let displacements_m = settings.sequence_m(count);

    let statistics = table_statistics(table, instrument.force_resolution_n);
    let mean_forces: Vec<f64> = statistics.iter().map(|s| s.mean).collect();
    let force_uncertainties: Vec<f64> = statistics.iter().map(|s| s.std_error).collect();

    for (i, (x, s)) in displacements_cm.iter().zip(&statistics).enumerate() {
        log::debug!(
            "  Displacement {}: x = {:.2} cm, F = {:.4} N, sem = {:.4} N",
            i,
            x,
            s.mean,
            s.std_error
        );
    }

    let fit = fit_proportional(
        displacements_m.as_slice().unwrap_or(&[]),
        &mean_forces,
        &force_uncertainties,
    )?;

    let displacement_force_uncertainty_n =
        displacement_force_uncertainty(fit.slope, cm_to_m(instrument.displacement_cm));
    let total_uncertainties_n =
        total_uncertainties(&force_uncertainties, displacement_force_uncertainty_n);

    Ok(SpringAnalysis {
        displacements_cm,
        displacements_m,
        statistics,
        fit,
        instrument,
        displacement_force_uncertainty_n,
        total_uncertainties_n,
    })
}
