// src/plot_functions/plot_residuals.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_MEASUREMENT, COLOR_ZERO_REFERENCE};
use crate::data_analysis::spring_analysis::SpringAnalysis;
use crate::plot_framework::{
    draw_error_bar_plot, error_bar_ranges, ErrorBarPlotConfig, ErrorBarPoint, ReferenceLine,
};

/// Residuals of the fit with their total uncertainty, and a dashed zero line.
pub fn residuals_config(analysis: &SpringAnalysis) -> Option<ErrorBarPlotConfig> {
    let points: Vec<ErrorBarPoint> = analysis
        .displacements_m
        .iter()
        .zip(&analysis.fit.residuals)
        .zip(&analysis.total_uncertainties_n)
        .map(|((&x, &r), &df)| ErrorBarPoint {
            x,
            y: r,
            x_err: 0.0,
            y_err: df,
        })
        .collect();

    let (x_range, mut y_range) = error_bar_ranges(&points, &[])?;
    // Keep the zero line inside the chart
    y_range.start = y_range.start.min(-y_range.end.abs() * 0.1);
    y_range.end = y_range.end.max(y_range.start.abs() * 0.1);

    Some(ErrorBarPlotConfig {
        title: "Fit Residuals".to_string(),
        x_range,
        y_range,
        points,
        points_label: String::new(),
        points_color: *COLOR_MEASUREMENT,
        series: Vec::new(),
        reference_lines: vec![ReferenceLine {
            y: 0.0,
            color: *COLOR_ZERO_REFERENCE,
            dashed: true,
        }],
        x_label: "Displacement (m)".to_string(),
        y_label: "Residual (N)".to_string(),
    })
}

/// Generates the residuals vs displacement plot.
pub fn plot_residuals(analysis: &SpringAnalysis, output_path: &Path) -> Result<(), Box<dyn Error>> {
    match residuals_config(analysis) {
        Some(config) => draw_error_bar_plot(output_path, &config),
        None => Err("no plottable residual data".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::displacement::DisplacementSettings;
    use crate::data_analysis::spring_analysis::{analyze, InstrumentUncertainty};
    use crate::data_input::measurement_table::MeasurementTable;

    #[test]
    fn test_residual_points_and_zero_line() {
        let table = MeasurementTable::from_rows(vec![
            vec![0.52, 0.98, 1.55],
            vec![0.50, 1.00, 1.53],
        ])
        .unwrap();
        let settings = DisplacementSettings {
            initial_cm: 1.0,
            increment_cm: 1.0,
        };
        let analysis = analyze(&table, &settings, InstrumentUncertainty::default()).unwrap();
        let config = residuals_config(&analysis).unwrap();

        assert_eq!(config.points.len(), 3);
        for (point, r) in config.points.iter().zip(&analysis.fit.residuals) {
            assert_eq!(point.y, *r);
            assert_eq!(point.x_err, 0.0);
        }
        assert_eq!(config.reference_lines.len(), 1);
        assert!(config.reference_lines[0].dashed);
        assert!(config.y_range.start < 0.0 && config.y_range.end > 0.0);
    }

    #[test]
    fn test_zero_line_visible_when_all_residuals_positive() {
        // With x = 0 for the first point its residual equals its mean force
        let table = MeasurementTable::from_rows(vec![vec![5.0, 1.0], vec![5.0, 1.0]]).unwrap();
        let settings = DisplacementSettings {
            initial_cm: 0.0,
            increment_cm: 1.0,
        };
        let analysis = analyze(&table, &settings, InstrumentUncertainty::default()).unwrap();
        let config = residuals_config(&analysis).unwrap();
        assert!(config.y_range.start < 0.0);
        assert!(config.y_range.end > 0.0);
    }
}
