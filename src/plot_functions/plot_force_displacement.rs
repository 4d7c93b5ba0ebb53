// src/plot_functions/plot_force_displacement.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_FIT_LINE, COLOR_MEASUREMENT, FIT_LINE_SAMPLES, LINE_WIDTH_PLOT};
use crate::data_analysis::spring_analysis::SpringAnalysis;
use crate::plot_framework::{
    draw_error_bar_plot, error_bar_ranges, ErrorBarPlotConfig, ErrorBarPoint, PlotSeries,
};

/// Legend text of the fitted line, f = (k ± dk)x.
pub fn fit_label(analysis: &SpringAnalysis) -> String {
    format!(
        "Linear fit: f = ({:.2} ± {:.2})x",
        analysis.spring_constant(),
        analysis.spring_constant_uncertainty()
    )
}

/// Builds the force vs displacement chart: measured means with error bars on
/// both axes and the fitted line through the origin.
pub fn force_displacement_config(analysis: &SpringAnalysis) -> Option<ErrorBarPlotConfig> {
    let dx = analysis.displacement_uncertainty_m();
    let points: Vec<ErrorBarPoint> = analysis
        .displacements_m
        .iter()
        .zip(&analysis.statistics)
        .zip(&analysis.total_uncertainties_n)
        .map(|((&x, stats), &df)| ErrorBarPoint {
            x,
            y: stats.mean,
            x_err: dx,
            y_err: df,
        })
        .collect();

    let series = vec![PlotSeries {
        data: analysis.fit_line(FIT_LINE_SAMPLES),
        label: fit_label(analysis),
        color: *COLOR_FIT_LINE,
        stroke_width: LINE_WIDTH_PLOT,
    }];

    let (x_range, y_range) = error_bar_ranges(&points, &series)?;

    Some(ErrorBarPlotConfig {
        title: "Force vs Displacement".to_string(),
        x_range,
        y_range,
        points,
        points_label: "Experimental data".to_string(),
        points_color: *COLOR_MEASUREMENT,
        series,
        reference_lines: Vec::new(),
        x_label: "Displacement (m)".to_string(),
        y_label: "Force (N)".to_string(),
    })
}

/// Generates the force vs displacement plot.
pub fn plot_force_displacement(analysis: &SpringAnalysis, output_path: &Path) -> Result<(), Box<dyn Error>> {
    match force_displacement_config(analysis) {
        Some(config) => draw_error_bar_plot(output_path, &config),
        None => Err("no plottable force/displacement data".into()),
    }
}
