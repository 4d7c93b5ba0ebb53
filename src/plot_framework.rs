// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, ErrorBar, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    ERROR_BAR_CAP_PX, FONT_SIZE_CHART_TITLE, LINE_WIDTH_ERROR_BAR, LINE_WIDTH_LEGEND,
    MARKER_RADIUS_PX, PLOT_HEIGHT, PLOT_WIDTH, REFERENCE_LINE_DASHES,
};
use crate::font_config::{FONT_FAMILY_SYSTEM, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        // Keep tiny values (meters, residuals) visible without a huge empty margin
        (max.abs().max(min.abs()) * 0.15).max(1e-3)
    } else {
        range * 0.15
    };
    (min - padding, max + padding)
}

/// Formats an axis tick value with enough decimals for the plotted span.
/// Spans of 10 or more use integers; each decade below that adds a decimal, up to 6.
pub fn format_axis_value(value: f64, span: f64) -> String {
    let decimals = if !span.is_finite() || span <= 0.0 {
        2
    } else {
        let magnitude = span.log10().floor() as i32;
        (1 - magnitude).clamp(0, 6) as usize
    };
    let formatted = format!("{:.*}", decimals, value);
    // Avoid "-0.00" for values that round to zero
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let center_x = (x_range.end - x_range.start) / 2 - 150;
    let center_y = (y_range.end - y_range.start) / 2;
    let message = format!("{plot_type} Data Unavailable: {reason}");
    let text_style = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x.max(0), center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A measured point with symmetric uncertainties on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBarPoint {
    pub x: f64,
    pub y: f64,
    pub x_err: f64,
    pub y_err: f64,
}

/// Horizontal line across the full x range (e.g. the zero line of a residual plot).
#[derive(Clone)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: RGBColor,
    pub dashed: bool,
}

#[derive(Clone)]
pub struct ErrorBarPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub points: Vec<ErrorBarPoint>,
    pub points_label: String,
    pub points_color: RGBColor,
    pub series: Vec<PlotSeries>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_label: String,
    pub y_label: String,
}

/// Padded x/y ranges covering every point including its error bars, plus any
/// extra series data.
pub fn error_bar_ranges(points: &[ErrorBarPoint], series: &[PlotSeries]) -> Option<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for p in points {
        x_min = x_min.min(p.x - p.x_err);
        x_max = x_max.max(p.x + p.x_err);
        y_min = y_min.min(p.y - p.y_err);
        y_max = y_max.max(p.y + p.y_err);
    }
    for &(x, y) in series.iter().flat_map(|s| s.data.iter()) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !x_min.is_finite() || !y_min.is_finite() || !x_max.is_finite() || !y_max.is_finite() {
        return None;
    }

    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);
    Some((x_lo..x_hi, y_lo..y_hi))
}

/// Draws a single error-bar chart into `output_path`.
pub fn draw_error_bar_plot(output_path: &Path, plot_config: &ErrorBarPlotConfig) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;
    if plot_config.points.is_empty() || !valid_ranges {
        let reason = if plot_config.points.is_empty() {
            "No data points"
        } else {
            "Invalid ranges"
        };
        draw_unavailable_message(&root_area, &plot_config.title, reason)?;
        root_area.present()?;
        log::warn!(
            "'{}' saved with placeholder only: {}",
            output_path.display(),
            reason
        );
        return Ok(());
    }

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    let x_span = plot_config.x_range.end - plot_config.x_range.start;
    let y_span = plot_config.y_range.end - plot_config.y_range.start;
    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x, x_span))
        .y_label_formatter(&|y| format_axis_value(*y, y_span))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    // Reference lines go underneath the data
    for line in &plot_config.reference_lines {
        let x0 = plot_config.x_range.start;
        let x1 = plot_config.x_range.end;
        if line.dashed {
            // Draw dashed line by drawing small segments
            let segment_length = (x1 - x0) / (REFERENCE_LINE_DASHES as f64 * 2.0);
            for i in 0..REFERENCE_LINE_DASHES {
                let x_start = x0 + (i as f64 * 2.0) * segment_length;
                let x_end = (x_start + segment_length).min(x1);
                chart.draw_series(LineSeries::new(
                    vec![(x_start, line.y), (x_end, line.y)],
                    line.color.stroke_width(LINE_WIDTH_LEGEND),
                ))?;
            }
        } else {
            chart.draw_series(LineSeries::new(
                vec![(x0, line.y), (x1, line.y)],
                line.color.stroke_width(LINE_WIDTH_LEGEND),
            ))?;
        }
    }

    let mut legend_series_count = 0;

    let point_color = plot_config.points_color;
    chart.draw_series(plot_config.points.iter().map(|p| {
        ErrorBar::new_vertical(
            p.x,
            p.y - p.y_err,
            p.y,
            p.y + p.y_err,
            point_color.stroke_width(LINE_WIDTH_ERROR_BAR),
            ERROR_BAR_CAP_PX,
        )
    }))?;
    chart.draw_series(plot_config.points.iter().filter(|p| p.x_err > 0.0).map(|p| {
        ErrorBar::new_horizontal(
            p.y,
            p.x - p.x_err,
            p.x,
            p.x + p.x_err,
            point_color.stroke_width(LINE_WIDTH_ERROR_BAR),
            ERROR_BAR_CAP_PX,
        )
    }))?;

    let markers = chart.draw_series(
        plot_config
            .points
            .iter()
            .map(|p| Circle::new((p.x, p.y), MARKER_RADIUS_PX, point_color.filled())),
    )?;
    if !plot_config.points_label.is_empty() {
        markers
            .label(&plot_config.points_label)
            .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS_PX, point_color.filled()));
        legend_series_count += 1;
    }

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;

        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    s.color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    root_area.present()?;
    log::info!("Plot saved as '{}'.", output_path.display());
    Ok(())
}
