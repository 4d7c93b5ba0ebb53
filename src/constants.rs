// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE_700, ORANGE};
use plotters::style::colors::RED;
use plotters::style::RGBColor;

// --- Instrument Constants ---

// Absolute uncertainty of the displacement scale, in centimeters.
pub const DISPLACEMENT_UNCERTAINTY_CM: f64 = 0.05;

// Resolution of the force sensor, in newtons. Used as the uncertainty floor
// when repeated trials are identical.
pub const FORCE_SENSOR_RESOLUTION_N: f64 = 0.0125;

pub const CM_PER_M: f64 = 100.0;

// --- Input / Output Files ---
pub const DEFAULT_INPUT_FILE: &str = "data.txt";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const REPORT_FILE_NAME: &str = "table.tex";
pub const FORCE_PLOT_FILE_NAME: &str = "force_vs_displacement.png";
pub const RESIDUAL_PLOT_FILE_NAME: &str = "residuals.png";

// Number of points used to draw the fitted line.
pub const FIT_LINE_SAMPLES: usize = 100;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 600;

// --- Plot Color Assignments ---
pub const COLOR_MEASUREMENT: &RGBColor = &BLUE_700;
pub const COLOR_FIT_LINE: &RGBColor = &ORANGE;
pub const COLOR_ZERO_REFERENCE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_ERROR_BAR: u32 = 1;

// Marker geometry
pub const MARKER_RADIUS_PX: i32 = 4;
pub const ERROR_BAR_CAP_PX: u32 = 8;

// Number of dash segments used for the residual zero line
pub const REFERENCE_LINE_DASHES: usize = 30;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;

// src/constants.rs
