// src/error.rs

use std::io;

/// Errors raised while reading measurements or computing the fit.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("measurement table contains no data rows")]
    EmptyTable,

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("row {row}, column {column}: value is not finite")]
    NonFiniteValue { row: usize, column: usize },

    #[error("invalid answer to '{prompt}': '{value}'")]
    InvalidPrompt { prompt: String, value: String },

    #[error("input lengths differ: {x_len} displacements, {y_len} forces, {sigma_len} uncertainties")]
    LengthMismatch {
        x_len: usize,
        y_len: usize,
        sigma_len: usize,
    },

    #[error("uncertainty at point {index} must be finite and positive")]
    InvalidUncertainty { index: usize },

    #[error("fit through the origin is undefined: every displacement is zero")]
    DegenerateFit,
}
