// src/data_input/measurement_table.rs

use ndarray::{Array2, ArrayView1, Axis};

use crate::error::AnalysisError;

/// Force readings laid out as rows = repeated trials, columns = displacement settings.
/// All values are finite and every column has the same trial count.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    forces: Array2<f64>,
}

impl MeasurementTable {
    /// Builds a table from parsed rows, rejecting empty input, ragged rows and
    /// non-finite values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(AnalysisError::EmptyTable),
        };

        let mut flat = Vec::with_capacity(rows.len() * expected);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(AnalysisError::RaggedRow {
                    row: row_index + 1,
                    expected,
                    found: row.len(),
                });
            }
            for (col_index, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AnalysisError::NonFiniteValue {
                        row: row_index + 1,
                        column: col_index + 1,
                    });
                }
                flat.push(value);
            }
        }

        let forces = Array2::from_shape_vec((rows.len(), expected), flat)
            .map_err(|_| AnalysisError::EmptyTable)?;
        Ok(Self { forces })
    }

    /// Number of repeated trials per displacement.
    pub fn trial_count(&self) -> usize {
        self.forces.nrows()
    }

    /// Number of displacement settings.
    pub fn displacement_count(&self) -> usize {
        self.forces.ncols()
    }

    /// Trials recorded at displacement `index`.
    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.forces.column(index)
    }

    pub fn columns(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.forces.axis_iter(Axis(1))
    }

    pub fn forces(&self) -> &Array2<f64> {
        &self.forces
    }
}
