// src/data_input/table_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::measurement_table::MeasurementTable;
use crate::error::AnalysisError;

/// Reads a tab-separated measurement file into a `MeasurementTable`.
///
/// Each non-blank line is one trial; each tab-separated value is the force
/// read at one displacement setting. Empty fields (trailing tabs, doubled
/// separators) are ignored.
pub fn parse_measurement_file(input_file_path: &Path) -> Result<MeasurementTable, AnalysisError> {
    let file = File::open(input_file_path)?;
    let reader = BufReader::new(file);

    // First pass: drop blank lines so the CSV reader only sees data rows
    let mut data_lines: Vec<String> = Vec::new();
    for line_result in reader.lines() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        data_lines.push(line);
    }

    log::debug!(
        "Read {} non-blank lines from '{}'",
        data_lines.len(),
        input_file_path.display()
    );

    parse_measurement_text(&data_lines.join("\n"))
}

/// Parses tab-separated measurement text already held in memory.
pub fn parse_measurement_text(content: &str) -> Result<MeasurementTable, AnalysisError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record_result in reader.records() {
        let record = record_result?;
        let row_number = rows.len() + 1;

        let mut row = Vec::with_capacity(record.len());
        for field in record.iter().filter(|f| !f.is_empty()) {
            let column = row.len() + 1;
            let value = field
                .parse::<f64>()
                .map_err(|_| AnalysisError::InvalidNumber {
                    row: row_number,
                    column,
                    value: field.to_string(),
                })?;
            row.push(value);
        }

        // A line holding only separators carries no trial
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }

    MeasurementTable::from_rows(rows)
}
