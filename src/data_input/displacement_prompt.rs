// src/data_input/displacement_prompt.rs

use std::io::{BufRead, Write};

use crate::data_analysis::displacement::DisplacementSettings;
use crate::error::AnalysisError;

pub const PROMPT_INITIAL_DISPLACEMENT: &str = "Enter the initial displacement (in cm): ";
pub const PROMPT_DISPLACEMENT_INCREMENT: &str = "Enter the displacement increment (in cm): ";

/// Asks for the initial displacement and the increment, both in centimeters.
///
/// Generic over the reader/writer so the prompts can be driven from stdin in
/// the binary and from in-memory buffers in tests.
pub fn read_displacement_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<DisplacementSettings, AnalysisError> {
    let initial_cm = prompt_f64(input, output, PROMPT_INITIAL_DISPLACEMENT)?;
    let increment_cm = prompt_f64(input, output, PROMPT_DISPLACEMENT_INCREMENT)?;
    Ok(DisplacementSettings {
        initial_cm,
        increment_cm,
    })
}

fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, AnalysisError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    match answer.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AnalysisError::InvalidPrompt {
            prompt: prompt.trim().trim_end_matches(':').to_string(),
            value: answer.to_string(),
        }),
    }
}
