// src/report/latex_table.rs

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::data_analysis::spring_analysis::TableEntry;
use crate::error::AnalysisError;

const DOCUMENT_PREAMBLE: &str = r"\documentclass{article}
\usepackage[utf8]{inputenc}
\usepackage{siunitx}
\sisetup{
  per-mode=symbol
}
\begin{document}

\begin{table}[h]
\centering
\begin{tabular}{c c}
\hline
\textbf{Displacement (cm)} & \textbf{Force (N)} \\
\hline
";

const DOCUMENT_CLOSING: &str = r"\hline
\end{tabular}
\caption{Force measurements as a function of displacement.}
\label{tab:force_displacement}
\end{table}

\end{document}
";

/// Formats one table row: displacement to 2 decimals, force to 4 decimals.
pub fn format_table_row(entry: &TableEntry) -> String {
    format!(
        r"$\SI{{{:.2} \pm {:.2}}}{{\centi\meter}}$ & $\SI{{{:.4} \pm {:.4}}}{{\newton}}$ \\",
        entry.displacement_cm,
        entry.displacement_uncertainty_cm,
        entry.mean_force_n,
        entry.total_uncertainty_n
    )
}

/// Builds the standalone LaTeX document holding the displacement/force table.
pub fn generate_latex_table(entries: &[TableEntry]) -> String {
    let mut document = String::from(DOCUMENT_PREAMBLE);
    for entry in entries {
        let _ = writeln!(document, "{}", format_table_row(entry));
    }
    document.push_str(DOCUMENT_CLOSING);
    document
}

/// Writes the LaTeX report to `output_path`.
pub fn write_latex_report(output_path: &Path, entries: &[TableEntry]) -> Result<(), AnalysisError> {
    fs::write(output_path, generate_latex_table(entries))?;
    log::info!(
        "LaTeX table with {} rows saved as '{}'.",
        entries.len(),
        output_path.display()
    );
    Ok(())
}
