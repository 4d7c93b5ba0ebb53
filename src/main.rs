// src/main.rs

use std::env;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use spring_fit::constants::{
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, FORCE_PLOT_FILE_NAME, REPORT_FILE_NAME,
    RESIDUAL_PLOT_FILE_NAME,
};
use spring_fit::data_analysis::spring_analysis::{analyze, InstrumentUncertainty};
use spring_fit::data_input::displacement_prompt::read_displacement_settings;
use spring_fit::data_input::table_parser::parse_measurement_file;
use spring_fit::plot_functions::plot_force_displacement::plot_force_displacement;
use spring_fit::plot_functions::plot_residuals::plot_residuals;
use spring_fit::report::latex_table::write_latex_report;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [input_file.txt] [output_dir]");
    eprintln!("  input_file.txt  Tab-separated force readings, one trial per row (default: {DEFAULT_INPUT_FILE})");
    eprintln!("  output_dir      Directory for {REPORT_FILE_NAME}, {FORCE_PLOT_FILE_NAME} and {RESIDUAL_PLOT_FILE_NAME} (default: {DEFAULT_OUTPUT_DIR})");
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") || args.len() > 3 {
        print_usage(&args[0]);
        std::process::exit(1);
    }
    let input_path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT_FILE));
    let output_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_DIR));

    log::info!("spring_fit {}", spring_fit::crate_version());

    // --- Data Reading ---
    println!("--- Reading measurements from '{}' ---", input_path.display());
    let table = parse_measurement_file(&input_path)?;
    log::info!(
        "Read {} trials at {} displacements.",
        table.trial_count(),
        table.displacement_count()
    );

    let stdin = io::stdin();
    let settings = read_displacement_settings(&mut stdin.lock(), &mut io::stdout())?;

    // --- Analysis ---
    let analysis = analyze(&table, &settings, InstrumentUncertainty::default())?;
    println!(
        "\nSpring constant k = {:.4} N/m ± {:.4} N/m",
        analysis.spring_constant(),
        analysis.spring_constant_uncertainty()
    );
    if let Some(reduced) = analysis.fit.reduced_chi_squared() {
        log::info!("Reduced chi-squared: {:.3}", reduced);
    }

    // --- Outputs ---
    println!("\n--- Writing outputs to '{}' ---", output_dir.display());
    write_latex_report(&output_dir.join(REPORT_FILE_NAME), &analysis.table_entries())?;
    render_plot(&output_dir.join(FORCE_PLOT_FILE_NAME), |path| {
        plot_force_displacement(&analysis, path)
    })?;
    render_plot(&output_dir.join(RESIDUAL_PLOT_FILE_NAME), |path| {
        plot_residuals(&analysis, path)
    })?;

    Ok(())
}

fn render_plot<F>(output_path: &Path, draw: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&Path) -> Result<(), Box<dyn Error>>,
{
    draw(output_path).map_err(|e| {
        log::error!("Failed to render '{}': {}", output_path.display(), e);
        e
    })
}

// src/main.rs
