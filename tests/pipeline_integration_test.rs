// tests/pipeline_integration_test.rs

use std::fs;
use std::io::Cursor;

use spring_fit::constants::{FORCE_SENSOR_RESOLUTION_N, REPORT_FILE_NAME};
use spring_fit::data_analysis::spring_analysis::{analyze, InstrumentUncertainty};
use spring_fit::data_input::displacement_prompt::read_displacement_settings;
use spring_fit::data_input::table_parser::parse_measurement_file;
use spring_fit::error::AnalysisError;
use spring_fit::report::latex_table::write_latex_report;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_to_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        fs::write(&input, "1.0\t2.0\n\n1.0\t2.0\n1.0\t2.0\n").unwrap();

        let table = parse_measurement_file(&input).unwrap();
        assert_eq!(table.trial_count(), 3);
        assert_eq!(table.displacement_count(), 2);

        let settings = read_displacement_settings(&mut Cursor::new("1\n1\n"), &mut Vec::new()).unwrap();
        let analysis = analyze(&table, &settings, InstrumentUncertainty::default()).unwrap();

        assert_eq!(analysis.mean_forces(), vec![1.0, 2.0]);
        assert!((analysis.spring_constant() - 100.0).abs() < 1e-9);
        let floor = FORCE_SENSOR_RESOLUTION_N / 3.0f64.sqrt();
        for stats in &analysis.statistics {
            assert!((stats.std_error - floor).abs() < 1e-15);
        }

        let report = dir.path().join(REPORT_FILE_NAME);
        write_latex_report(&report, &analysis.table_entries()).unwrap();
        let document = fs::read_to_string(&report).unwrap();
        let rows: Vec<&str> = document.lines().filter(|l| l.contains(r"\newton}$ \\")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with(r"$\SI{1.00 \pm 0.05}{\centi\meter}$"));
        assert!(rows[1].contains(r"\SI{2.0000 \pm"));
    }

    #[test]
    fn test_noisy_measurements_recover_stiffness() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        // k = 25 N/m, displacements 2..10 cm, +/- 0.01 N scatter around the line
        let mut content = String::new();
        for offset in [-0.01, 0.0, 0.01] {
            let row: Vec<String> = (0..5)
                .map(|i| {
                    let x_m = (2.0 + 2.0 * i as f64) / 100.0;
                    format!("{:.4}", 25.0 * x_m + offset)
                })
                .collect();
            content.push_str(&row.join("\t"));
            content.push('\n');
        }
        fs::write(&input, content).unwrap();

        let table = parse_measurement_file(&input).unwrap();
        let settings = read_displacement_settings(&mut Cursor::new("2\n2\n"), &mut Vec::new()).unwrap();
        let analysis = analyze(&table, &settings, InstrumentUncertainty::default()).unwrap();

        assert!((analysis.spring_constant() - 25.0).abs() < 1e-6);
        assert!(analysis.spring_constant_uncertainty() > 0.0);
        assert!(analysis.spring_constant_uncertainty() < 0.5);
        assert_eq!(analysis.displacements_cm, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_ragged_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        fs::write(&input, "1.0\t2.0\t3.0\n1.0\t2.0\n").unwrap();

        let result = parse_measurement_file(&input);
        assert!(matches!(result, Err(AnalysisError::RaggedRow { row: 2, .. })));
    }
}
