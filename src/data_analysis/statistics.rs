// src/data_analysis/statistics.rs

use ndarray::ArrayView1;

use crate::data_input::measurement_table::MeasurementTable;

/// Mean and standard error of the trials recorded at one displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistics {
    pub mean: f64,
    pub std_error: f64,
}

/// Computes mean and standard error of the mean for one column of trials.
///
/// The standard error is the sample standard deviation (ddof = 1) divided by
/// √n. When it comes out as exactly zero (all trials identical) the sensor
/// resolution divided by √n is used instead, so the value can always serve
/// as a fit weight. A single trial has no sample deviation and takes the
/// floor as well.
pub fn column_statistics(trials: ArrayView1<'_, f64>, resolution_floor: f64) -> ColumnStatistics {
    let n = trials.len();
    let mean = trials.mean().unwrap_or(0.0);
    let sqrt_n = (n.max(1) as f64).sqrt();

    let std_error = if n > 1 {
        trials.std(1.0) / sqrt_n
    } else {
        0.0
    };

    let std_error = if std_error == 0.0 {
        resolution_floor / sqrt_n
    } else {
        std_error
    };

    ColumnStatistics { mean, std_error }
}

/// Per-displacement statistics for every column of the table.
pub fn table_statistics(table: &MeasurementTable, resolution_floor: f64) -> Vec<ColumnStatistics> {
    table
        .columns()
        .map(|column| column_statistics(column, resolution_floor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FORCE_SENSOR_RESOLUTION_N;
    use ndarray::array;

    #[test]
    fn test_mean_and_standard_error() {
        let trials = array![1.0, 2.0, 3.0, 4.0];
        let stats = column_statistics(trials.view(), FORCE_SENSOR_RESOLUTION_N);

        // sample variance = 5/3, std = 1.2910, sem = std / 2
        assert!((stats.mean - 2.5).abs() < 1e-12);
        let expected = (5.0f64 / 3.0).sqrt() / 2.0;
        assert!((stats.std_error - expected).abs() < 1e-12);
    }

    #[test]
    fn test_constant_trials_use_resolution_floor() {
        let trials = array![0.75, 0.75, 0.75];
        let stats = column_statistics(trials.view(), FORCE_SENSOR_RESOLUTION_N);

        assert!((stats.mean - 0.75).abs() < 1e-12);
        let expected = FORCE_SENSOR_RESOLUTION_N / 3.0f64.sqrt();
        assert!((stats.std_error - expected).abs() < 1e-15);
    }

    #[test]
    fn test_single_trial_uses_resolution_floor() {
        let trials = array![1.5];
        let stats = column_statistics(trials.view(), FORCE_SENSOR_RESOLUTION_N);
        assert_eq!(stats.mean, 1.5);
        assert!((stats.std_error - FORCE_SENSOR_RESOLUTION_N).abs() < 1e-15);
    }

    #[test]
    fn test_table_statistics_per_column() {
        let table = MeasurementTable::from_rows(vec![
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
        ])
        .unwrap();

        let stats = table_statistics(&table, FORCE_SENSOR_RESOLUTION_N);
        assert_eq!(stats.len(), 2);
        assert!((stats[0].mean - 1.0).abs() < 1e-12);
        assert!((stats[1].mean - 2.0).abs() < 1e-12);
        for s in &stats {
            assert!(s.std_error > 0.0);
        }
    }
}
