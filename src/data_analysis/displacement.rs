// src/data_analysis/displacement.rs

use ndarray::Array1;

use crate::constants::CM_PER_M;

/// Displacement schedule entered by the operator, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementSettings {
    pub initial_cm: f64,
    pub increment_cm: f64,
}

impl DisplacementSettings {
    /// Arithmetic sequence `initial + i * increment`, one entry per displacement column.
    pub fn sequence_cm(&self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| self.initial_cm + i as f64 * self.increment_cm)
            .collect()
    }

    /// Same sequence converted to meters.
    pub fn sequence_m(&self, count: usize) -> Array1<f64> {
        Array1::from(self.sequence_cm(count)).mapv(cm_to_m)
    }
}

pub fn cm_to_m(value_cm: f64) -> f64 {
    value_cm / CM_PER_M
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_sequence() {
        let settings = DisplacementSettings {
            initial_cm: 2.0,
            increment_cm: 0.5,
        };
        assert_eq!(settings.sequence_cm(4), vec![2.0, 2.5, 3.0, 3.5]);
    }

    #[test]
    fn test_consecutive_differences_equal_increment() {
        let settings = DisplacementSettings {
            initial_cm: -1.3,
            increment_cm: 0.7,
        };
        let seq = settings.sequence_cm(10);
        assert!((seq[0] - -1.3).abs() < 1e-12);
        for pair in seq.windows(2) {
            assert!((pair[1] - pair[0] - 0.7).abs() < 1e-12);
        }
    }

    #[test]
    fn test_meters_conversion() {
        let settings = DisplacementSettings {
            initial_cm: 0.0,
            increment_cm: 1.0,
        };
        let meters = settings.sequence_m(3);
        assert!((meters[0] - 0.0).abs() < 1e-15);
        assert!((meters[1] - 0.01).abs() < 1e-15);
        assert!((meters[2] - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_empty_sequence() {
        let settings = DisplacementSettings {
            initial_cm: 1.0,
            increment_cm: 1.0,
        };
        assert!(settings.sequence_cm(0).is_empty());
    }
}
