// tests/axis_formatting_test.rs

use spring_fit::plot_framework::format_axis_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_axis_in_meters() {
        // Typical displacement span: a few centimeters expressed in meters
        let span = 0.05;
        assert_eq!(format_axis_value(0.01, span), "0.010");
        assert_eq!(format_axis_value(0.025, span), "0.025");
        assert_eq!(format_axis_value(0.0, span), "0.000");
    }

    #[test]
    fn test_force_axis_in_newtons() {
        let span = 3.0;
        assert_eq!(format_axis_value(0.5, span), "0.5");
        assert_eq!(format_axis_value(2.0, span), "2.0");
    }

    #[test]
    fn test_large_spans_use_integers() {
        assert_eq!(format_axis_value(150.0, 200.0), "150");
        assert_eq!(format_axis_value(12.4, 10.0), "12");
    }

    #[test]
    fn test_small_residual_spans() {
        let span = 0.004;
        assert_eq!(format_axis_value(-0.0015, span), "-0.0015");
        assert_eq!(format_axis_value(0.002, span), "0.0020");
    }

    #[test]
    fn test_negative_zero_is_not_shown() {
        assert_eq!(format_axis_value(-0.00001, 0.5), "0.00");
        assert_eq!(format_axis_value(-0.0, 1.0), "0.0");
    }

    #[test]
    fn test_degenerate_span_falls_back_to_two_decimals() {
        assert_eq!(format_axis_value(1.234, 0.0), "1.23");
        assert_eq!(format_axis_value(1.234, f64::NAN), "1.23");
    }
}
