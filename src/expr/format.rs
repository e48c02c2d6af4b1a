/// Significant digits kept in a committed result.
pub const RESULT_PRECISION: usize = 12;

/// Round to `digits` significant digits.
///
/// Goes through the decimal scientific rendering so the result is the double
/// nearest to the rounded decimal, which drops binary noise such as
/// `0.30000000000000004`.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    format!("{:.*e}", digits - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Round to a fixed number of decimal places, halves away from zero.
pub fn round_decimals(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Shortest plain-decimal rendering of a number (never exponent notation, no
/// `-0`), so the text can be typed back into the evaluator.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_significant_removes_noise() {
        assert_eq!(round_significant(0.1 + 0.2, 12), 0.3);
        assert_eq!(round_significant(1.0 / 3.0, 12), 0.333333333333);
        assert_eq!(round_significant(123456789.123456789, 12), 123456789.123);
    }

    #[test]
    fn test_round_decimals() {
        assert_eq!(round_decimals(3.28083989501, 4), 3.2808);
        assert_eq!(round_decimals(1.03125, 4), 1.0313);
        assert_eq!(round_decimals(-1.03125, 4), -1.0313);
        assert_eq!(round_decimals(117.999, 2), 118.0);
        assert_eq!(round_decimals(-0.00001, 4), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(0.0000001), "0.0000001");
    }
}
