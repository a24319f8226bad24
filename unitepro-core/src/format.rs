//! Display-only value formatting

/// Format a value with at most 6 fractional digits, trailing zeros
/// trimmed.
///
/// Rounding happens only at display time; computed results stay
/// unrounded everywhere else.
pub fn format_value(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(format_value(50.8), "50.8");
        assert_eq!(format_value(1_609_344.0), "1609344");
        assert_eq!(format_value(2.58999), "2.58999");
    }

    #[test]
    fn test_rounds_to_six_digits() {
        assert_eq!(format_value(0.123456789), "0.123457");
        assert_eq!(format_value(37.85411784), "37.854118");
    }

    #[test]
    fn test_underflow_rounds_to_zero() {
        // 6.4516e-10 is below the 6-digit display resolution
        assert_eq!(format_value(6.4516e-10), "0");
    }
}
