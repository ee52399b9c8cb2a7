//! Numeric rounding and percentage rendering.

/// Round to two decimal places, ties to even on the exact binary value.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Render a percentage with thousands separators and two decimals.
///
/// The value is expected to be already scaled: `1234.5` renders as `"1,234.50%"`.
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        return "nan%".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}inf%");
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(frac_part);
    out.push('%');
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "0.00%")]
    #[case(7.5, "7.50%")]
    #[case(250.0, "250.00%")]
    #[case(1234.5, "1,234.50%")]
    #[case(999.999, "1,000.00%")]
    #[case(1234567.891, "1,234,567.89%")]
    #[case(-1234.5, "-1,234.50%")]
    #[case(-12.0, "-12.00%")]
    fn test_format_percent(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[test]
    fn test_format_percent_non_finite() {
        assert_eq!(format_percent(f64::NAN), "nan%");
        assert_eq!(format_percent(f64::INFINITY), "inf%");
        assert_eq!(format_percent(f64::NEG_INFINITY), "-inf%");
    }

    #[rstest]
    #[case(2.5, 2.5)]
    #[case(0.12345, 0.12)]
    #[case(2.675, 2.67)]
    #[case(9.999, 10.0)]
    #[case(-3.14159, -3.14)]
    fn test_round2(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round2(value), expected);
    }
}
