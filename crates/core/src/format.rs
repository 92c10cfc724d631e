//! General-format rendering of floating point values.
//!
//! Reports print floats the way C `printf("%g")` and a default-configured
//! C++ output stream do: `precision` significant digits, trailing zeros
//! dropped, scientific notation only for very large or very small values.
//!
//! | value | rendered |
//! |-------|----------|
//! | `500.0` | `500` |
//! | `2.5` | `2.5` |
//! | `1.0 / 3.0` | `0.333333` |
//! | `1234567.0` | `1.23457e+06` |
//! | `0.00001` | `1e-05` |

/// Significant digits used by default stream formatting.
pub const DEFAULT_PRECISION: usize = 6;

/// Render `value` in `%g` style with `precision` significant digits.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Round to the requested significant digits first; the exponent of the
    // rounded value decides between fixed and scientific notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if
/// nothing is left behind it.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        format_general(value, DEFAULT_PRECISION)
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(g(500.0), "500");
        assert_eq!(g(-42.0), "-42");
        assert_eq!(g(100000.0), "100000");
    }

    #[test]
    fn fractions() {
        assert_eq!(g(2.5), "2.5");
        assert_eq!(g(-12.25), "-12.25");
        assert_eq!(g(1.0 / 3.0), "0.333333");
        assert_eq!(g(500.0 / 101.0), "4.9505");
        assert_eq!(g(0.0001), "0.0001");
    }

    #[test]
    fn rounds_to_significant_digits() {
        assert_eq!(g(123.4567), "123.457");
        assert_eq!(g(999999.5), "1e+06");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(-0.000012345), "-1.2345e-05");
        assert_eq!(g(1e100), "1e+100");
    }

    #[test]
    fn special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn other_precision() {
        assert_eq!(format_general(3.14159, 3), "3.14");
        assert_eq!(format_general(1234.0, 2), "1.2e+03");
        assert_eq!(format_general(7.0, 0), "7");
    }
}
