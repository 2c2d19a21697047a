//! Display text rules
//!
//! The readout is at most [`MAX_LENGTH`] characters and is either a
//! decimal numeral or [`ERROR_TEXT`]. Computed values are rendered in the
//! general `%g` style with [`SIGNIFICANT_DIGITS`] significant digits.

/// Maximum number of characters on the readout
pub const MAX_LENGTH: usize = 15;

/// Readout shown after a failed calculation
pub const ERROR_TEXT: &str = "Error";

/// Readout after a clear
pub const ZERO_TEXT: &str = "0";

/// Significant digits used when showing a computed value
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a computed value for the readout
#[must_use]
pub fn format_number(value: f64) -> String {
    format_general(value, SIGNIFICANT_DIGITS)
}

/// Formats `value` like C's `%.*g`
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise. Trailing zeros are
/// trimmed in both forms and the exponent has at least two digits.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    // Also folds -0.0 into "0"
    if value == 0.0 {
        return ZERO_TEXT.to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to the requested significant digits first; the exponent of the
    // rounded value decides the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros (and a dangling point) from a fractional numeral
fn trim_fraction(numeral: &str) -> &str {
    if numeral.contains('.') {
        numeral.trim_end_matches('0').trim_end_matches('.')
    } else {
        numeral
    }
}

/// Reads the readout as an operand
///
/// Anything that does not parse (only [`ERROR_TEXT`] in practice) reads
/// as zero.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

/// Returns true if `text` is the error readout
#[must_use]
pub fn is_error(text: &str) -> bool {
    text == ERROR_TEXT
}

/// Returns true if `text` is a valid readout: the error text, or a
/// numeral of at most [`MAX_LENGTH`] characters that parses to a finite
/// number
#[must_use]
pub fn is_valid(text: &str) -> bool {
    if is_error(text) {
        return true;
    }
    text.chars().count() <= MAX_LENGTH
        && text.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== format_number tests =====

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(123_456.0), "123456");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(-2.0 / 3.0), "-0.666667");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_large_switches_to_scientific() {
        assert_eq!(format_number(1_234_567.0), "1.23457e+06");
        assert_eq!(format_number(1_000_000.0), "1e+06");
        assert_eq!(format_number(-2.5e20), "-2.5e+20");
        assert_eq!(format_number(1e300), "1e+300");
    }

    #[test]
    fn test_format_rounding_bumps_exponent() {
        assert_eq!(format_number(999_999.0), "999999");
        assert_eq!(format_number(999_999.7), "1e+06");
    }

    #[test]
    fn test_format_small_values() {
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.000_012_5), "1.25e-05");
        assert_eq!(format_number(-1e-300), "-1e-300");
    }

    #[test]
    fn test_format_general_precision() {
        assert_eq!(format_general(3.14159, 3), "3.14");
        assert_eq!(format_general(1234.0, 2), "1.2e+03");
        assert_eq!(format_general(7.0, 0), "7");
    }

    #[test]
    fn test_format_non_finite_passthrough() {
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NAN, 6), "NaN");
    }

    // ===== parse / validity tests =====

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("12.5"), 12.5);
        assert_eq!(parse_operand("3."), 3.0);
        assert_eq!(parse_operand("0."), 0.0);
        assert_eq!(parse_operand("1.23457e+06"), 1_234_570.0);
        assert_eq!(parse_operand(ERROR_TEXT), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("0"));
        assert!(is_valid("0."));
        assert!(is_valid("123456789012345"));
        assert!(is_valid(ERROR_TEXT));
        assert!(!is_valid("1234567890123456"));
        assert!(!is_valid("inf"));
        assert!(!is_valid("abc"));
        assert!(!is_valid(""));
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_formatted_values_are_valid_readouts(value in proptest::num::f64::NORMAL) {
            let text = format_number(value);
            prop_assert!(is_valid(&text), "invalid readout {text:?} for {value}");
            prop_assert!(text.len() <= MAX_LENGTH);
        }

        #[test]
        fn prop_formatting_keeps_six_significant_digits(value in -1e12f64..1e12) {
            let text = format_number(value);
            let back = parse_operand(&text);
            let tolerance = value.abs() * 1e-5 + f64::MIN_POSITIVE;
            prop_assert!((back - value).abs() <= tolerance, "{value} -> {text}");
        }
    }
}
