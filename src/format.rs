//! Number formatting
//!
//! Values are printed in the "general" style: a fixed number of significant
//! digits, trailing zeros removed, switching to scientific notation for very
//! large or very small magnitudes (e.g. `38.4845`, `9`, `1e+06`, `1e-05`).

/// Format `value` with `digits` significant digits in general style
///
/// `digits` is clamped to at least 1.
pub fn format_general(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);

    // Rounding to the requested precision may bump the exponent (9.9999995 -> 10),
    // so take it from the rounded scientific rendering.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing zeros (and a dangling decimal point) from a fraction
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_general(38.484510006474966, 6), "38.4845");
        assert_eq!(format_general(21.991148575128552, 6), "21.9911");
        assert_eq!(format_general(153.93804002589985, 6), "153.938");
        assert_eq!(format_general(179.59438002021666, 6), "179.594");
        assert_eq!(format_general(3.5, 6), "3.5");
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_general(9.0, 6), "9");
        assert_eq!(format_general(12.0, 6), "12");
        assert_eq!(format_general(54.0, 6), "54");
        assert_eq!(format_general(100000.0, 6), "100000");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(-0.0, 6), "-0");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_general(1_000_000.0, 6), "1e+06");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.00001, 6), "1e-05");
        assert_eq!(format_general(0.0001, 6), "0.0001");
    }

    #[test]
    fn test_rounding_bumps_exponent() {
        assert_eq!(format_general(9.9999999, 6), "10");
        assert_eq!(format_general(999999.9, 6), "1e+06");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_general(-21.991148575128552, 6), "-21.9911");
        assert_eq!(format_general(-8.0, 6), "-8");
    }

    #[test]
    fn test_precision() {
        assert_eq!(format_general(38.484510006474966, 3), "38.5");
        assert_eq!(format_general(38.484510006474966, 1), "4e+01");
        assert_eq!(format_general(38.484510006474966, 0), "4e+01");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
    }
}
