//! Significant-digit precision
//!
//! Precision is always counted in significant digits, never in decimal
//! places: 987654321.01234 at 3 significant digits is 988000000.

/// Upper bound on tracked precision. f64 cannot faithfully carry more
/// than 15 significant decimal digits.
pub const MAX_PRECISION: u32 = 15;

/// Lower bound on tracked precision
pub const MIN_PRECISION: u32 = 1;

/// Clamp an arbitrary requested precision into `[MIN_PRECISION, MAX_PRECISION]`
pub fn clamp_precision(precision: i64) -> u32 {
    precision.clamp(MIN_PRECISION as i64, MAX_PRECISION as i64) as u32
}

/// Fractional places that hold the exact decimal expansion of any f64
const EXACT_PLACES: usize = 800;

/// Round `value` to `precision` significant digits.
///
/// Ties round away from zero: 2.5 at 1 digit is 3, 0.125 at 2 digits
/// is 0.13. Non-finite values and zero are returned unchanged.
pub fn round_significant(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let digits = precision.clamp(MIN_PRECISION, MAX_PRECISION) as usize;
    let (mantissa, exponent) = significant_digits(value, digits);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}0.{}e{}", sign, mantissa, exponent + 1).parse().unwrap_or(value)
}

/// Leading `digits` decimal digits of `|value|` and the decimal exponent
/// of the first one, rounded half-up on the exact binary value.
fn significant_digits(value: f64, digits: usize) -> (String, i32) {
    let exact = format!("{:.*e}", EXACT_PLACES, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut kept = all[..digits].to_vec();
    if all[digits] >= b'5' {
        let mut i = digits;
        loop {
            if i == 0 {
                // 99.. carried into a new leading digit
                kept.insert(0, b'1');
                kept.pop();
                exponent += 1;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }
    (kept.iter().map(|&b| b as char).collect(), exponent)
}

/// Render `value` with exactly `precision` significant digits.
///
/// Uses positional notation when the decimal exponent lies in
/// `[-6, precision)` and exponential notation (`9.88e+8`) otherwise.
/// Trailing zeros are kept since they are significant.
pub fn format_significant(value: f64, precision: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let digits = precision.clamp(MIN_PRECISION, MAX_PRECISION) as usize;
    let sign = if value < 0.0 { "-" } else { "" };

    let (mantissa, exponent) = if value == 0.0 {
        ("0".repeat(digits), 0i32)
    } else {
        significant_digits(value, digits)
    };

    if exponent < -6 || exponent >= digits as i32 {
        let (lead, rest) = mantissa.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return if rest.is_empty() {
            format!("{}{}e{}{}", sign, lead, exp_sign, exponent.abs())
        } else {
            format!("{}{}.{}e{}{}", sign, lead, rest, exp_sign, exponent.abs())
        };
    }

    if exponent >= 0 {
        let (int_part, frac_part) = mantissa.split_at(exponent as usize + 1);
        if frac_part.is_empty() {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{}0.{}{}", sign, zeros, mantissa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_precision() {
        assert_eq!(clamp_precision(2), 2);
        assert_eq!(clamp_precision(100), MAX_PRECISION);
        assert_eq!(clamp_precision(-100), MIN_PRECISION);
        assert_eq!(clamp_precision(0), MIN_PRECISION);
    }

    #[test]
    fn test_round_significant_ladder() {
        let raw = 987654321.01234;
        let expected = [
            1000000000.0,
            990000000.0,
            988000000.0,
            987700000.0,
            987650000.0,
            987654000.0,
            987654300.0,
            987654320.0,
            987654321.0,
            987654321.0,
            987654321.01,
            987654321.012,
            987654321.0123,
            987654321.01234,
            987654321.01234,
        ];
        for (i, want) in expected.iter().enumerate() {
            let precision = i as u32 + 1;
            assert_eq!(round_significant(raw, precision), *want, "precision {}", precision);
        }
    }

    #[test]
    fn test_round_significant_small_and_negative() {
        assert_eq!(round_significant(0.00123456, 3), 0.00123);
        assert_eq!(round_significant(-4.567, 2), -4.6);
        assert_eq!(round_significant(0.0, 3), 0.0);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_significant(2.5, 1), 3.0);
        assert_eq!(round_significant(-2.5, 1), -3.0);
        assert_eq!(round_significant(0.125, 2), 0.13);
        assert_eq!(round_significant(25.0, 1), 30.0);
        assert_eq!(round_significant(9.5, 1), 10.0);

        assert_eq!(format_significant(2.5, 1), "3");
        assert_eq!(format_significant(0.125, 2), "0.13");
        assert_eq!(format_significant(25.0, 1), "3e+1");
        assert_eq!(format_significant(9.5, 1), "1e+1");
        assert_eq!(format_significant(99.5, 2), "1.0e+2");
    }

    #[test]
    fn test_near_ties_follow_binary_value() {
        // 1.005 is stored just below 1.005
        assert_eq!(format_significant(1.005, 3), "1.00");
        assert_eq!(round_significant(1.005, 3), 1.0);
    }

    #[test]
    fn test_format_positional() {
        assert_eq!(format_significant(4.567, 2), "4.6");
        assert_eq!(format_significant(4.567, 4), "4.567");
        assert_eq!(format_significant(4.567, 6), "4.56700");
        assert_eq!(format_significant(3.0, 1), "3");
        assert_eq!(format_significant(123.0, 3), "123");
        assert_eq!(format_significant(-12.5, 4), "-12.50");
    }

    #[test]
    fn test_format_small_fraction() {
        assert_eq!(format_significant(0.00012345, 3), "0.000123");
        assert_eq!(format_significant(0.5, 2), "0.50");
    }

    #[test]
    fn test_format_exponential() {
        assert_eq!(format_significant(987654321.01234, 3), "9.88e+8");
        assert_eq!(format_significant(987654321.01234, 1), "1e+9");
        assert_eq!(format_significant(0.00000012345, 2), "1.2e-7");
        assert_eq!(format_significant(1500.0, 2), "1.5e+3");
    }

    #[test]
    fn test_format_zero_and_non_finite() {
        assert_eq!(format_significant(0.0, 1), "0");
        assert_eq!(format_significant(0.0, 3), "0.00");
        assert_eq!(format_significant(f64::INFINITY, 3), "Infinity");
        assert_eq!(format_significant(f64::NAN, 3), "NaN");
    }
}
