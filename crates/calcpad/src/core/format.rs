//! Canonical number formatting
//!
//! Results are written back into the buffer, so the text must be exactly what
//! a user would get from the browser calculator: ECMAScript `Number::toString`
//! (shortest round-trip digits, plain decimals for exponents in `(-7, 21]`,
//! exponent notation beyond that, and no negative zero).

/// Formats a number as its canonical decimal string
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    format!("{sign}{}", layout(&digits, exponent + 1))
}

/// Places the decimal point for `0.digits × 10^n`
fn layout(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let exp_sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", e.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(1024.0), "1024");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.125), "-0.125");
        assert_eq!(format_number(123.456), "123.456");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666666666666");
    }

    #[test]
    fn test_format_small_magnitudes() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000015), "0.0000015");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_large_magnitudes() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.25e22), "-1.25e+22");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        for value in [0.1, 2.5, 1234.5678, 9007199254740993.0, 0.000123] {
            let text = format_number(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }
}
