//! Rounding and rendering of results for the display.

/// Number of significant digits kept on results by default.
pub const DEFAULT_PRECISION: usize = 12;

/// Largest meaningful number of significant digits for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Digits after the point needed to write any `f64` exactly in exponent
/// notation.
const EXACT_DIGITS: usize = 780;

/// Round `value` to `digits` significant digits, and get back the nearest
/// `f64`. `digits` is clamped to `1..=17`; non-finite values are returned
/// unchanged.
///
/// Halfway cases go away from zero, like `toPrecision`.
///
/// # Examples
///
/// ```
/// # use keypad::round_to_precision;
/// assert_eq!(round_to_precision(0.1 + 0.2, 12), 0.3);
/// assert_eq!(round_to_precision(123456.789, 4), 123500.0);
/// assert_eq!(round_to_precision(-2.5, 1), -3.0);
/// ```
#[must_use]
pub fn round_to_precision(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let digits = digits.clamp(1, MAX_PRECISION);

    // Exact decimal expansion of |value|, e.g. "2.5000...e0"
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exponent) = match exact.split_once('e') {
        Some(parts) => parts,
        None => return value,
    };
    let mut exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return value,
    };
    let expansion: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let (kept, rest) = expansion.split_at(digits);
    let mut kept = kept.to_vec();

    if rest.first().map_or(false, |&d| d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        // 9.99 rounded up becomes 10.0
        if carry {
            kept.insert(0, b'1');
            kept.pop();
            exponent += 1;
        }
    }

    let (first, fraction) = kept.split_at(1);
    let text = format!(
        "{}{}.{}0e{}",
        if value < 0.0 { "-" } else { "" },
        char::from(first[0]),
        String::from_utf8_lossy(fraction),
        exponent
    );
    text.parse().unwrap_or(value)
}

/// Render a finite `value` as the shortest decimal text that reads back to
/// the same `f64`.
///
/// Plain notation is used while the decimal point falls between 6 places
/// left of the first digit and 21 places right of it, exponent notation
/// (`1.5e-7`, `1e+21`) outside of it.
///
/// # Examples
///
/// ```
/// # use keypad::to_display;
/// assert_eq!(to_display(5.0), "5");
/// assert_eq!(to_display(-0.25), "-0.25");
/// assert_eq!(to_display(1e21), "1e+21");
/// assert_eq!(to_display(0.0000001), "1e-7");
/// ```
#[must_use]
pub fn to_display(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "-1.2345e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(mantissa) => ("-", mantissa),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let mut out = String::from(sign);
    out.push_str(&layout(&digits, exponent + 1));
    out
}

/// Place the decimal point in `digits`, where the value is
/// `0.<digits> * 10^point`.
fn layout(digits: &str, point: i32) -> String {
    let count = digits.len() as i32;
    if count <= point && point <= 21 {
        let mut out = digits.to_string();
        out.extend(std::iter::repeat('0').take((point - count) as usize));
        out
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        let mut out = String::from("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(digits);
        out
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(5.0 => "5" ; "integer")]
    #[test_case(-0.0 => "0" ; "negative zero")]
    #[test_case(0.1 => "0.1" ; "fraction")]
    #[test_case(1234.5 => "1234.5" ; "mixed")]
    #[test_case(1e20 => "100000000000000000000" ; "large plain")]
    #[test_case(1.5e21 => "1.5e+21" ; "large exponent")]
    #[test_case(0.000001 => "0.000001" ; "small plain")]
    #[test_case(1.5e-7 => "1.5e-7" ; "small exponent")]
    #[test_case(-3.141592653589793 => "-3.141592653589793" ; "negative")]
    #[test_case(f64::INFINITY => "Infinity" ; "infinity")]
    fn display(value: f64) -> String {
        to_display(value)
    }

    #[test_case(1000000000005.0, 12 => 1000000000010.0 ; "thirteen digit tie")]
    #[test_case(2.5, 1 => 3.0 ; "positive tie")]
    #[test_case(-2.5, 1 => -3.0 ; "negative tie")]
    #[test_case(0.125, 2 => 0.13 ; "binary exact tie")]
    #[test_case(999.96, 4 => 1000.0 ; "carry into new digit")]
    #[test_case(-0.0, 12 => 0.0 ; "zero")]
    #[test_case(5e-324, 3 => 5e-324 ; "smallest subnormal")]
    #[test_case(f64::MAX, 12 => 1.79769313486e308 ; "largest value")]
    fn round(value: f64, digits: usize) -> f64 {
        round_to_precision(value, digits)
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_precision(0.1 + 0.2, DEFAULT_PRECISION), 0.3);
        assert_eq!(round_to_precision(2.0 / 3.0, DEFAULT_PRECISION), 0.666666666667);
        assert_eq!(round_to_precision(1e-20, DEFAULT_PRECISION), 1e-20);
        assert_eq!(round_to_precision(-987654321.123456, 3), -988000000.0);
        assert_eq!(round_to_precision(9.5, 0), 10.0);
        assert!(round_to_precision(f64::NAN, DEFAULT_PRECISION).is_nan());
    }

    #[test]
    fn rounding_then_display() {
        let sin_pi = round_to_precision(std::f64::consts::PI.sin(), DEFAULT_PRECISION);
        assert_eq!(to_display(sin_pi), "1.22464679915e-16");
        let sqrt2 = round_to_precision(2f64.sqrt(), DEFAULT_PRECISION);
        assert_eq!(to_display(sqrt2), "1.41421356237");
    }
}
