// SPDX-License-Identifier: Apache-2.0

use crate::matcher::literal_char;
use crate::Cursor;

/// Consumes one or more ASCII digits, returning them as a slice.
fn digit_run<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, &'a [u8])> {
    let rest = cursor.remaining();
    let len = rest.iter().take_while(|byte| byte.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    Some((cursor.advance(len)?, rest.get(..len)?))
}

fn accumulate_significand(significand: f64, digits: &[u8]) -> f64 {
    digits.iter().fold(significand, |acc, &digit| {
        acc * 10.0 + f64::from(digit - b'0')
    })
}

/// Folds an exponent digit run into an `i32`, failing instead of wrapping.
fn accumulate_exponent(digits: &[u8]) -> Option<i32> {
    digits.iter().try_fold(0i32, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(i32::from(digit - b'0'))
    })
}

/// Applies a power of ten one step at a time.
///
/// Each step is a separate multiply or divide by ten, so results round the
/// same way on every platform. Stops early once the value can no longer
/// change.
fn scale_by_ten(mut value: f64, mut exponent: i32) -> f64 {
    while exponent > 0 && value.is_finite() && value != 0.0 {
        value *= 10.0;
        exponent -= 1;
    }
    while exponent < 0 && value.is_finite() && value != 0.0 {
        value /= 10.0;
        exponent += 1;
    }
    value
}

/// Parses a JSON number, returning the cursor past it and its value.
///
/// The value is built directly from the digits in the text: integer and
/// fraction digits accumulate into one significand, and the decimal point
/// and exponent are applied afterwards by repeated scaling. A missing
/// mandatory digit group fails the whole number.
///
/// Exponents or fraction lengths that do not fit in an `i32` are rejected.
///
/// # Example
/// ```
/// use picowalk::{number, Cursor};
/// let (next, value) = number(Cursor::new(b"-2.5e-1,")).unwrap();
/// assert_eq!(value, -0.25);
/// assert_eq!(next.peek(), Some(b','));
/// ```
pub fn number(cursor: Cursor<'_>) -> Option<(Cursor<'_>, f64)> {
    let (cursor, sign) = match literal_char(b'-', cursor) {
        Some(next) => (next, -1.0),
        None => (cursor, 1.0),
    };

    let mut significand = 0.0;
    let mut cursor = match literal_char(b'0', cursor) {
        Some(next) => next,
        None => {
            let (next, digits) = digit_run(cursor)?;
            significand = accumulate_significand(significand, digits);
            next
        }
    };

    let mut shift = 0i32;
    if let Some(next) = literal_char(b'.', cursor) {
        let (next, digits) = digit_run(next)?;
        significand = accumulate_significand(significand, digits);
        shift = match i32::try_from(digits.len()) {
            Ok(shift) => shift,
            Err(_) => {
                log::debug!("fraction too long at offset {}", next.offset());
                return None;
            }
        };
        cursor = next;
    }

    let mut exponent = 0i32;
    if let Some(next) = literal_char(b'e', cursor).or_else(|| literal_char(b'E', cursor)) {
        let (next, negative) = match literal_char(b'-', next) {
            Some(after_sign) => (after_sign, true),
            None => (literal_char(b'+', next).unwrap_or(next), false),
        };
        let (next, digits) = digit_run(next)?;
        exponent = match accumulate_exponent(digits) {
            Some(magnitude) if negative => -magnitude,
            Some(magnitude) => magnitude,
            None => {
                log::debug!("exponent out of range at offset {}", next.offset());
                return None;
            }
        };
        cursor = next;
    }

    let scale = exponent.checked_sub(shift)?;
    Some((cursor, scale_by_ten(sign * significand, scale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<(usize, f64)> {
        number(Cursor::new_str(input)).map(|(cursor, value)| (cursor.offset(), value))
    }

    #[test]
    fn test_exact_decimal_values() {
        assert_eq!(parse("0"), Some((1, 0.0)));
        assert_eq!(parse("-3"), Some((2, -3.0)));
        assert_eq!(parse("3.5"), Some((3, 3.5)));
        assert_eq!(parse("1e2"), Some((3, 100.0)));
        assert_eq!(parse("-2.5e-1"), Some((7, -0.25)));
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(parse("1E2"), Some((3, 100.0)));
        assert_eq!(parse("1e+2"), Some((4, 100.0)));
        assert_eq!(parse("5e-1"), Some((4, 0.5)));
        assert_eq!(parse("0e5"), Some((3, 0.0)));
        assert_eq!(parse("2e0000000000000000001"), Some((21, 20.0)));
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse("123456789"), Some((9, 123456789.0)));
        assert_eq!(parse("-0"), Some((2, 0.0)));
        assert!(parse("-0").unwrap().1.is_sign_negative());
    }

    #[test]
    fn test_number_stops_at_delimiter() {
        assert_eq!(parse("42]"), Some((2, 42.0)));
        assert_eq!(parse("7 "), Some((1, 7.0)));
        // A leading zero ends the integer part; the rest is left for the caller
        assert_eq!(parse("01"), Some((1, 0.0)));
        assert_eq!(parse("0x1"), Some((1, 0.0)));
    }

    #[test]
    fn test_missing_digit_groups_fail() {
        assert_eq!(parse("-"), None);
        assert_eq!(parse("1."), None);
        assert_eq!(parse("1.e3"), None);
        assert_eq!(parse(".5"), None);
        assert_eq!(parse("1e"), None);
        assert_eq!(parse("1e+"), None);
        assert_eq!(parse("1E-"), None);
        assert_eq!(parse("+1"), None);
        assert_eq!(parse("-a"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_extreme_exponents() {
        assert_eq!(parse("1e400").map(|(_, v)| v), Some(f64::INFINITY));
        assert_eq!(parse("-1e400").map(|(_, v)| v), Some(f64::NEG_INFINITY));
        assert_eq!(parse("1e-400").map(|(_, v)| v), Some(0.0));
        // Exponent that does not fit the counter
        assert_eq!(parse("1e99999999999"), None);
        assert_eq!(parse("1e-99999999999"), None);
    }

    #[test]
    fn test_accumulate_exponent_overflow() {
        assert_eq!(accumulate_exponent(b"2147483647"), Some(i32::MAX));
        assert_eq!(accumulate_exponent(b"2147483648"), None);
    }

    #[test]
    fn test_scale_by_ten() {
        assert_eq!(scale_by_ten(35.0, -1), 3.5);
        assert_eq!(scale_by_ten(1.0, 3), 1000.0);
        assert_eq!(scale_by_ten(0.0, i32::MAX), 0.0);
        assert_eq!(scale_by_ten(1.0, i32::MAX), f64::INFINITY);
        assert_eq!(scale_by_ten(1.0, i32::MIN), 0.0);
    }
}
