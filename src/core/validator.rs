//! Amount validation
//!
//! Converts a raw operator token into a strictly positive `Money` value or
//! classifies why it was rejected. Pure function, no side effects.
//!
//! Precision is judged on the literal as written, not on its numeric value:
//! `100.00` is accepted while `100.000` is rejected. The declared places are
//! counted from the text itself, because `Decimal::from_str` rounds literals
//! with more significant digits than its 96-bit mantissa can hold.

use crate::types::{AmountError, Money, MONEY_SCALE};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Validate a raw amount token
///
/// Surrounding whitespace is trimmed first. Checks run in this order:
///
/// 1. The token must be a decimal literal (`NotANumber`)
/// 2. At most two fractional digits may be declared (`TooManyDecimalPlaces`)
/// 3. The value must be no larger than `Money::MAX` (`NotANumber`)
/// 4. The value must not be negative (`Negative`)
/// 5. The value must not be zero (`Zero`)
///
/// On success the amount is returned at a scale of exactly two.
///
/// Quit/back sentinels such as `q` are not recognised here; callers intercept
/// them before validating.
pub fn validate(raw: &str) -> Result<Money, AmountError> {
    let input = raw.trim();
    let places = declared_places(input).ok_or_else(|| AmountError::not_a_number(input))?;
    if places > MONEY_SCALE {
        return Err(AmountError::too_many_decimal_places(input, places));
    }

    let value = parse_decimal(input)
        .filter(|value| Money::fits(*value))
        .ok_or_else(|| AmountError::not_a_number(input))?;

    if value < Decimal::ZERO {
        return Err(AmountError::negative(input));
    }

    if value.is_zero() {
        return Err(AmountError::zero(input));
    }

    Ok(Money::from_decimal(value))
}

/// Fractional digits declared by a decimal literal
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa
/// digit. The exponent shifts the count: `1.5e1` declares none, `1e-3`
/// declares three. Returns `None` if `input` is not such a literal.
fn declared_places(input: &str) -> Option<u32> {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.len() + fraction.len() == 0 || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let shift = match exponent {
        None => 0,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            // Overlong exponents saturate; range is checked when parsing
            let negative = exponent.starts_with('-');
            exponent
                .parse::<i64>()
                .unwrap_or(if negative { i64::MIN } else { i64::MAX })
        }
    };

    let places = (fraction.len() as i64).saturating_sub(shift).max(0);
    Some(u32::try_from(places).unwrap_or(u32::MAX))
}

// Plain literals first; exponent notation (`1e2`, `5E-3`) only when present.
fn parse_decimal(input: &str) -> Option<Decimal> {
    if input.contains(['e', 'E']) {
        return Decimal::from_scientific(input).ok();
    }
    Decimal::from_str(input).ok()
}
