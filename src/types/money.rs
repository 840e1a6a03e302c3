//! Monetary amounts for the bank ledger
//!
//! `Money` is an exact decimal quantity held at a fixed scale of two
//! fractional digits (cents). It wraps `rust_decimal::Decimal`, so repeated
//! cent-level credits and debits never drift the way binary floating point
//! would.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;

/// Number of fractional digits carried by every `Money` value
pub const MONEY_SCALE: u32 = 2;

/// Exact currency amount with two fractional digits
///
/// The inner decimal is private: the only ways to obtain a `Money` are the
/// constructors below, the amount validator, and ledger arithmetic, all of
/// which keep the scale at exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Zero, rendered as `0.00`
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, MONEY_SCALE));

    /// Largest amount representable at two fractional digits
    ///
    /// `792281625142643375935439503.35`, the full 96-bit mantissa at scale 2.
    pub const MAX: Money = Money(Decimal::from_parts(
        u32::MAX,
        u32::MAX,
        u32::MAX,
        false,
        MONEY_SCALE,
    ));

    /// Create a `Money` from a whole number of cents
    ///
    /// `Money::from_cents(50000)` is `500.00`.
    pub fn from_cents(cents: i64) -> Self {
        Money::normalize(Decimal::new(cents, MONEY_SCALE))
    }

    /// Create a `Money` from an arbitrary decimal
    ///
    /// The value is brought to a scale of two. Values with finer precision are
    /// rounded half-to-even; the amount validator never hands such values to
    /// the ledger, so this only matters for callers building amounts directly.
    /// Magnitudes above `Money::MAX` cannot keep two fractional digits; use
    /// [`Money::fits`] to check first.
    pub fn from_decimal(value: Decimal) -> Self {
        Money::normalize(value.round_dp(MONEY_SCALE))
    }

    fn normalize(mut value: Decimal) -> Self {
        value.rescale(MONEY_SCALE);
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Money(value)
    }

    /// Whether `value` is within the range representable at scale 2
    pub fn fits(value: Decimal) -> bool {
        value.abs() <= Money::MAX.0
    }

    /// The underlying decimal value (scale 2)
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Add two amounts, returning `None` if the result exceeds `Money::MAX`
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0
            .checked_add(other.0)
            .filter(|sum| Money::fits(*sum))
            .map(Money::normalize)
    }

    /// Subtract two amounts, returning `None` if the result exceeds `Money::MAX`
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0
            .checked_sub(other.0)
            .filter(|difference| Money::fits(*difference))
            .map(Money::normalize)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::normalize(-self.0)
    }
}

impl fmt::Display for Money {
    /// Always exactly two fractional digits, whatever the magnitude
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}
