//! Shared helpers for presenting calculated amounts.
//!
//! The calculations themselves run in `f64`; money leaves the core as a
//! [`Decimal`] rounded to whole cents so every consumer formats it the same way.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use water_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a dollar amount to a [`Decimal`] rounded to cents.
///
/// Returns `None` for NaN or infinite input.
///
/// ```
/// use rust_decimal_macros::dec;
/// use water_core::calculations::common::to_currency;
///
/// assert_eq!(to_currency(56781.15), Some(dec!(56781.15)));
/// assert_eq!(to_currency(f64::NAN), None);
/// ```
pub fn to_currency(dollars: f64) -> Option<Decimal> {
    Decimal::from_f64(dollars).map(round_half_up)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(57201.704)), dec!(57201.70));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    #[test]
    fn to_currency_rounds_fractional_cents() {
        assert_eq!(to_currency(1234.5678), Some(dec!(1234.57)));
    }

    #[test]
    fn to_currency_rejects_infinity() {
        assert_eq!(to_currency(f64::INFINITY), None);
    }
}
