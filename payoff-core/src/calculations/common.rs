//! Shared numeric helpers for the engine.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2166.666)), dec!(2166.67));
/// assert_eq!(round_half_up(dec!(84.775)), dec!(84.78));
/// assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-150.00), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(250.00), dec!(0)), dec!(250.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Expresses `part` as a percentage of `whole`.
///
/// A zero or negative `whole` yields zero rather than a division fault.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payoff_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(1500), dec!(5000)), dec!(30));
/// assert_eq!(percent_of(dec!(1500), dec!(0)), dec!(0));
/// ```
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part * Decimal::ONE_HUNDRED / whole
}
