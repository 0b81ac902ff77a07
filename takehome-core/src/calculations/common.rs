//! Shared arithmetic helpers for the tax calculations: financial rounding
//! and decimal comparisons.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole dollar amount, half-up.
///
/// Benefit line items are quoted in whole dollars; everything else in the
/// engine stays at cent precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_to_whole_dollar;
///
/// assert_eq!(round_to_whole_dollar(dec!(5574.40)), dec!(5574));
/// assert_eq!(round_to_whole_dollar(dec!(5574.50)), dec!(5575));
/// ```
pub fn round_to_whole_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}
