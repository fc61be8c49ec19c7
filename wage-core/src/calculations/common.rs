//! Rounding helpers shared by the calculator and the display layer.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. The result always
/// carries a scale of two, so `3464` becomes `3464.00` when displayed.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(5.7736)), dec!(5.77));
/// assert_eq!(round_half_up(dec!(1153.845)), dec!(1153.85));
/// assert_eq!(round_half_up(dec!(-2.005)), dec!(-2.01)); // Away from zero
/// assert_eq!(round_half_up(dec!(3464)).to_string(), "3464.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}
