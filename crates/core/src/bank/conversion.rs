//! Pivot-relative conversion arithmetic.
//!
//! CRITICAL: Rounding strategy for conversions:
//! - Only the final amount is rounded, never the pivot hop
//! - Always round to 4 decimal places
//! - Use round half away from zero (2.5 -> 3, -2.5 -> -3)

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Number of decimal places every converted amount is rounded to.
pub const CONVERSION_DECIMAL_PLACES: u32 = 4;

/// Expresses an amount of a non-pivot currency in the pivot currency.
///
/// `rate` is the number of units of that currency per 1 pivot. Returns `None`
/// on overflow or a zero rate.
#[must_use]
pub fn to_pivot(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_div(rate)
}

/// Expresses a pivot amount in a non-pivot currency. Returns `None` on overflow.
#[must_use]
pub fn from_pivot(pivot_amount: Decimal, rate: Decimal) -> Option<Decimal> {
    pivot_amount.checked_mul(rate)
}

/// Rounds a converted amount to [`CONVERSION_DECIMAL_PLACES`].
#[must_use]
pub fn round_converted(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CONVERSION_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
