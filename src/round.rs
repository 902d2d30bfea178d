/*
    Public rounding surface
*/

use crate::ieee754::RoundingMode;

/// Returns the nearest integral value of `x`, with ties rounded to even
/// integral values.
///
/// Special cases are:
///  - `round(±0) = ±0`
///  - `round(±Inf) = ±Inf`
///  - `round(NaN) = NaN`
pub fn round(x: f64) -> f64 {
    to_nearest_even(x)
}

/// Returns the nearest value of `x` at `dp` decimal places, with ties
/// rounded to even. A negative `dp` rounds to tens, hundreds, and so on.
///
/// The result is obtained by scaling `x` by `10^dp`, rounding to the
/// nearest even integral value, and scaling back. The scaling is plain
/// binary64 arithmetic, so the result is the closest representable
/// value of the decimal rounding rather than an exact decimal.
///
/// Special cases are:
///  - `round_to(±0, dp) = ±0`
///  - `round_to(±Inf, dp) = ±Inf`
///  - `round_to(NaN, dp) = NaN`
pub fn round_to(x: f64, dp: f64) -> f64 {
    let scale = 10_f64.powf(dp);
    to_nearest_even(x * scale) / scale
}

/// Returns the nearest integral value of `x`, with ties rounded to even
/// integral values. This is the IEEE-754 default mode.
///
/// Special cases are:
///  - `to_nearest_even(±0) = ±0`
///  - `to_nearest_even(±Inf) = ±Inf`
///  - `to_nearest_even(NaN) = NaN`
pub fn to_nearest_even(x: f64) -> f64 {
    RoundingMode::NearestEven.round(x)
}

/// Returns the nearest integral value of `x`, with ties rounded away
/// from zero.
///
/// Special cases are:
///  - `to_nearest_away(±0) = ±0`
///  - `to_nearest_away(±Inf) = ±Inf`
///  - `to_nearest_away(NaN) = NaN`
pub fn to_nearest_away(x: f64) -> f64 {
    RoundingMode::NearestAway.round(x)
}

/// Returns the nearest integral value toward zero; the fractional part
/// of `x` is discarded.
///
/// Special cases are:
///  - `to_zero(±0) = ±0`
///  - `to_zero(±Inf) = ±Inf`
///  - `to_zero(NaN) = NaN`
pub fn to_zero(x: f64) -> f64 {
    RoundingMode::ToZero.round(x)
}

/// Returns the smallest integral value greater than or equal to `x`
/// (the ceiling).
///
/// Special cases are:
///  - `to_positive_inf(±0) = ±0`
///  - `to_positive_inf(±Inf) = ±Inf`
///  - `to_positive_inf(NaN) = NaN`
pub fn to_positive_inf(x: f64) -> f64 {
    RoundingMode::ToPositive.round(x)
}

/// Returns the largest integral value less than or equal to `x`
/// (the floor).
///
/// Special cases are:
///  - `to_negative_inf(±0) = ±0`
///  - `to_negative_inf(±Inf) = ±Inf`
///  - `to_negative_inf(NaN) = NaN`
pub fn to_negative_inf(x: f64) -> f64 {
    RoundingMode::ToNegative.round(x)
}
