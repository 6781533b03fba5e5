//! Numeric helpers shared by the estimators.
//!
//! Work and price arithmetic runs in `f64`. Any value that is about to be
//! ceilinged is first rounded to [`STABLE_DECIMAL_PLACES`] so that a result
//! which is mathematically an integer (e.g. `4.0000000001`) does not spill
//! into the next unit.

/// Decimal places kept before a ceiling operation.
pub const STABLE_DECIMAL_PLACES: u32 = 6;

/// Rounds `value` to `places` decimal places (half away from zero).
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Ceiling after trimming floating-point noise below the stable precision.
pub fn ceil_stable(value: f64) -> f64 {
    round_to_places(value, STABLE_DECIMAL_PLACES).ceil()
}

/// Rounds a monetary amount to the nearest whole currency unit.
pub fn round_currency(value: f64) -> f64 {
    value.round()
}
