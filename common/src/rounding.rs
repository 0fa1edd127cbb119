//! Rounding of converted amounts.

/// Decimal places every conversion hop is rounded to by default.
pub const DEFAULT_ROUNDING_PLACES: u32 = 4;

/// Largest number of decimal places [`round_dp`] accepts.
pub const MAX_ROUNDING_PLACES: u32 = 15;

/// Magnitude at and above which a value is returned unrounded.
const ROUNDING_LIMIT: f64 = 1e16;

/// Round `value` to `places` decimal places, with midpoints going to the
/// even neighbour.
///
/// The value is scaled by `10^places`, rounded half-to-even and scaled back.
/// Values whose magnitude is at least `1e16` already carry no fractional
/// digits worth keeping and are returned as-is, as are NaN and infinities.
/// `places` is clamped to [`MAX_ROUNDING_PLACES`].
pub fn round_dp(value: f64, places: u32) -> f64 {
    if value.is_nan() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let factor = 10f64.powi(places.min(MAX_ROUNDING_PLACES) as i32);
    (value * factor).round_ties_even() / factor
}
