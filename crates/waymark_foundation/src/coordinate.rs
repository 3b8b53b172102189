//! Fixed-precision coordinate encoding.
//!
//! Geographic degrees are stored as `i32` with seven decimal digits, which
//! covers ±180° with room to spare (`180 × 10^7 < i32::MAX`).

use crate::error::{Error, Result};

/// Number of decimal digits kept by the encoding.
pub const PRECISION: u32 = 7;

/// Multiplier between degrees and fixed-precision units.
pub const SCALE: f64 = 10_000_000.0;

/// Size of one fixed-precision unit, in degrees.
pub const QUANTUM: f64 = 1.0 / SCALE;

/// Converts degrees to fixed-precision units, rounding to the nearest unit.
///
/// # Errors
///
/// Returns [`ErrorKind::CoordinateOutOfRange`](crate::ErrorKind::CoordinateOutOfRange)
/// if the value is not finite or does not fit in an `i32` once scaled.
#[allow(clippy::cast_possible_truncation)]
pub fn to_fixed(degrees: f64) -> Result<i32> {
    let scaled = (degrees * SCALE).round();
    if !scaled.is_finite() || scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
        return Err(Error::coordinate_out_of_range(degrees));
    }
    Ok(scaled as i32)
}

/// Converts fixed-precision units back to degrees.
#[must_use]
pub fn to_degrees(fixed: i32) -> f64 {
    f64::from(fixed) / SCALE
}
