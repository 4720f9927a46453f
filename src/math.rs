//! Mathematical utilities for the NOAA solar calculations.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Magnitude above which `wrap_degrees` reduces with a modulo before stepping.
const MAX_STEPPED_DEGREES: f64 = 3.6e6;

/// Converts degrees to radians.
///
/// Evaluated as `π·x/180` rather than `x·(π/180)` so results stay bit-compatible with
/// the NOAA reference tables.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    180.0 * radians / PI
}

/// Brings an angle in degrees into [0, 360] by repeated addition or subtraction of 360.
///
/// Unlike a modulo reduction, an input of exactly 360 is left untouched. Magnitudes above
/// 3.6e6° (about 10,000 years from J2000 for the solar mean longitude) are first reduced with
/// `%`, so there the result may differ from pure stepping in the last bits and an exact
/// multiple of 360 maps to 0 rather than 360. Non-finite values are returned unchanged.
pub fn wrap_degrees(mut degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    // keep the loops bounded for far-out epochs
    if degrees.abs() > MAX_STEPPED_DEGREES {
        degrees %= 360.0;
    }
    while degrees > 360.0 {
        degrees -= 360.0;
    }
    while degrees < 0.0 {
        degrees += 360.0;
    }
    degrees
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
