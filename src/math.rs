//! Mathematical utilities for the rise/set calculations.
//!
//! Every quantity in the pipeline is an angle in degrees, so the
//! trigonometric wrappers here take and return degrees. Math functions use
//! the standard library with the `std` feature and `libm` otherwise.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Degrees per radian (180/π).
pub const DEGREES_PER_RADIAN: f64 = 180.0 / core::f64::consts::PI;

/// Normalizes an angle in degrees to the range [0, 360).
///
/// Uses a floor-based reduction so negative inputs reduce correctly.
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    degrees - 360.0 * floor(degrees / 360.0)
}

/// Normalizes an angle in degrees to within ±180 degrees.
pub fn normalize_degrees_signed_180(degrees: f64) -> f64 {
    degrees - 360.0 * floor(degrees / 360.0 + 0.5)
}

/// Computes the sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    #[cfg(feature = "std")]
    return degrees.to_radians().sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(degrees.to_radians());
}

/// Computes the cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    #[cfg(feature = "std")]
    return degrees.to_radians().cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(degrees.to_radians());
}

/// Computes the tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    #[cfg(feature = "std")]
    return degrees.to_radians().tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(degrees.to_radians());
}

/// Computes the arcsine of `x`, in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin().to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::asin(x).to_degrees();
}

/// Computes the arccosine of `x`, in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos().to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::acos(x).to_degrees();
}

/// Computes the arctangent of `x`, in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan().to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::atan(x).to_degrees();
}

/// Computes the four-quadrant arctangent of `y`/`x`, in degrees.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x).to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x).to_degrees();
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
