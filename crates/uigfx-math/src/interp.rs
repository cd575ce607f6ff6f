//! Scalar interpolation and clamping.
//!
//! # Usage
//!
//! ```rust
//! use uigfx_math::{lerp, saturate};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(saturate(1.5), 1.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`, both exactly.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `(1 - t) * a + t * b`
///
/// Color interpolation depends on this exact evaluation order; the
/// `a + (b - a) * t` form rounds differently.
///
/// ```rust
/// use uigfx_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.3, 0.7, 1.0), 0.7);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Clamps a value to the range [min, max].
///
/// NaN passes through unchanged.
///
/// ```rust
/// use uigfx_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    if value <= 0.0 {
        0.0
    } else if value >= 1.0 {
        1.0
    } else {
        value
    }
}

/// Clamps a double-precision value to [min, max].
///
/// Used around transfer functions, which are evaluated in `f64`.
#[inline]
pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
