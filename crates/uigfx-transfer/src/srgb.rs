//! sRGB transfer function (IEC 61966-2-1).
//!
//! Piecewise curve with a linear segment near black:
//!
//! ```text
//! EOTF: L = V / 12.92                    for V <  0.04045
//!       L = ((V + 0.055) / 1.055)^2.4    for V >= 0.04045
//! ```
//!
//! Display P3 uses the same curve. The extended (scRGB-nl) variant mirrors
//! it around zero, see [`eotf_extended`].

use crate::TransferParameters;

/// sRGB curve parameters.
pub const SRGB: TransferParameters = TransferParameters {
    gamma: 2.4,
    a: 1.0 / 1.055,
    b: 0.055 / 1.055,
    c: 1.0 / 12.92,
    d: 0.04045,
    e: 0.0,
    f: 0.0,
};

/// sRGB EOTF: encoded to linear.
///
/// # Example
///
/// ```rust
/// use uigfx_transfer::srgb;
///
/// assert_eq!(srgb::eotf(0.0), 0.0);
/// assert!((srgb::eotf(1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    SRGB.response(v)
}

/// sRGB OETF: linear to encoded.
#[inline]
pub fn oetf(l: f64) -> f64 {
    SRGB.rcp_response(l)
}

/// Extended sRGB EOTF, odd-symmetric around zero.
#[inline]
pub fn eotf_extended(v: f64) -> f64 {
    SRGB.abs_response(v)
}

/// Extended sRGB OETF, odd-symmetric around zero.
#[inline]
pub fn oetf_extended(l: f64) -> f64 {
    SRGB.abs_rcp_response(l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_known_values() {
        // Mid grey
        assert!((eotf(0.5) - 0.214_041_140_5).abs() < 1e-9);
        assert!((oetf(0.18) - 0.461_356_129_5).abs() < 1e-6);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_linear_segment() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(0.04) - 0.04 / 12.92).abs() < 1e-12);
        assert!((oetf(0.001) - 0.012_92).abs() < 1e-9);
    }

    #[test]
    fn test_srgb_extended_is_odd() {
        for v in [0.01, 0.3, 0.9, 1.5, 2.3] {
            assert_eq!(eotf_extended(-v), -eotf_extended(v));
            assert_eq!(oetf_extended(-v), -oetf_extended(v));
        }
        // Values past 1.0 keep following the power segment
        assert!(eotf_extended(2.0) > 1.0);
    }
}
