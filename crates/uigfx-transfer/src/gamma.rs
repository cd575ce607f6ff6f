//! Pure power-law transfer functions.
//!
//! - 1.0: linear spaces (identity)
//! - 2.2: Adobe RGB (1998)
//! - 2.6: DCI theatrical projection
//!
//! Negative inputs clamp to zero before the power is taken.
//!
//! ProPhoto RGB is a 1.8 gamma with a short linear toe; its parameters
//! live here as [`ROMM`].

use crate::TransferParameters;

/// ROMM (ProPhoto RGB, ISO 22028-2) curve parameters.
pub const ROMM: TransferParameters = TransferParameters {
    gamma: 1.8,
    a: 1.0,
    b: 0.0,
    c: 1.0 / 16.0,
    d: 0.031248,
    e: 0.0,
    f: 0.0,
};

/// EOTF for arbitrary gamma: `max(v, 0)^gamma`
///
/// # Example
///
/// ```rust
/// use uigfx_transfer::gamma::gamma_eotf;
///
/// assert!((gamma_eotf(0.5, 2.0) - 0.25).abs() < 1e-12);
/// assert_eq!(gamma_eotf(-0.5, 2.2), 0.0);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    let v = if v < 0.0 { 0.0 } else { v };
    v.powf(gamma)
}

/// OETF for arbitrary gamma: `max(l, 0)^(1/gamma)`
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    let l = if l < 0.0 { 0.0 } else { l };
    l.powf(1.0 / gamma)
}
