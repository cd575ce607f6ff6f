//! Rec.709 and Rec.2020 transfer functions.
//!
//! Both are the camera OETF of ITU-R BT.709 / BT.2020 and its exact
//! inverse. BT.2020 only refines the constants for 12-bit precision.
//!
//! # Formula
//!
//! ```text
//! OETF: V = 4.5 * L                      for L <  0.018
//!       V = 1.099 * L^0.45 - 0.099       for L >= 0.018
//! ```
//!
//! The same curve encodes NTSC (1953) and SMPTE-C.

use crate::TransferParameters;

/// BT.709 curve parameters.
pub const BT709: TransferParameters = TransferParameters {
    gamma: 1.0 / 0.45,
    a: 1.0 / 1.099,
    b: 0.099 / 1.099,
    c: 1.0 / 4.5,
    d: 0.081,
    e: 0.0,
    f: 0.0,
};

/// BT.2020 curve parameters.
pub const BT2020: TransferParameters = TransferParameters {
    gamma: 1.0 / 0.45,
    a: 1.0 / 1.0993,
    b: 0.0993 / 1.0993,
    c: 1.0 / 4.5,
    d: 0.08145,
    e: 0.0,
    f: 0.0,
};

/// Rec.709 OETF: linear to encoded.
#[inline]
pub fn oetf(l: f64) -> f64 {
    BT709.rcp_response(l)
}

/// Rec.709 inverse OETF: encoded to linear.
#[inline]
pub fn eotf(v: f64) -> f64 {
    BT709.response(v)
}
