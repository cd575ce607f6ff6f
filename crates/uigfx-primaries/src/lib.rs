//! # uigfx-primaries
//!
//! Chromaticities of RGB primaries and reference whites, and the matrices
//! derived from them.
//!
//! An RGB color space is pinned to CIE XYZ by four xy chromaticities: one
//! per primary plus the white point. From those this crate derives the
//! RGB to XYZ matrix, and from a matrix it can recover the chromaticities.
//!
//! # Included Primaries
//!
//! | Primaries | Gamut |
//! |-----------|-------|
//! | [`SRGB`] | sRGB, BT.709, scRGB |
//! | [`DCI_P3`] | DCI-P3, Display P3 |
//! | [`BT2020`] | BT.2020 |
//! | [`NTSC_1953`] | NTSC (1953), reference for the wide gamut test |
//! | [`SMPTE_C`] | SMPTE-C |
//! | [`ADOBE_RGB`] | Adobe RGB (1998) |
//! | [`PROPHOTO_RGB`] | ROMM / ProPhoto RGB |
//! | [`ACES_AP0`], [`ACES_AP1`] | ACES 2065-1, ACEScg |
//!
//! # Usage
//!
//! ```rust
//! use uigfx_math::Vec3;
//! use uigfx_primaries::{illuminant, rgb_to_xyz_matrix, SRGB};
//!
//! let m = rgb_to_xyz_matrix(&SRGB, illuminant::D65);
//!
//! // White maps to the white point, Y normalized to 1
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - [`uigfx-math`] - `Mat3` and `Vec3`
//!
//! # Used By
//!
//! - `uigfx-color` - RGB color spaces and connectors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod illuminant;
mod primaries;
mod white_point;

pub use primaries::*;
pub use white_point::WhitePoint;
