//! # uigfx-transfer
//!
//! Transfer functions (OETF/EOTF) for the RGB color spaces of uigfx.
//!
//! Every RGB space encodes its values with a transfer function. Most of
//! them fit the ICC parametric curve described by [`TransferParameters`];
//! the rest are pure power laws or the identity.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Extended**: the curve is mirrored around zero for negative inputs
//!
//! # Supported Curves
//!
//! | Curve | Used by |
//! |-------|---------|
//! | [`srgb::SRGB`] | sRGB, Display P3, extended sRGB |
//! | [`rec709::BT709`] | BT.709, NTSC 1953, SMPTE-C |
//! | [`rec709::BT2020`] | BT.2020 |
//! | [`gamma::ROMM`] | ProPhoto RGB |
//! | [`TransferFunction::gamma`] | Adobe RGB (2.2), DCI-P3 (2.6), linear spaces |
//!
//! All evaluation happens in `f64`.
//!
//! # Usage
//!
//! ```rust
//! use uigfx_transfer::{srgb, TransferFunction};
//!
//! let linear = srgb::eotf(0.5);
//! assert!((srgb::oetf(linear) - 0.5).abs() < 1e-12);
//!
//! let adobe = TransferFunction::gamma(2.2);
//! assert!((adobe.eotf(0.5) - 0.5f64.powf(2.2)).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - `thiserror` - parameter validation errors
//!
//! # Used By
//!
//! - `uigfx-color` - RGB color spaces

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod function;
mod params;

pub mod gamma;
pub mod rec709;
pub mod srgb;

pub use error::{TransferError, TransferResult};
pub use function::TransferFunction;
pub use params::TransferParameters;
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
