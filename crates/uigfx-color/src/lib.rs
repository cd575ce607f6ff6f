//! # uigfx-color
//!
//! Colors and color spaces for the uigfx kernel.
//!
//! A [`Color`] is a packed 64-bit value tagged with the id of a registered
//! [`ColorSpace`]. Color spaces are RGB (primaries, white point, transfer
//! function), CIE XYZ, CIE L\*a\*b\* or Oklab; a [`Connector`] converts
//! between any two of them through D50 XYZ.
//!
//! # Registered Spaces
//!
//! | id | space |
//! |----|-------|
//! | 0 | sRGB (8-bit packing) |
//! | 1-3 | linear sRGB, extended sRGB, linear extended sRGB |
//! | 4-13 | BT.709, BT.2020, DCI-P3, Display P3, NTSC 1953, SMPTE-C, Adobe RGB, ProPhoto, ACES, ACEScg |
//! | 14, 15 | CIE XYZ, CIE L\*a\*b\* |
//! | 16 | the space of [`Color::UNSPECIFIED`] |
//! | 17 | Oklab |
//!
//! # Usage
//!
//! ```rust
//! use uigfx_color::{lerp, Color, ColorSpaceId};
//!
//! let orange = Color::new(1.0, 0.5, 0.0, 1.0).unwrap();
//! let wide = orange.convert(ColorSpaceId::DisplayP3);
//! assert_eq!(wide.to_argb(), orange.to_argb());
//!
//! let veil = Color::new(0.0, 0.0, 0.0, 0.5).unwrap();
//! let shaded = veil.composite_over(Color::WHITE);
//! assert!(shaded.luminance() < 0.5);
//!
//! let mid = lerp(Color::RED, Color::BLUE, 0.5);
//! assert_eq!(mid.color_space_id(), ColorSpaceId::Srgb);
//! ```
//!
//! # Dependencies
//!
//! - `uigfx-math` - matrices, adaptation, interpolation
//! - `uigfx-transfer` - transfer functions
//! - `uigfx-primaries` - primaries, white points, RGB/XYZ matrices
//! - [`half`] - binary16 decoding
//! - `tracing` - connector and registry diagnostics
//! - `thiserror` - error types
//! - `serde` (optional) - colors serialize as their packed value
//!
//! # Used By
//!
//! - `uigfx-cli` - every color command
//! - `uigfx-tests` - reference tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod connector;
mod error;
mod lab;
mod model;
mod oklab;
mod registry;
mod rgb;
mod space;
mod xyz;

pub mod float16;

pub use color::{lerp, Color};
pub use connector::{Connector, RenderIntent};
pub use error::{ColorError, ColorResult};
pub use lab::Lab;
pub use model::ColorModel;
pub use oklab::Oklab;
pub use registry::{ColorSpaceId, ColorSpaces};
pub use rgb::Rgb;
pub use space::{ColorSpace, MAX_ID, MIN_ID};
pub use xyz::Xyz;

// Re-export sub-crates for convenience
pub use uigfx_math as math;
pub use uigfx_primaries as primaries;
pub use uigfx_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{lerp, Color, ColorSpace, ColorSpaceId, ColorSpaces, RenderIntent};

    pub use uigfx_math::Adaptation;
    pub use uigfx_primaries::{illuminant, Primaries, WhitePoint};
    pub use uigfx_transfer::{TransferFunction, TransferParameters};
}
