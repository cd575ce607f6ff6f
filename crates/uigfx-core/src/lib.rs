//! # uigfx-core
//!
//! Geometry value types shared by the uigfx crates.
//!
//! - [`Offset`] - a 2D point
//! - [`Rect`] - an axis-aligned rectangle with float edges
//!
//! These are the inputs and outputs of [`uigfx_math::Matrix::map`] and
//! `Matrix::map_rect`; nothing here knows about transforms or colors.
//!
//! ## Crate Structure
//!
//! ```text
//! uigfx-core (this crate)
//!    ^
//!    |
//!    +-- uigfx-math (Matrix, Mat3, adaptation)
//!    +-- uigfx-color (Color, color spaces)
//!    +-- uigfx-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Offset`] and [`Rect`]
//!
//! [`uigfx_math::Matrix::map`]: https://docs.rs/uigfx-math

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod offset;
pub mod rect;

pub use offset::*;
pub use rect::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use uigfx_core::prelude::*;
///
/// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert_eq!(r.corners()[0], Offset::ZERO);
/// ```
pub mod prelude {
    pub use crate::offset::Offset;
    pub use crate::rect::Rect;
}
