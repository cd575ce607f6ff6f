//! # uigfx-math
//!
//! Math primitives for the uigfx kernel.
//!
//! - [`Matrix`] - 4x4 transform applied to 2D points and rectangles
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ color transforms
//! - [`Vec3`] - 3D vectors for color triplets
//! - Chromatic adaptation ([`Adaptation`], [`adapt_matrix`])
//! - Interpolation helpers ([`lerp`], [`clamp`], [`saturate`])
//!
//! # Conventions
//!
//! [`Mat3`] is row-major and multiplies **column vectors**:
//!
//! ```text
//! xyz = matrix * rgb
//! ```
//!
//! [`Matrix`] is row-major too but follows the 2D graphics convention of
//! **row vectors**: a point is `[x, y, 0, 1] * matrix`, and the translation
//! lives in row 3. Transform operators pre-multiply, so the most recently
//! added operator is the first one applied to a point.
//!
//! # Usage
//!
//! ```rust
//! use uigfx_core::{Offset, Rect};
//! use uigfx_math::Matrix;
//!
//! let mut m = Matrix::new();
//! m.rotate_z(90.0);
//! m.scale(2.0, 2.0, 1.0);
//!
//! let r = m.map_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert!((r.left + 20.0).abs() < 1e-4);
//! assert!((r.bottom - 20.0).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop for both matrix types
//! - `uigfx-core` - [`Offset`](uigfx_core::Offset) and [`Rect`](uigfx_core::Rect)
//!
//! # Used By
//!
//! - `uigfx-primaries` - RGB/XYZ matrix derivation
//! - `uigfx-color` - color space conversion and adaptation
//! - `uigfx-cli` - the `transform` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod interp;
mod mat3;
mod matrix;
mod vec3;

pub use adapt::*;
pub use interp::*;
pub use mat3::*;
pub use matrix::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Mat4 as GlamMat4, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
