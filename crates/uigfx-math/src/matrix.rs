//! 4x4 transform matrix for 2D graphics.
//!
//! [`Matrix`] stores 16 floats in row-major order (`values[row * 4 + col]`)
//! and treats points as **row vectors**: `[x, y, z, 1] * matrix`. The
//! translation therefore lives in row 3, and the perspective terms used by
//! [`Matrix::map`] in column 3.
//!
//! # Operator order
//!
//! [`translate`](Matrix::translate), [`scale`](Matrix::scale) and the
//! `rotate_*` operators pre-multiply (`this = op * this`). Reading a chain
//! of calls bottom-up gives the order in which a point is transformed:
//!
//! ```rust
//! use uigfx_core::Offset;
//! use uigfx_math::Matrix;
//!
//! let mut m = Matrix::new();
//! m.translate(10.0, 0.0, 0.0);
//! m.rotate_z(90.0);
//!
//! // rotated first, then translated
//! let p = m.map(Offset::new(10.0, 0.0));
//! assert!((p.x - 10.0).abs() < 1e-4 && (p.y - 10.0).abs() < 1e-4);
//! ```
//!
//! `*=` right-multiplies: `a *= b` applies `a` first, then `b`.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use uigfx_core::{Offset, Rect};

/// A 4x4 matrix of 32-bit floats.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    /// Cells in row-major order.
    pub values: [f32; 16],
}

impl Matrix {
    /// Index of the X scale cell.
    pub const SCALE_X: usize = 0;
    /// Index of the Y skew cell.
    pub const SKEW_Y: usize = 1;
    /// Index of the first perspective cell (contributes `x` to `w`).
    pub const PERSPECTIVE_0: usize = 3;
    /// Index of the X skew cell.
    pub const SKEW_X: usize = 4;
    /// Index of the Y scale cell.
    pub const SCALE_Y: usize = 5;
    /// Index of the second perspective cell (contributes `y` to `w`).
    pub const PERSPECTIVE_1: usize = 7;
    /// Index of the Z scale cell.
    pub const SCALE_Z: usize = 10;
    /// Index of the X translation cell.
    pub const TRANSLATE_X: usize = 12;
    /// Index of the Y translation cell.
    pub const TRANSLATE_Y: usize = 13;
    /// Index of the Z translation cell.
    pub const TRANSLATE_Z: usize = 14;
    /// Index of the homogeneous scale cell.
    pub const PERSPECTIVE_2: usize = 15;

    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        values: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates an identity matrix.
    #[inline]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from 16 row-major cells.
    #[inline]
    pub const fn from_values(values: [f32; 16]) -> Self {
        Self { values }
    }

    /// Restores the identity in place.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Copies all 16 cells from `other`.
    #[inline]
    pub fn set_from(&mut self, other: &Matrix) {
        self.values = other.values;
    }

    /// Returns the cell at `row`, `column`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..4`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self[(row, column)]
    }

    /// Sets the cell at `row`, `column`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, v: f32) {
        self[(row, column)] = v;
    }

    /// Returns true if every cell equals the identity exactly.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.values == Self::IDENTITY.values
    }

    #[inline]
    fn at(&self, row: usize, column: usize) -> f32 {
        self.values[row * 4 + column]
    }

    // ========================================================================
    // Transform operators
    // ========================================================================

    /// Pre-multiplies by a translation.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        for j in 0..4 {
            let t = self.at(0, j) * x + self.at(1, j) * y + self.at(2, j) * z + self.at(3, j);
            self.values[12 + j] = t;
        }
    }

    /// Pre-multiplies by a scale along each axis.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        for j in 0..4 {
            self.values[j] *= x;
            self.values[4 + j] *= y;
            self.values[8 + j] *= z;
        }
    }

    /// [`Matrix::translate`] in the XY plane.
    #[inline]
    pub fn translate_2d(&mut self, x: f32, y: f32) {
        self.translate(x, y, 0.0);
    }

    /// Scales X and Y by `s`, leaving Z alone.
    #[inline]
    pub fn scale_uniform(&mut self, s: f32) {
        self.scale(s, s, 1.0);
    }

    /// Pre-multiplies by a rotation of `degrees` about the X axis.
    pub fn rotate_x(&mut self, degrees: f32) {
        let (c, s) = cos_sin(degrees);
        self.rotate_rows(1, 2, c, s);
    }

    /// Pre-multiplies by a rotation of `degrees` about the Y axis.
    pub fn rotate_y(&mut self, degrees: f32) {
        let (c, s) = cos_sin(degrees);
        for j in 0..4 {
            let a0 = self.at(0, j);
            let a2 = self.at(2, j);
            self.values[j] = c * a0 - s * a2;
            self.values[8 + j] = s * a0 + c * a2;
        }
    }

    /// Pre-multiplies by a rotation of `degrees` about the Z axis.
    pub fn rotate_z(&mut self, degrees: f32) {
        let (c, s) = cos_sin(degrees);
        self.rotate_rows(0, 1, c, s);
    }

    // row_a' = c*row_a + s*row_b, row_b' = -s*row_a + c*row_b
    fn rotate_rows(&mut self, a: usize, b: usize, c: f32, s: f32) {
        for j in 0..4 {
            let va = self.at(a, j);
            let vb = self.at(b, j);
            self.values[a * 4 + j] = c * va + s * vb;
            self.values[b * 4 + j] = -s * va + c * vb;
        }
    }

    // ========================================================================
    // Inversion
    // ========================================================================

    /// Replaces this matrix with its inverse.
    ///
    /// A singular matrix (determinant exactly zero) is left unchanged.
    pub fn invert(&mut self) {
        if let Some(values) = self.inverse_values() {
            self.values = values;
        }
    }

    /// Returns the inverse as a new matrix, or `None` if this one is singular.
    pub fn inverted(&self) -> Option<Matrix> {
        self.inverse_values().map(Matrix::from_values)
    }

    fn inverse_values(&self) -> Option<[f32; 16]> {
        let a00 = self.at(0, 0);
        let a01 = self.at(0, 1);
        let a02 = self.at(0, 2);
        let a03 = self.at(0, 3);
        let a10 = self.at(1, 0);
        let a11 = self.at(1, 1);
        let a12 = self.at(1, 2);
        let a13 = self.at(1, 3);
        let a20 = self.at(2, 0);
        let a21 = self.at(2, 1);
        let a22 = self.at(2, 2);
        let a23 = self.at(2, 3);
        let a30 = self.at(3, 0);
        let a31 = self.at(3, 1);
        let a32 = self.at(3, 2);
        let a33 = self.at(3, 3);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            return None;
        }
        let inv = 1.0 / det;

        Some([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv,
            (-a01 * b11 + a02 * b10 - a03 * b09) * inv,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv,
            (-a21 * b05 + a22 * b04 - a23 * b03) * inv,
            (-a10 * b11 + a12 * b08 - a13 * b07) * inv,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv,
            (-a30 * b05 + a32 * b02 - a33 * b01) * inv,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv,
            (-a00 * b10 + a01 * b08 - a03 * b06) * inv,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv,
            (-a20 * b04 + a21 * b02 - a23 * b00) * inv,
            (-a10 * b09 + a11 * b07 - a12 * b06) * inv,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv,
            (-a30 * b03 + a31 * b01 - a32 * b00) * inv,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv,
        ])
    }

    // ========================================================================
    // Mapping
    // ========================================================================

    /// Maps a point, dividing by the homogeneous `w`.
    ///
    /// When `1 / w` is not finite (zero or denormal `w`) the result is
    /// [`Offset::ZERO`].
    pub fn map(&self, point: Offset) -> Offset {
        let x = point.x;
        let y = point.y;
        let z = self.at(0, 3) * x + self.at(1, 3) * y + self.at(3, 3);
        let inverse_z = 1.0 / z;
        let p = if inverse_z.is_finite() { inverse_z } else { 0.0 };

        Offset::new(
            p * (self.at(0, 0) * x + self.at(1, 0) * y + self.at(3, 0)),
            p * (self.at(0, 1) * x + self.at(1, 1) * y + self.at(3, 1)),
        )
    }

    /// Maps the four corners of `rect` and returns their bounding box.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let [p0, p1, p2, p3] = rect.corners().map(|c| self.map(c));

        Rect::new(
            p0.x.min(p1.x).min(p2.x.min(p3.x)),
            p0.y.min(p1.y).min(p2.y.min(p3.y)),
            p0.x.max(p1.x).max(p2.x.max(p3.x)),
            p0.y.max(p1.y).max(p2.y.max(p3.y)),
        )
    }

    /// Same as [`map_rect`](Self::map_rect), writing the result into `rect`.
    pub fn map_rect_mut(&self, rect: &mut Rect) {
        *rect = self.map_rect(*rect);
    }

    // ========================================================================
    // glam interop
    // ========================================================================

    /// Converts to a column-vector glam matrix describing the same transform.
    ///
    /// glam reads the row-major cells as columns, which is the transpose;
    /// the transpose of a row-vector matrix is the column-vector form.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.values)
    }

    /// Creates from a column-vector glam matrix.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_values(m.to_cols_array())
    }
}

fn cos_sin(degrees: f32) -> (f32, f32) {
    let r = degrees as f64 * PI / 180.0;
    (r.cos() as f32, r.sin() as f32)
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        assert!(row < 4 && column < 4, "Matrix index out of bounds: ({}, {})", row, column);
        &self.values[row * 4 + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && column < 4, "Matrix index out of bounds: ({}, {})", row, column);
        &mut self.values[row * 4 + column]
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, m: &Matrix) {
        let a = *self;
        for row in 0..4 {
            for col in 0..4 {
                self.values[row * 4 + col] = a.at(row, 0) * m.at(0, col)
                    + a.at(row, 1) * m.at(1, col)
                    + a.at(row, 2) * m.at(2, col)
                    + a.at(row, 3) * m.at(3, col);
            }
        }
    }
}

impl MulAssign for Matrix {
    #[inline]
    fn mul_assign(&mut self, m: Matrix) {
        *self *= &m;
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(mut self, rhs: Matrix) -> Matrix {
        self *= &rhs;
        self
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "|{:?} {:?} {:?} {:?}|",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        Ok(())
    }
}
