//! Reference white chromaticity.

use std::fmt;

use uigfx_math::{Mat3, Vec3};

/// CIE xy chromaticity of a reference white.
///
/// ```rust
/// use uigfx_primaries::WhitePoint;
///
/// let d65 = WhitePoint::new(0.31271, 0.32902);
/// let xyz = d65.to_xyz();
/// assert_eq!(xyz.y, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
}

impl WhitePoint {
    /// Creates a white point from xy chromaticity.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a white point from a tristimulus value, dropping its magnitude.
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        let sum = x + y + z;
        Self::new(x / sum, y / sum)
    }

    /// White point of an RGB to XYZ transform: the image of RGB (1, 1, 1).
    pub fn from_matrix(to_xyz: &Mat3) -> Self {
        let w = *to_xyz * Vec3::ONE;
        let sum = w.x + w.y + w.z;
        Self::new(w.x / sum, w.y / sum)
    }

    /// XYZ of this white with `Y = 1`.
    #[inline]
    pub fn to_xyz(&self) -> Vec3 {
        Vec3::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
    }

    /// True if both coordinates are within 1e-3 of `other`.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self == other || ((self.x - other.x).abs() < 1e-3 && (self.y - other.y).abs() < 1e-3)
    }
}

impl From<(f32, f32)> for WhitePoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WhitePoint({:?}, {:?})", self.x, self.y)
    }
}
