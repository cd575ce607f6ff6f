//! Chromatic Adaptation Transforms (CAT).
//!
//! Matrices and functions for adapting XYZ colors between white points,
//! using the von Kries method: move into a cone response (LMS) space,
//! scale each cone by the ratio of the two whites, move back.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - the default; used for every adaptation to D50
//! - [`VON_KRIES`] - classic Hunt-Pointer-Estevez cone response
//! - [`CAT02`] - from the CIECAM02 color appearance model
//!
//! # Usage
//!
//! ```rust
//! use uigfx_math::{adapt_matrix, Adaptation, Vec3};
//!
//! let d65 = Vec3::new(0.95045, 1.0, 1.08905);
//! let d50 = Vec3::new(0.964212, 1.0, 0.825188);
//!
//! let d65_to_d50 = adapt_matrix(Adaptation::Bradford.transform(), d65, d50);
//! let white = d65_to_d50 * d65;
//! assert!((white.z - d50.z).abs() < 1e-4);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Chromatic Adaptation Matrices
// ============================================================================

/// Bradford chromatic adaptation matrix.
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 chromatic adaptation matrix.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Chromatic adaptation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adaptation {
    /// Bradford transform
    #[default]
    Bradford,
    /// Von Kries transform
    VonKries,
    /// CIECAM02 transform
    Ciecat02,
}

impl Adaptation {
    /// All methods, in declaration order.
    pub const ALL: [Adaptation; 3] = [Self::Bradford, Self::VonKries, Self::Ciecat02];

    /// The XYZ to LMS matrix of this method.
    #[inline]
    pub const fn transform(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
            Self::Ciecat02 => CAT02,
        }
    }

    /// Adaptation matrix from `src_white` to `dst_white` (both XYZ, Y = 1).
    #[inline]
    pub fn matrix(self, src_white: Vec3, dst_white: Vec3) -> Mat3 {
        adapt_matrix(self.transform(), src_white, dst_white)
    }
}

impl std::fmt::Display for Adaptation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bradford => "Bradford",
            Self::VonKries => "von Kries",
            Self::Ciecat02 => "CIECAT02",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Computes a chromatic adaptation matrix between two white points.
///
/// The result is `M⁻¹ × (diag(M·dst / M·src) × M)`, evaluated in that
/// association so conversions that chain it stay reproducible.
///
/// # Arguments
///
/// * `method` - The CAT matrix ([`BRADFORD`], [`VON_KRIES`], [`CAT02`])
/// * `src_white` - Source white point in XYZ
/// * `dst_white` - Destination white point in XYZ
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_lms = method * src_white;
    let dst_lms = method * dst_white;

    method_inv * method.scale_rows(dst_lms / src_lms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const D65: Vec3 = Vec3::new(0.31271 / 0.32902, 1.0, (1.0 - 0.31271 - 0.32902) / 0.32902);
    const D50: Vec3 = Vec3::new(0.964212, 1.0, 0.825188);

    #[test]
    fn test_adapt_maps_white_to_white() {
        for method in Adaptation::ALL {
            let m = method.matrix(D65, D50);
            let white = m * D65;
            assert!(
                white.abs_diff_eq(D50, 1e-4),
                "{} mapped D65 to {:?}",
                method,
                white
            );
        }
    }

    #[test]
    fn test_adapt_matrix_roundtrip() {
        let there = adapt_matrix(BRADFORD, D65, D50);
        let back = adapt_matrix(BRADFORD, D50, D65);
        let roundtrip = back * there;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (roundtrip.m[i][j] - expected).abs() < 1e-4,
                    "roundtrip[{}][{}] = {} (expected {})",
                    i,
                    j,
                    roundtrip.m[i][j],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_adapt_identity() {
        let same = adapt_matrix(BRADFORD, D65, D65);
        assert!(same.abs_diff_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_bradford_d65_to_d50_reference() {
        // Published Bradford D65 -> D50 matrix
        let m = adapt_matrix(BRADFORD, D65, D50);
        let reference = Mat3::from_rows([
            [1.0478112, 0.0228866, -0.0501270],
            [0.0295424, 0.9904844, -0.0170491],
            [-0.0092345, 0.0150436, 0.7521316],
        ]);
        assert!(m.abs_diff_eq(&reference, 2e-3));
    }

    #[test]
    fn test_transform_lookup() {
        assert_eq!(Adaptation::default(), Adaptation::Bradford);
        assert_eq!(Adaptation::VonKries.transform(), VON_KRIES);
        assert_eq!(Adaptation::Ciecat02.transform().m[0][0], 0.7328);
    }
}
