//! RGB primaries and the matrices derived from them.

use uigfx_math::{Mat3, Vec3};

use crate::WhitePoint;

/// Chromaticities of the three primaries of an RGB color space.
///
/// # Example
///
/// ```rust
/// use uigfx_primaries::Primaries;
///
/// let custom = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
/// };
/// assert_eq!(custom.to_array()[3], 0.60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
}

impl Primaries {
    /// Creates primaries from `[rx, ry, gx, gy, bx, by]`.
    #[inline]
    pub const fn from_array(p: [f32; 6]) -> Self {
        Self {
            r: (p[0], p[1]),
            g: (p[2], p[3]),
            b: (p[4], p[5]),
        }
    }

    /// Returns `[rx, ry, gx, gy, bx, by]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 6] {
        [self.r.0, self.r.1, self.g.0, self.g.1, self.b.0, self.b.1]
    }

    /// Recovers the primaries of an RGB to XYZ transform.
    ///
    /// Each primary is the image of a unit RGB vector, projected to xy.
    pub fn from_matrix(to_xyz: &Mat3) -> Self {
        let xy = |v: Vec3| {
            let sum = v.x + v.y + v.z;
            (v.x / sum, v.y / sum)
        };
        Self {
            r: xy(*to_xyz * Vec3::X),
            g: xy(*to_xyz * Vec3::Y),
            b: xy(*to_xyz * Vec3::Z),
        }
    }

    /// True if every chromaticity is within 1e-3 of `other`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a == b || (a - b).abs() < 1e-3)
    }

    /// Area of the gamut triangle in the xy plane.
    pub fn area(&self) -> f32 {
        let [rx, ry, gx, gy, bx, by] = self.to_array();
        let det = rx * gy + ry * bx + gx * by - gy * bx - ry * gx - rx * by;
        (0.5 * det).abs()
    }

    /// Corner-wise containment of `other` in this gamut.
    ///
    /// Each corner of `self`, taken relative to the matching corner of
    /// `other`, must lie inside the wedge formed by the two edges of
    /// `other` meeting there. Gamuts whose corners are not in the same
    /// rotational order fail the test even when the triangle covers them.
    pub fn contains(&self, other: &Self) -> bool {
        let p1 = self.to_array();
        let p2 = other.to_array();
        let p0: [f32; 6] = std::array::from_fn(|i| p1[i] - p2[i]);

        let outside = |ax: f32, ay: f32, bx: f32, by: f32| cross(ax, ay, bx, by) < 0.0;

        // red
        if outside(p0[0], p0[1], p2[0] - p2[4], p2[1] - p2[5])
            || outside(p2[0] - p2[2], p2[1] - p2[3], p0[0], p0[1])
        {
            return false;
        }
        // green
        if outside(p0[2], p0[3], p2[2] - p2[0], p2[3] - p2[1])
            || outside(p2[2] - p2[4], p2[3] - p2[5], p0[2], p0[3])
        {
            return false;
        }
        // blue
        !(outside(p0[4], p0[5], p2[4] - p2[2], p2[5] - p2[3])
            || outside(p2[4] - p2[0], p2[5] - p2[1], p0[4], p0[5]))
    }

    /// Wide gamut test for an RGB space with these primaries.
    ///
    /// True when the gamut covers more than 90% of [`NTSC_1953`] and
    /// contains [`SRGB`], or when the encoding range extends past [0, 1]
    /// on both sides.
    pub fn is_wide_gamut(&self, min: f32, max: f32) -> bool {
        (self.area() / NTSC_1953.area() > 0.9 && self.contains(&SRGB)) || (min < 0.0 && max > 1.0)
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

// ============================================================================
// Standard Primaries
// ============================================================================

/// sRGB / BT.709 primaries.
pub const SRGB: Primaries = Primaries {
    r: (0.640, 0.330),
    g: (0.300, 0.600),
    b: (0.150, 0.060),
};

/// NTSC (1953) primaries.
pub const NTSC_1953: Primaries = Primaries {
    r: (0.67, 0.33),
    g: (0.21, 0.71),
    b: (0.14, 0.08),
};

/// BT.2020 primaries.
pub const BT2020: Primaries = Primaries {
    r: (0.708, 0.292),
    g: (0.170, 0.797),
    b: (0.131, 0.046),
};

/// DCI-P3 primaries, shared by Display P3.
pub const DCI_P3: Primaries = Primaries {
    r: (0.680, 0.320),
    g: (0.265, 0.690),
    b: (0.150, 0.060),
};

/// SMPTE-C primaries.
pub const SMPTE_C: Primaries = Primaries {
    r: (0.630, 0.340),
    g: (0.310, 0.595),
    b: (0.155, 0.070),
};

/// Adobe RGB (1998) primaries.
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.64, 0.33),
    g: (0.21, 0.71),
    b: (0.15, 0.06),
};

/// ROMM / ProPhoto RGB primaries.
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
};

/// ACES AP0 primaries (ACES 2065-1).
pub const ACES_AP0: Primaries = Primaries {
    r: (0.73470, 0.26530),
    g: (0.0, 1.0),
    b: (0.00010, -0.0770),
};

/// ACES AP1 primaries (ACEScg).
pub const ACES_AP1: Primaries = Primaries {
    r: (0.713, 0.293),
    g: (0.165, 0.830),
    b: (0.128, 0.044),
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the RGB to XYZ matrix for a set of primaries and a white.
///
/// Closed form: the luminance of each primary is solved directly from
/// the chromaticity ratios so that RGB (1, 1, 1) maps to the white with
/// `Y = 1`. All arithmetic is `f32`.
///
/// # Example
///
/// ```rust
/// use uigfx_math::Vec3;
/// use uigfx_primaries::{illuminant, rgb_to_xyz_matrix, SRGB};
///
/// let m = rgb_to_xyz_matrix(&SRGB, illuminant::D65);
/// let red = m * Vec3::X;
/// assert!((red.y - 0.2126).abs() < 1e-3);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries, white: WhitePoint) -> Mat3 {
    let [rx, ry, gx, gy, bx, by] = primaries.to_array();
    let (wx, wy) = (white.x, white.y);

    let one_rx_ry = (1.0 - rx) / ry;
    let one_gx_gy = (1.0 - gx) / gy;
    let one_bx_by = (1.0 - bx) / by;
    let one_wx_wy = (1.0 - wx) / wy;

    let rx_ry = rx / ry;
    let gx_gy = gx / gy;
    let bx_by = bx / by;
    let wx_wy = wx / wy;

    let by_numerator =
        (one_wx_wy - one_rx_ry) * (gx_gy - rx_ry) - (wx_wy - rx_ry) * (one_gx_gy - one_rx_ry);
    let by_denominator =
        (one_bx_by - one_rx_ry) * (gx_gy - rx_ry) - (bx_by - rx_ry) * (one_gx_gy - one_rx_ry);
    let b_y = by_numerator / by_denominator;
    let g_y = (wx_wy - rx_ry - b_y * (bx_by - rx_ry)) / (gx_gy - rx_ry);
    let r_y = 1.0 - g_y - b_y;

    let r_y_ry = r_y / ry;
    let g_y_gy = g_y / gy;
    let b_y_by = b_y / by;

    Mat3::from_cols([
        [r_y_ry * rx, r_y, r_y_ry * (1.0 - rx - ry)],
        [g_y_gy * gx, g_y, g_y_gy * (1.0 - gx - gy)],
        [b_y_by * bx, b_y, b_y_by * (1.0 - bx - by)],
    ])
}

/// Computes the XYZ to RGB matrix, the inverse of [`rgb_to_xyz_matrix`].
///
/// Returns `None` for degenerate primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries, white: WhitePoint) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries, white).inverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB, illuminant::D65);
        let expected = Mat3::from_rows([
            [0.412_386_4, 0.357_591_5, 0.180_450_56],
            [0.212_636_77, 0.715_183, 0.072_180_22],
            [0.019_330_615, 0.119_197_12, 0.950_372_9],
        ]);
        assert!(m.abs_diff_eq(&expected, 1e-6), "{:?}", m);
    }

    #[test]
    fn test_white_maps_to_white() {
        for (p, w) in [
            (SRGB, illuminant::D65),
            (DCI_P3, illuminant::DCI),
            (PROPHOTO_RGB, illuminant::D50),
            (ACES_AP0, illuminant::D60),
        ] {
            let m = rgb_to_xyz_matrix(&p, w);
            let white = m * Vec3::ONE;
            assert!(white.abs_diff_eq(w.to_xyz(), 1e-4), "{:?} -> {:?}", p, white);
        }
    }

    #[test]
    fn test_matrix_roundtrip_through_chromaticities() {
        let m = rgb_to_xyz_matrix(&BT2020, illuminant::D65);
        assert!(Primaries::from_matrix(&m).approx_eq(&BT2020));
        assert!(WhitePoint::from_matrix(&m).approx_eq(&illuminant::D65));
    }

    #[test]
    fn test_inverse_matrix() {
        let to_xyz = rgb_to_xyz_matrix(&ADOBE_RGB, illuminant::D65);
        let from_xyz = xyz_to_rgb_matrix(&ADOBE_RGB, illuminant::D65).unwrap();
        assert!((from_xyz * to_xyz).abs_diff_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_area() {
        assert!((SRGB.area() - 0.11205).abs() < 1e-5);
        assert!((NTSC_1953.area() - 0.1582).abs() < 1e-5);
    }

    #[test]
    fn test_contains() {
        assert!(SRGB.contains(&SRGB));
        assert!(BT2020.contains(&SRGB));
        assert!(DCI_P3.contains(&SRGB));
        assert!(!SRGB.contains(&BT2020));
        // Blue corner of NTSC sits above the sRGB blue
        assert!(!NTSC_1953.contains(&SRGB));
    }

    #[test]
    fn test_wide_gamut() {
        assert!(!SRGB.is_wide_gamut(0.0, 1.0));
        assert!(DCI_P3.is_wide_gamut(0.0, 1.0));
        assert!(BT2020.is_wide_gamut(0.0, 1.0));
        assert!(ADOBE_RGB.is_wide_gamut(0.0, 1.0));
        assert!(!SMPTE_C.is_wide_gamut(0.0, 1.0));
        // Extended range makes any gamut wide
        assert!(SRGB.is_wide_gamut(-0.5, 7.499));
    }

    #[test]
    fn test_array_layout() {
        let a = ACES_AP1.to_array();
        assert_eq!(a, [0.713, 0.293, 0.165, 0.830, 0.128, 0.044]);
        assert_eq!(Primaries::from_array(a), ACES_AP1);
    }
}
