//! Oklab perceptual color space.
//!
//! Björn Ottosson's Oklab, set up on a D50 connection space: XYZ (D50) is
//! Bradford-adapted to D65 before the LMS matrix, so `M1` below already
//! includes that adaptation.
//!
//! ```text
//! lms  = M1 * xyz
//! lms' = cbrt(lms)
//! lab  = M2 * lms'
//! ```

use uigfx_math::{adapt_matrix, clamp, Mat3, Vec3, BRADFORD};
use uigfx_primaries::illuminant;

/// Oklab LMS matrix (XYZ D65 to LMS), column by column.
#[rustfmt::skip]
const LMS: [f32; 9] = [
    0.8189330101, 0.0329845436, 0.0482003018,
    0.3618667424, 0.9293118715, 0.2643662691,
    -0.1288597137, 0.0361456387, 0.6338517070,
];

/// Non-linear LMS to Lab, column by column.
#[rustfmt::skip]
const LMS_TO_LAB: [f32; 9] = [
    0.2104542553, 1.9779984951, 0.0259040371,
    0.7936177850, -2.4285922050, 0.7827717662,
    -0.0040720468, 0.4505937099, -0.8086757660,
];

/// Oklab: L in [0, 1], a and b in [-0.5, 0.5].
#[derive(Debug, Clone)]
pub struct Oklab {
    name: String,
    id: i32,
    m1: Mat3,
    m2: Mat3,
    inverse_m1: Mat3,
    inverse_m2: Mat3,
}

impl Oklab {
    pub(crate) fn new(name: &str, id: i32) -> Self {
        let d50_to_d65 = adapt_matrix(
            BRADFORD,
            illuminant::D50.to_xyz(),
            illuminant::D65.to_xyz(),
        );
        let m1 = Mat3::from_cols_array(LMS) * d50_to_d65;
        let m2 = Mat3::from_cols_array(LMS_TO_LAB);
        Self {
            name: name.to_string(),
            id,
            m1,
            m2,
            inverse_m1: m1.inverse().unwrap_or(Mat3::IDENTITY),
            inverse_m2: m2.inverse().unwrap_or(Mat3::IDENTITY),
        }
    }

    /// Name of the space.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// 0 for L, -0.5 for a and b.
    pub fn min_value(&self, component: usize) -> f32 {
        if component == 0 { 0.0 } else { -0.5 }
    }

    /// 1 for L, 0.5 for a and b.
    pub fn max_value(&self, component: usize) -> f32 {
        if component == 0 { 1.0 } else { 0.5 }
    }

    /// Oklab to XYZ (D50). The input is clamped to the valid range.
    pub fn to_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        let lab = Vec3::new(
            clamp(v[0], 0.0, 1.0),
            clamp(v[1], -0.5, 0.5),
            clamp(v[2], -0.5, 0.5),
        );
        let lms = (self.inverse_m2 * lab).map(|c| c * c * c);
        (self.inverse_m1 * lms).to_array()
    }

    /// XYZ (D50) to Oklab.
    pub fn from_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        let lms = (self.m1 * Vec3::from_array(v)).map(|c| (c as f64).cbrt() as f32);
        (self.m2 * lms).to_array()
    }
}
