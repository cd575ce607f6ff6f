//! CIE L*a*b* (1976) relative to D50.
//!
//! ```text
//! L* = 116 f(Y/Yn) - 16
//! a* = 500 (f(X/Xn) - f(Y/Yn))
//! b* = 200 (f(Y/Yn) - f(Z/Zn))
//!
//! f(t) = t^(1/3)            for t > (6/29)^3
//!      = t (29/6)^2 / 3 + 4/29   otherwise
//! ```

use uigfx_math::clamp;
use uigfx_primaries::illuminant::D50_XYZ;

const A: f32 = 216.0 / 24389.0;
const B: f32 = 841.0 / 108.0;
const C: f32 = 4.0 / 29.0;
const D: f32 = 6.0 / 29.0;

/// CIE L*a*b*: L in [0, 100], a and b in [-128, 128].
#[derive(Debug, Clone)]
pub struct Lab {
    name: String,
    id: i32,
}

impl Lab {
    pub(crate) fn new(name: &str, id: i32) -> Self {
        Self {
            name: name.to_string(),
            id,
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

    /// 0 for L, -128 for a and b.
    pub fn min_value(&self, component: usize) -> f32 {
        if component == 0 { 0.0 } else { -128.0 }
    }

    /// 100 for L, 128 for a and b.
    pub fn max_value(&self, component: usize) -> f32 {
        if component == 0 { 100.0 } else { 128.0 }
    }

    /// L*a*b* to XYZ (D50).
    pub fn to_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        let l = clamp(v[0], 0.0, 100.0);
        let a = clamp(v[1], -128.0, 128.0);
        let b = clamp(v[2], -128.0, 128.0);

        let fy = (l + 16.0) / 116.0;
        let fx = fy + a * 0.002;
        let fz = fy - b * 0.005;

        [
            f_inv(fx) * D50_XYZ.x,
            f_inv(fy) * D50_XYZ.y,
            f_inv(fz) * D50_XYZ.z,
        ]
    }

    /// XYZ (D50) to L*a*b*, clamped to the valid range.
    pub fn from_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        let fx = f(v[0] / D50_XYZ.x);
        let fy = f(v[1] / D50_XYZ.y);
        let fz = f(v[2] / D50_XYZ.z);

        let l = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        [
            clamp(l, 0.0, 100.0),
            clamp(a, -128.0, 128.0),
            clamp(b, -128.0, 128.0),
        ]
    }
}

#[inline]
fn f(t: f32) -> f32 {
    if t > A { t.powf(1.0 / 3.0) } else { B * t + C }
}

#[inline]
fn f_inv(t: f32) -> f32 {
    if t > D { t * t * t } else { (1.0 / B) * (t - C) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_l100() {
        let lab = Lab::new("Lab", 15);
        let v = lab.from_xyz(D50_XYZ.to_array());
        assert!((v[0] - 100.0).abs() < 1e-3);
        assert!(v[1].abs() < 1e-3);
        assert!(v[2].abs() < 1e-3);
    }

    #[test]
    fn test_roundtrip() {
        let lab = Lab::new("Lab", 15);
        for v in [[50.0, 20.0, -30.0], [5.0, 0.0, 0.0], [90.0, -60.0, 70.0]] {
            let back = lab.from_xyz(lab.to_xyz(v));
            for i in 0..3 {
                assert!((back[i] - v[i]).abs() < 1e-2, "{:?} -> {:?}", v, back);
            }
        }
    }

    #[test]
    fn test_clamps() {
        let lab = Lab::new("Lab", 15);
        assert_eq!(lab.to_xyz([200.0, 0.0, 0.0]), lab.to_xyz([100.0, 0.0, 0.0]));
        let v = lab.from_xyz([100.0, 0.0, 0.0]);
        assert_eq!(v[1], 128.0);
        assert_eq!(lab.min_value(0), 0.0);
        assert_eq!(lab.max_value(2), 128.0);
    }
}
