//! CIE XYZ as a color space.

use uigfx_math::clamp;

/// Generic CIE XYZ, clamped to [-2, 2] on the way in and out.
#[derive(Debug, Clone)]
pub struct Xyz {
    name: String,
    id: i32,
}

impl Xyz {
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

    /// Lower bound of every component.
    pub fn min_value(&self, _component: usize) -> f32 {
        -2.0
    }

    /// Upper bound of every component.
    pub fn max_value(&self, _component: usize) -> f32 {
        2.0
    }

    /// Identity, clamped.
    pub fn to_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        v.map(clamp_xyz)
    }

    /// Identity, clamped.
    pub fn from_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        v.map(clamp_xyz)
    }
}

#[inline]
fn clamp_xyz(x: f32) -> f32 {
    clamp(x, -2.0, 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_clamps() {
        let xyz = Xyz::new("XYZ", 14);
        assert_eq!(xyz.to_xyz([3.0, -5.0, 0.5]), [2.0, -2.0, 0.5]);
        assert_eq!(xyz.from_xyz([0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
    }
}
