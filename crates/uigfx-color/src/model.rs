//! Color models.

use std::fmt;

/// The model of a color space: what its three components mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Red, green, blue.
    Rgb,
    /// CIE XYZ tristimulus.
    Xyz,
    /// Lightness and two opponent axes (CIE L*a*b*, Oklab).
    Lab,
}

impl ColorModel {
    /// Number of components, excluding alpha.
    #[inline]
    pub const fn component_count(self) -> usize {
        match self {
            Self::Rgb | Self::Xyz | Self::Lab => 3,
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rgb => "Rgb",
            Self::Xyz => "Xyz",
            Self::Lab => "Lab",
        })
    }
}
