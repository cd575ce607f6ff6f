//! The color space abstraction.
//!
//! A [`ColorSpace`] is one of a closed set of kinds. Every kind converts to
//! and from CIE XYZ, which makes XYZ the connection space between any two
//! of them. Lab-like and XYZ spaces are relative to D50; RGB spaces carry
//! their own white and are adapted to D50 when connected.

use std::borrow::Cow;
use std::fmt;

use uigfx_math::Adaptation;
use uigfx_primaries::WhitePoint;

use crate::{ColorModel, ColorSpaceId, ColorSpaces, Connector, Lab, Oklab, RenderIntent, Rgb, Xyz};

/// Id of a color space that is not in the registry.
pub const MIN_ID: i32 = -1;

/// Largest id a registered color space may have; ids fit in 6 bits.
pub const MAX_ID: i32 = 63;

/// A color space.
#[derive(Debug, Clone)]
pub enum ColorSpace {
    /// RGB space with primaries, white point and transfer function.
    Rgb(Rgb),
    /// CIE XYZ.
    Xyz(Xyz),
    /// CIE L*a*b*.
    Lab(Lab),
    /// Oklab.
    Oklab(Oklab),
}

impl ColorSpace {
    /// Name of the space.
    pub fn name(&self) -> &str {
        match self {
            Self::Rgb(s) => s.name(),
            Self::Xyz(s) => s.name(),
            Self::Lab(s) => s.name(),
            Self::Oklab(s) => s.name(),
        }
    }

    /// Registry id, or [`MIN_ID`].
    pub fn id(&self) -> i32 {
        match self {
            Self::Rgb(s) => s.id(),
            Self::Xyz(s) => s.id(),
            Self::Lab(s) => s.id(),
            Self::Oklab(s) => s.id(),
        }
    }

    /// Registry id as a [`ColorSpaceId`], if registered.
    pub fn registered_id(&self) -> Option<ColorSpaceId> {
        ColorSpaceId::from_id(self.id())
    }

    /// Color model.
    pub fn model(&self) -> ColorModel {
        match self {
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Xyz(_) => ColorModel::Xyz,
            Self::Lab(_) | Self::Oklab(_) => ColorModel::Lab,
        }
    }

    /// Number of components, excluding alpha.
    pub fn component_count(&self) -> usize {
        self.model().component_count()
    }

    /// Lower bound of `component`.
    pub fn min_value(&self, component: usize) -> f32 {
        match self {
            Self::Rgb(s) => s.min_value(),
            Self::Xyz(s) => s.min_value(component),
            Self::Lab(s) => s.min_value(component),
            Self::Oklab(s) => s.min_value(component),
        }
    }

    /// Upper bound of `component`.
    pub fn max_value(&self, component: usize) -> f32 {
        match self {
            Self::Rgb(s) => s.max_value(),
            Self::Xyz(s) => s.max_value(component),
            Self::Lab(s) => s.max_value(component),
            Self::Oklab(s) => s.max_value(component),
        }
    }

    /// True when the space covers more than a typical display gamut.
    pub fn is_wide_gamut(&self) -> bool {
        match self {
            Self::Rgb(s) => s.is_wide_gamut(),
            Self::Xyz(_) | Self::Lab(_) | Self::Oklab(_) => true,
        }
    }

    /// True for sRGB and RGB spaces indistinguishable from it.
    pub fn is_srgb(&self) -> bool {
        matches!(self, Self::Rgb(s) if s.is_srgb())
    }

    /// Converts a triplet of this space to XYZ.
    pub fn to_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Rgb(s) => s.to_xyz(v),
            Self::Xyz(s) => s.to_xyz(v),
            Self::Lab(s) => s.to_xyz(v),
            Self::Oklab(s) => s.to_xyz(v),
        }
    }

    /// Converts an XYZ triplet to this space.
    pub fn from_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Rgb(s) => s.from_xyz(v),
            Self::Xyz(s) => s.from_xyz(v),
            Self::Lab(s) => s.from_xyz(v),
            Self::Oklab(s) => s.from_xyz(v),
        }
    }

    /// The RGB space, if this is one.
    pub fn as_rgb(&self) -> Option<&Rgb> {
        match self {
            Self::Rgb(s) => Some(s),
            _ => None,
        }
    }

    /// This space under another reference white.
    ///
    /// Only RGB spaces adapt; everything else, and an RGB space whose white
    /// already matches, is returned as is.
    pub fn adapt(&self, white_point: WhitePoint, adaptation: Adaptation) -> Cow<'_, ColorSpace> {
        match self {
            Self::Rgb(rgb) => match rgb.adapted(white_point, adaptation) {
                Some(adapted) => Cow::Owned(Self::Rgb(adapted)),
                None => Cow::Borrowed(self),
            },
            _ => Cow::Borrowed(self),
        }
    }

    /// Builds a connector converting from this space to `destination`.
    pub fn connect<'a>(&'a self, destination: &'a ColorSpace, intent: RenderIntent) -> Connector<'a> {
        Connector::new(self, destination, intent)
    }

    /// Connector to sRGB with the perceptual intent.
    pub fn connect_srgb(&self) -> Connector<'_> {
        self.connect(ColorSpaces::srgb(), RenderIntent::Perceptual)
    }

    /// True when both refer to the same space: the same object, or the
    /// same registry id.
    pub fn same_as(&self, other: &ColorSpace) -> bool {
        std::ptr::eq(self, other) || (self.id() != MIN_ID && self.id() == other.id())
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={}, model={})", self.name(), self.id(), self.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigfx_primaries::illuminant;

    #[test]
    fn test_models_and_ranges() {
        let lab = ColorSpaces::get(ColorSpaceId::CieLab);
        assert_eq!(lab.model(), ColorModel::Lab);
        assert_eq!(lab.component_count(), 3);
        assert_eq!(lab.max_value(0), 100.0);

        let oklab = ColorSpaces::get(ColorSpaceId::Oklab);
        assert_eq!(oklab.model(), ColorModel::Lab);
        assert_eq!(oklab.min_value(1), -0.5);

        let xyz = ColorSpaces::get(ColorSpaceId::CieXyz);
        assert_eq!(xyz.model(), ColorModel::Xyz);
        assert!(xyz.is_wide_gamut());
        assert!(xyz.as_rgb().is_none());

        let scrgb = ColorSpaces::get(ColorSpaceId::LinearExtendedSrgb);
        assert_eq!(scrgb.min_value(0), -0.5);
        assert_eq!(scrgb.max_value(2), 7.499);
    }

    #[test]
    fn test_display() {
        let srgb = ColorSpaces::srgb();
        assert_eq!(srgb.to_string(), "sRGB IEC61966-2.1 (id=0, model=Rgb)");
    }

    #[test]
    fn test_adapt() {
        let srgb = ColorSpaces::srgb();
        assert!(matches!(srgb.adapt(illuminant::D65, Adaptation::Bradford), Cow::Borrowed(_)));

        let adapted = srgb.adapt(illuminant::D50, Adaptation::Bradford);
        assert!(matches!(adapted, Cow::Owned(_)));
        assert_eq!(adapted.id(), MIN_ID);
        assert_eq!(adapted.name(), srgb.name());
        assert!(!adapted.same_as(srgb));

        let lab = ColorSpaces::get(ColorSpaceId::CieLab);
        assert!(matches!(lab.adapt(illuminant::D65, Adaptation::Bradford), Cow::Borrowed(_)));
    }

    #[test]
    fn test_srgb_flags() {
        assert!(ColorSpaces::srgb().is_srgb());
        assert!(ColorSpaces::get(ColorSpaceId::Unspecified).is_srgb());
        assert!(!ColorSpaces::get(ColorSpaceId::LinearSrgb).is_srgb());
        assert!(!ColorSpaces::get(ColorSpaceId::ExtendedSrgb).is_srgb());
        assert!(!ColorSpaces::get(ColorSpaceId::Oklab).is_srgb());
    }
}
