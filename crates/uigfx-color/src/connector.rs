//! Connectors: conversion from one color space to another.
//!
//! A [`Connector`] precomputes everything needed to convert triplets
//! between a source and a destination space:
//!
//! - same space: identity;
//! - RGB to RGB: source EOTF, one 3x3 matrix, destination OETF;
//! - anything else: through XYZ (D50), with RGB sides Bradford-adapted
//!   to D50.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tracing::trace;
use uigfx_math::{adapt_matrix, Adaptation, Mat3, Vec3, BRADFORD};
use uigfx_primaries::illuminant::{self, D50_XYZ};

use crate::{ColorError, ColorSpace, Rgb};

/// How out-of-gamut colors are handled when connecting two spaces.
///
/// Only [`Absolute`](Self::Absolute) changes the math; the other intents
/// are relative colorimetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RenderIntent {
    /// Compress the source gamut into the destination gamut.
    #[default]
    Perceptual,
    /// Map the source white to the destination white and clip.
    Relative,
    /// Preserve saturation at the expense of hue and lightness.
    Saturation,
    /// Keep absolute colorimetry; whites are not mapped onto each other.
    Absolute,
}

impl RenderIntent {
    /// All intents, in declaration order.
    pub const ALL: [RenderIntent; 4] = [
        Self::Perceptual,
        Self::Relative,
        Self::Saturation,
        Self::Absolute,
    ];

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perceptual => "perceptual",
            Self::Relative => "relative",
            Self::Saturation => "saturation",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for RenderIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderIntent {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::InvalidValue(format!("unknown render intent: {s}")))
    }
}

/// Converts triplets from a source to a destination color space.
///
/// # Example
///
/// ```rust
/// use uigfx_color::{ColorSpaceId, ColorSpaces, RenderIntent};
///
/// let p3 = ColorSpaces::get(ColorSpaceId::DisplayP3);
/// let connector = p3.connect(ColorSpaces::srgb(), RenderIntent::Relative);
/// let white = connector.transform([1.0, 1.0, 1.0]);
/// assert!((white[0] - 1.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct Connector<'a> {
    source: &'a ColorSpace,
    destination: &'a ColorSpace,
    intent: RenderIntent,
    path: Path<'a>,
}

#[derive(Debug, Clone)]
enum Path<'a> {
    Identity,
    Rgb {
        source: &'a Rgb,
        destination: &'a Rgb,
        matrix: Mat3,
    },
    Xyz {
        source: Cow<'a, ColorSpace>,
        destination: Cow<'a, ColorSpace>,
        white_scale: Option<Vec3>,
    },
}

impl<'a> Connector<'a> {
    /// Connects `source` to `destination`.
    ///
    /// Connecting a space to itself yields the identity connector, whose
    /// intent is always [`RenderIntent::Relative`].
    pub fn new(source: &'a ColorSpace, destination: &'a ColorSpace, intent: RenderIntent) -> Self {
        trace!(source = source.name(), destination = destination.name(), %intent, "Connector::new");

        if source.same_as(destination) {
            return Self::identity(source);
        }

        let path = match (source, destination) {
            (ColorSpace::Rgb(src), ColorSpace::Rgb(dst)) => Path::Rgb {
                source: src,
                destination: dst,
                matrix: rgb_matrix(src, dst, intent),
            },
            _ => Path::Xyz {
                source: source.adapt(illuminant::D50, Adaptation::Bradford),
                destination: destination.adapt(illuminant::D50, Adaptation::Bradford),
                white_scale: absolute_white_scale(source, destination, intent),
            },
        };

        Self {
            source,
            destination,
            intent,
            path,
        }
    }

    /// Connector that returns its input.
    pub fn identity(space: &'a ColorSpace) -> Self {
        Self {
            source: space,
            destination: space,
            intent: RenderIntent::Relative,
            path: Path::Identity,
        }
    }

    /// Source space.
    pub fn source(&self) -> &'a ColorSpace {
        self.source
    }

    /// Destination space.
    pub fn destination(&self) -> &'a ColorSpace {
        self.destination
    }

    /// Render intent.
    pub fn intent(&self) -> RenderIntent {
        self.intent
    }

    /// The RGB to RGB matrix, for connectors between two RGB spaces.
    pub fn rgb_matrix(&self) -> Option<Mat3> {
        match &self.path {
            Path::Rgb { matrix, .. } => Some(*matrix),
            _ => None,
        }
    }

    /// Converts a triplet.
    pub fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        match &self.path {
            Path::Identity => v,
            Path::Rgb {
                source,
                destination,
                matrix,
            } => {
                let linear = Vec3::from_array(source.to_linear(v));
                destination.from_linear((*matrix * linear).to_array())
            }
            Path::Xyz {
                source,
                destination,
                white_scale,
            } => {
                let mut xyz = Vec3::from_array(source.to_xyz(v));
                if let Some(scale) = white_scale {
                    xyz = xyz * *scale;
                }
                destination.from_xyz(xyz.to_array())
            }
        }
    }
}

/// Single matrix from linear source RGB to linear destination RGB.
fn rgb_matrix(source: &Rgb, destination: &Rgb, intent: RenderIntent) -> Mat3 {
    if source.white_point().approx_eq(&destination.white_point()) {
        return destination.inverse_transform() * source.transform();
    }

    // Otherwise go through XYZ D50
    let mut transform = source.transform();
    let mut inverse = destination.inverse_transform();
    let mut src_white = source.white_point().to_xyz();
    let mut dst_white = destination.white_point().to_xyz();

    // An adapted side measures its reference white in cone space.
    if !source.white_point().approx_eq(&illuminant::D50) {
        transform = adapt_matrix(BRADFORD, src_white, D50_XYZ) * source.transform();
        src_white = BRADFORD * src_white;
    }
    if !destination.white_point().approx_eq(&illuminant::D50) {
        let to_d50 = adapt_matrix(BRADFORD, dst_white, D50_XYZ) * destination.transform();
        inverse = to_d50.inverse().unwrap_or(Mat3::IDENTITY);
        dst_white = BRADFORD * dst_white;
    }

    if intent == RenderIntent::Absolute {
        transform = transform.scale_rows(src_white / dst_white);
    }

    inverse * transform
}

/// White scaling for the absolute intent when exactly one side is RGB.
fn absolute_white_scale(
    source: &ColorSpace,
    destination: &ColorSpace,
    intent: RenderIntent,
) -> Option<Vec3> {
    if intent != RenderIntent::Absolute {
        return None;
    }
    match (source.as_rgb(), destination.as_rgb()) {
        (Some(rgb), None) => Some(rgb.white_point().to_xyz() / D50_XYZ),
        (None, Some(rgb)) => Some(D50_XYZ / rgb.white_point().to_xyz()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorSpaceId, ColorSpaces};

    fn assert_close(actual: [f32; 3], expected: [f32; 3], eps: f32) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < eps,
                "{:?} != {:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_identity() {
        let srgb = ColorSpaces::srgb();
        let c = srgb.connect(srgb, RenderIntent::Absolute);
        assert_eq!(c.intent(), RenderIntent::Relative);
        assert_eq!(c.transform([0.1, 2.0, -3.0]), [0.1, 2.0, -3.0]);
        assert!(c.rgb_matrix().is_none());
    }

    #[test]
    fn test_srgb_to_adobe() {
        let srgb = ColorSpaces::srgb();
        let adobe = ColorSpaces::get(ColorSpaceId::AdobeRgb);
        let c = srgb.connect(adobe, RenderIntent::Perceptual);
        assert!(c.rgb_matrix().is_some());
        assert_close(c.transform([1.0, 0.5, 0.0]), [0.8912, 0.4962, 0.1164], 1e-3);
    }

    #[test]
    fn test_srgb_to_prophoto_adapts_source() {
        let srgb = ColorSpaces::srgb();
        let prophoto = ColorSpaces::get(ColorSpaceId::ProPhotoRgb);
        let c = srgb.connect(prophoto, RenderIntent::Perceptual);
        assert_close(c.transform([1.0, 0.0, 0.0]), [0.7023, 0.2757, 0.1036], 1e-3);
    }

    #[test]
    fn test_dci_p3_to_srgb_intents() {
        let dci = ColorSpaces::get(ColorSpaceId::DciP3);
        let srgb = ColorSpaces::srgb();
        let input = [0.9, 0.9, 0.9];

        let relative = dci.connect(srgb, RenderIntent::Relative).transform(input);
        assert_close(relative, [0.8862, 0.8862, 0.8862], 1e-3);

        let absolute = dci.connect(srgb, RenderIntent::Absolute).transform(input);
        assert_close(absolute, [0.8475, 0.9217, 0.8203], 1e-3);
    }

    #[test]
    fn test_lab_to_srgb() {
        let lab = ColorSpaces::get(ColorSpaceId::CieLab);
        let srgb = ColorSpaces::srgb();

        let relative = lab.connect(srgb, RenderIntent::Relative);
        assert_close(relative.transform([100.0, 0.0, 0.0]), [1.0, 1.0, 1.0], 1e-3);
        assert_close(relative.transform([100.0, 0.0, 54.0]), [1.0, 0.9925, 0.5762], 1e-3);

        let absolute = lab.connect(srgb, RenderIntent::Absolute);
        assert_close(absolute.transform([100.0, 0.0, 0.0]), [1.0, 0.9910, 0.8651], 1e-3);
        assert_close(absolute.transform([100.0, 0.0, 54.0]), [1.0, 0.9853, 0.4652], 1e-3);
    }

    #[test]
    fn test_xyz_to_srgb() {
        let xyz = ColorSpaces::get(ColorSpaceId::CieXyz);
        let c = xyz.connect(ColorSpaces::srgb(), RenderIntent::Perceptual);
        assert!(c.rgb_matrix().is_none());
        assert_close(c.transform([0.32, 0.43, 0.54]), [0.2283, 0.7540, 0.8453], 1e-3);
    }

    #[test]
    fn test_roundtrip_through_connectors() {
        let srgb = ColorSpaces::srgb();
        for id in ColorSpaceId::ALL {
            let other = ColorSpaces::get(id);
            let there = srgb.connect(other, RenderIntent::Perceptual);
            let back = other.connect(srgb, RenderIntent::Perceptual);
            let v = [0.6, 0.4, 0.3];
            assert_close(back.transform(there.transform(v)), v, 5e-3);
        }
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!("Absolute".parse::<RenderIntent>().unwrap(), RenderIntent::Absolute);
        assert!("vivid".parse::<RenderIntent>().is_err());
        assert_eq!(RenderIntent::default().to_string(), "perceptual");
    }
}
