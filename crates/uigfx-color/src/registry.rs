//! The process-wide registry of well-known color spaces.
//!
//! The table is built once, on first use, and never changes afterwards.
//! Registered spaces are handed out as `&'static ColorSpace`; their ids
//! are what packed [`Color`](crate::Color) values store.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;
use uigfx_math::Mat3;
use uigfx_primaries::{self as primaries, illuminant};
use uigfx_transfer::{gamma, rec709, srgb, TransferFunction, TransferParameters};

use crate::{ColorError, ColorSpace, Lab, Oklab, Rgb, Xyz};

/// Ids of the registered color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum ColorSpaceId {
    /// sRGB IEC61966-2.1
    Srgb = 0,
    /// sRGB primaries, linear encoding
    LinearSrgb = 1,
    /// scRGB-nl, sRGB curve mirrored around zero
    ExtendedSrgb = 2,
    /// scRGB, linear
    LinearExtendedSrgb = 3,
    /// Rec. ITU-R BT.709-5
    Bt709 = 4,
    /// Rec. ITU-R BT.2020-1
    Bt2020 = 5,
    /// SMPTE RP 431-2-2007 DCI (P3)
    DciP3 = 6,
    /// Display P3
    DisplayP3 = 7,
    /// NTSC (1953)
    Ntsc1953 = 8,
    /// SMPTE-C RGB
    SmpteC = 9,
    /// Adobe RGB (1998)
    AdobeRgb = 10,
    /// ROMM RGB ISO 22028-2:2013
    ProPhotoRgb = 11,
    /// SMPTE ST 2065-1:2012 ACES
    Aces = 12,
    /// Academy S-2014-004 ACEScg
    Acescg = 13,
    /// Generic XYZ
    CieXyz = 14,
    /// Generic L*a*b*
    CieLab = 15,
    /// sRGB-like space tagging the unspecified color
    Unspecified = 16,
    /// Oklab
    Oklab = 17,
}

impl ColorSpaceId {
    /// All ids, in id order.
    pub const ALL: [ColorSpaceId; 18] = [
        Self::Srgb,
        Self::LinearSrgb,
        Self::ExtendedSrgb,
        Self::LinearExtendedSrgb,
        Self::Bt709,
        Self::Bt2020,
        Self::DciP3,
        Self::DisplayP3,
        Self::Ntsc1953,
        Self::SmpteC,
        Self::AdobeRgb,
        Self::ProPhotoRgb,
        Self::Aces,
        Self::Acescg,
        Self::CieXyz,
        Self::CieLab,
        Self::Unspecified,
        Self::Oklab,
    ];

    /// Numeric id.
    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Looks up a numeric id.
    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Full name of the space.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB IEC61966-2.1",
            Self::LinearSrgb => "sRGB IEC61966-2.1 (Linear)",
            Self::ExtendedSrgb => "scRGB-nl IEC 61966-2-2:2003",
            Self::LinearExtendedSrgb => "scRGB IEC 61966-2-2:2003",
            Self::Bt709 => "Rec. ITU-R BT.709-5",
            Self::Bt2020 => "Rec. ITU-R BT.2020-1",
            Self::DciP3 => "SMPTE RP 431-2-2007 DCI (P3)",
            Self::DisplayP3 => "Display P3",
            Self::Ntsc1953 => "NTSC (1953)",
            Self::SmpteC => "SMPTE-C RGB",
            Self::AdobeRgb => "Adobe RGB (1998)",
            Self::ProPhotoRgb => "ROMM RGB ISO 22028-2:2013",
            Self::Aces => "SMPTE ST 2065-1:2012 ACES",
            Self::Acescg => "Academy S-2014-004 ACEScg",
            Self::CieXyz => "Generic XYZ",
            Self::CieLab => "Generic L*a*b*",
            Self::Unspecified => "None",
            Self::Oklab => "Oklab",
        }
    }

    /// Short, command-line friendly name.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::LinearSrgb => "linear-srgb",
            Self::ExtendedSrgb => "extended-srgb",
            Self::LinearExtendedSrgb => "linear-extended-srgb",
            Self::Bt709 => "bt709",
            Self::Bt2020 => "bt2020",
            Self::DciP3 => "dci-p3",
            Self::DisplayP3 => "display-p3",
            Self::Ntsc1953 => "ntsc1953",
            Self::SmpteC => "smpte-c",
            Self::AdobeRgb => "adobe-rgb",
            Self::ProPhotoRgb => "pro-photo-rgb",
            Self::Aces => "aces",
            Self::Acescg => "acescg",
            Self::CieXyz => "cie-xyz",
            Self::CieLab => "cie-lab",
            Self::Unspecified => "unspecified",
            Self::Oklab => "oklab",
        }
    }

    /// The registered space.
    #[inline]
    pub fn space(self) -> &'static ColorSpace {
        ColorSpaces::get(self)
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = ColorError;

    /// Accepts the short name, the full name, or one of a few aliases,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let alias = match s.to_ascii_lowercase().as_str() {
            "xyz" => Some(Self::CieXyz),
            "lab" => Some(Self::CieLab),
            "p3" => Some(Self::DisplayP3),
            "prophoto" => Some(Self::ProPhotoRgb),
            "scrgb" => Some(Self::LinearExtendedSrgb),
            _ => None,
        };
        alias
            .or_else(|| {
                Self::ALL.into_iter().find(|id| {
                    id.short_name().eq_ignore_ascii_case(s) || id.name().eq_ignore_ascii_case(s)
                })
            })
            .ok_or_else(|| ColorError::UnknownColorSpace(s.to_string()))
    }
}

impl From<ColorSpaceId> for i32 {
    fn from(id: ColorSpaceId) -> i32 {
        id.id()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// The table of registered color spaces.
///
/// # Example
///
/// ```rust
/// use uigfx_color::{ColorSpaceId, ColorSpaces};
///
/// let p3 = ColorSpaces::get(ColorSpaceId::DisplayP3);
/// assert_eq!(p3.name(), "Display P3");
/// assert!(p3.is_wide_gamut());
/// ```
#[derive(Debug)]
pub struct ColorSpaces {
    spaces: Vec<ColorSpace>,
}

static REGISTRY: OnceLock<ColorSpaces> = OnceLock::new();

impl ColorSpaces {
    fn registry() -> &'static ColorSpaces {
        REGISTRY.get_or_init(|| {
            let spaces: Vec<ColorSpace> = ColorSpaceId::ALL.into_iter().map(build).collect();
            debug!(count = spaces.len(), "Built color space registry");
            ColorSpaces { spaces }
        })
    }

    /// The space registered under `id`.
    #[inline]
    pub fn get(id: ColorSpaceId) -> &'static ColorSpace {
        &Self::registry().spaces[id as usize]
    }

    /// The space with numeric id `id`, if registered.
    pub fn by_id(id: i32) -> Option<&'static ColorSpace> {
        ColorSpaceId::from_id(id).map(Self::get)
    }

    /// sRGB.
    #[inline]
    pub fn srgb() -> &'static ColorSpace {
        Self::get(ColorSpaceId::Srgb)
    }

    /// Every registered space, in id order.
    pub fn all() -> &'static [ColorSpace] {
        &Self::registry().spaces
    }

    /// Finds the registered RGB space matching a D50 RGB to XYZ matrix and
    /// transfer parameters, both within 1e-3.
    ///
    /// ```rust
    /// use uigfx_color::{ColorSpaceId, ColorSpaces};
    /// use uigfx_math::Adaptation;
    /// use uigfx_primaries::illuminant;
    ///
    /// let p3 = ColorSpaces::get(ColorSpaceId::DisplayP3);
    /// let d50 = p3.adapt(illuminant::D50, Adaptation::Bradford);
    /// let rgb = d50.as_rgb().unwrap();
    ///
    /// let found = ColorSpaces::match_rgb(&rgb.transform(), &rgb.transfer_parameters().unwrap());
    /// assert_eq!(found.map(|s| s.id()), Some(ColorSpaceId::DisplayP3.id()));
    /// ```
    pub fn match_rgb(
        to_xyz_d50: &Mat3,
        parameters: &TransferParameters,
    ) -> Option<&'static ColorSpace> {
        Self::all().iter().find(|space| {
            let adapted = space.adapt(illuminant::D50, uigfx_math::Adaptation::Bradford);
            adapted.as_rgb().is_some_and(|rgb| {
                rgb.transform().abs_diff_eq(to_xyz_d50, 1e-3)
                    && rgb
                        .transfer_parameters()
                        .is_some_and(|p| p.approx_eq(parameters))
            })
        })
    }
}

fn build(id: ColorSpaceId) -> ColorSpace {
    use ColorSpaceId as Id;

    let rgb = |primaries, white, transfer, min, max| {
        ColorSpace::Rgb(Rgb::registered(id.name(), id.id(), primaries, white, transfer, min, max))
    };
    let sdr = |primaries, white, transfer| rgb(primaries, white, transfer, 0.0, 1.0);

    match id {
        Id::Srgb | Id::Unspecified => sdr(
            primaries::SRGB,
            illuminant::D65,
            TransferFunction::Parametric(srgb::SRGB),
        ),
        Id::LinearSrgb => sdr(primaries::SRGB, illuminant::D65, TransferFunction::Identity),
        Id::ExtendedSrgb => rgb(
            primaries::SRGB,
            illuminant::D65,
            TransferFunction::Extended(srgb::SRGB),
            -0.799,
            2.399,
        ),
        Id::LinearExtendedSrgb => rgb(
            primaries::SRGB,
            illuminant::D65,
            TransferFunction::Identity,
            -0.5,
            7.499,
        ),
        Id::Bt709 => sdr(
            primaries::SRGB,
            illuminant::D65,
            TransferFunction::Parametric(rec709::BT709),
        ),
        Id::Bt2020 => sdr(
            primaries::BT2020,
            illuminant::D65,
            TransferFunction::Parametric(rec709::BT2020),
        ),
        Id::DciP3 => sdr(primaries::DCI_P3, illuminant::DCI, TransferFunction::gamma(2.6)),
        Id::DisplayP3 => sdr(
            primaries::DCI_P3,
            illuminant::D65,
            TransferFunction::Parametric(srgb::SRGB),
        ),
        Id::Ntsc1953 => sdr(
            primaries::NTSC_1953,
            illuminant::C,
            TransferFunction::Parametric(rec709::BT709),
        ),
        Id::SmpteC => sdr(
            primaries::SMPTE_C,
            illuminant::D65,
            TransferFunction::Parametric(rec709::BT709),
        ),
        Id::AdobeRgb => sdr(primaries::ADOBE_RGB, illuminant::D65, TransferFunction::gamma(2.2)),
        Id::ProPhotoRgb => sdr(
            primaries::PROPHOTO_RGB,
            illuminant::D50,
            TransferFunction::Parametric(gamma::ROMM),
        ),
        Id::Aces => rgb(
            primaries::ACES_AP0,
            illuminant::D60,
            TransferFunction::Identity,
            -65504.0,
            65504.0,
        ),
        Id::Acescg => rgb(
            primaries::ACES_AP1,
            illuminant::D60,
            TransferFunction::Identity,
            -65504.0,
            65504.0,
        ),
        Id::CieXyz => ColorSpace::Xyz(Xyz::new(id.name(), id.id())),
        Id::CieLab => ColorSpace::Lab(Lab::new(id.name(), id.id())),
        Id::Oklab => ColorSpace::Oklab(Oklab::new(id.name(), id.id())),
    }
}
