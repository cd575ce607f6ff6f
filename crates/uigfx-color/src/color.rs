//! The packed [`Color`] value.
//!
//! A color is a single `u64`. sRGB colors keep `0xAARRGGBB` in the upper
//! 32 bits and nothing below. Every other color space stores three half
//! floats and a 10-bit alpha, tagged with the 6-bit id of the space:
//!
//! ```text
//! | 63..48 | 47..32 | 31..16 | 15..6 | 5..0 |
//! |  red   | green  |  blue  | alpha |  id  |
//! ```

use std::fmt;

use tracing::trace;
use uigfx_math::saturate;

use crate::{float16, ColorError, ColorModel, ColorResult, ColorSpace, ColorSpaceId, ColorSpaces, RenderIntent};

const ID_MASK: u64 = 0x3f;

/// A color in one of the registered color spaces.
///
/// # Example
///
/// ```rust
/// use uigfx_color::{Color, ColorSpaceId};
///
/// let orange = Color::from_argb(0xFFFF8000);
/// assert_eq!(orange.to_argb(), 0xFFFF8000);
///
/// let p3 = orange.convert(ColorSpaceId::DisplayP3);
/// assert_eq!(p3.color_space_id(), ColorSpaceId::DisplayP3);
/// assert_eq!(p3.to_argb(), 0xFFFF8000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u64", try_from = "u64"))]
pub struct Color(u64);

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_argb(0xFF000000);
    /// 0x444444.
    pub const DARK_GRAY: Color = Color::from_argb(0xFF444444);
    /// 0x888888.
    pub const GRAY: Color = Color::from_argb(0xFF888888);
    /// 0xCCCCCC.
    pub const LIGHT_GRAY: Color = Color::from_argb(0xFFCCCCCC);
    /// Opaque white.
    pub const WHITE: Color = Color::from_argb(0xFFFFFFFF);
    /// Opaque red.
    pub const RED: Color = Color::from_argb(0xFFFF0000);
    /// Opaque green.
    pub const GREEN: Color = Color::from_argb(0xFF00FF00);
    /// Opaque blue.
    pub const BLUE: Color = Color::from_argb(0xFF0000FF);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::from_argb(0xFFFFFF00);
    /// Opaque cyan.
    pub const CYAN: Color = Color::from_argb(0xFF00FFFF);
    /// Opaque magenta.
    pub const MAGENTA: Color = Color::from_argb(0xFFFF00FF);
    /// Fully transparent black in sRGB.
    pub const TRANSPARENT: Color = Color(0);
    /// Marker for "no color". Renders like [`Color::TRANSPARENT`] but
    /// compares unequal to it.
    pub const UNSPECIFIED: Color = Color(ColorSpaceId::Unspecified as u64);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates an sRGB color. Every component must be in [0, 1].
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> ColorResult<Color> {
        Self::from_components(red, green, blue, alpha, ColorSpaceId::Srgb)
    }

    /// Creates a color in `space`.
    ///
    /// Components are checked against [0, 1] only for sRGB. Other spaces
    /// clamp alpha to [0, 1] and store components as half floats.
    ///
    /// ```rust
    /// use uigfx_color::{Color, ColorSpaceId};
    ///
    /// assert!(Color::from_components(1.5, 0.0, 0.0, 1.0, ColorSpaceId::Srgb).is_err());
    ///
    /// let hdr = Color::from_components(1.5, 0.0, 0.0, 1.0, ColorSpaceId::LinearExtendedSrgb).unwrap();
    /// assert_eq!(hdr.red(), 1.5);
    /// ```
    pub fn from_components(
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
        space: ColorSpaceId,
    ) -> ColorResult<Color> {
        if space == ColorSpaceId::Srgb {
            let unit = 0.0..=1.0;
            if !(unit.contains(&red) && unit.contains(&green) && unit.contains(&blue) && unit.contains(&alpha)) {
                return Err(ColorError::InvalidValue(format!(
                    "red = {red}, green = {green}, blue = {blue}, alpha = {alpha} outside the range for {}",
                    space.name()
                )));
            }
        }
        Ok(Self::pack(red, green, blue, alpha, space))
    }

    /// Creates an sRGB color from `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(argb: u32) -> Color {
        Color((argb as u64) << 32)
    }

    /// Creates an sRGB color from 8-bit channels.
    #[inline]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Self::from_argb(
            ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32,
        )
    }

    /// Reinterprets a packed value, as returned by [`Color::value`].
    ///
    /// Fails for ids past the registry, and for sRGB values with bits set
    /// in the lower half.
    pub fn from_value(value: u64) -> ColorResult<Color> {
        let id = value & ID_MASK;
        if ColorSpaceId::from_id(id as i32).is_none() {
            return Err(ColorError::UnknownId(id));
        }
        if id == 0 && value & 0xffff_ffff != 0 {
            return Err(ColorError::InvalidValue(format!(
                "{value:#018x} is not a packed sRGB color"
            )));
        }
        Ok(Color(value))
    }

    /// Packs without validation. sRGB components and every alpha are
    /// clamped to [0, 1].
    pub(crate) fn pack(red: f32, green: f32, blue: f32, alpha: f32, space: ColorSpaceId) -> Color {
        if space == ColorSpaceId::Srgb {
            let byte = |c: f32| (saturate(c) * 255.0 + 0.5) as u32;
            let argb = (byte(alpha) << 24) | (byte(red) << 16) | (byte(green) << 8) | byte(blue);
            return Self::from_argb(argb);
        }

        let r = float16::encode(red) as u64;
        let g = float16::encode(green) as u64;
        let b = float16::encode(blue) as u64;
        let a = (saturate(alpha) * 1023.0 + 0.5) as u64;
        Color((r << 48) | (g << 32) | (b << 16) | (a << 6) | space as u64)
    }

    fn pack_array(v: [f32; 3], alpha: f32, space: ColorSpaceId) -> Color {
        Self::pack(v[0], v[1], v[2], alpha, space)
    }

    /// A copy in the same color space with new components, validated like
    /// [`Color::from_components`].
    pub fn copy(&self, red: f32, green: f32, blue: f32, alpha: f32) -> ColorResult<Color> {
        Self::from_components(red, green, blue, alpha, self.color_space_id())
    }

    /// A copy with a different alpha.
    pub fn with_alpha(&self, alpha: f32) -> ColorResult<Color> {
        self.copy(self.red(), self.green(), self.blue(), alpha)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The packed value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    #[inline]
    fn is_srgb_packed(&self) -> bool {
        self.0 & ID_MASK == 0
    }

    /// Id of the color space.
    pub fn color_space_id(&self) -> ColorSpaceId {
        // Values are validated on the way in
        ColorSpaceId::from_id((self.0 & ID_MASK) as i32).unwrap_or(ColorSpaceId::Srgb)
    }

    /// The color space.
    pub fn color_space(&self) -> &'static ColorSpace {
        ColorSpaces::get(self.color_space_id())
    }

    fn channel(&self, byte_shift: u32, half_shift: u32) -> f32 {
        if self.is_srgb_packed() {
            ((self.0 >> byte_shift) & 0xff) as f32 / 255.0
        } else {
            float16::decode((self.0 >> half_shift) as u16)
        }
    }

    /// First component: red, X, or L.
    #[inline]
    pub fn red(&self) -> f32 {
        self.channel(48, 48)
    }

    /// Second component: green, Y, or a.
    #[inline]
    pub fn green(&self) -> f32 {
        self.channel(40, 32)
    }

    /// Third component: blue, Z, or b.
    #[inline]
    pub fn blue(&self) -> f32 {
        self.channel(32, 16)
    }

    /// Alpha in [0, 1].
    pub fn alpha(&self) -> f32 {
        if self.is_srgb_packed() {
            ((self.0 >> 56) & 0xff) as f32 / 255.0
        } else {
            ((self.0 >> 6) & 0x3ff) as f32 / 1023.0
        }
    }

    /// `(red, green, blue, alpha, color space)`.
    ///
    /// ```rust
    /// use uigfx_color::Color;
    ///
    /// let (r, g, b, a, space) = Color::YELLOW.components();
    /// assert_eq!((r, g, b, a), (1.0, 1.0, 0.0, 1.0));
    /// assert!(space.is_srgb());
    /// ```
    pub fn components(&self) -> (f32, f32, f32, f32, &'static ColorSpace) {
        (self.red(), self.green(), self.blue(), self.alpha(), self.color_space())
    }

    /// `[red, green, blue, alpha]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    fn rgb(&self) -> [f32; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// False only for [`Color::UNSPECIFIED`].
    #[inline]
    pub fn is_specified(&self) -> bool {
        *self != Self::UNSPECIFIED
    }

    /// True only for [`Color::UNSPECIFIED`].
    #[inline]
    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }

    /// This color if specified, otherwise the result of `f`.
    #[inline]
    pub fn take_or_else(self, f: impl FnOnce() -> Color) -> Color {
        if self.is_specified() { self } else { f() }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Converts to another registered space with the perceptual intent.
    pub fn convert(&self, to: ColorSpaceId) -> Color {
        let from = self.color_space_id();
        if from == to {
            return *self;
        }
        let connector = self.color_space().connect(to.space(), RenderIntent::Perceptual);
        Self::pack_array(connector.transform(self.rgb()), self.alpha(), to)
    }

    /// Converts to sRGB and returns `0xAARRGGBB`.
    #[inline]
    pub fn to_argb(&self) -> u32 {
        (self.convert(ColorSpaceId::Srgb).0 >> 32) as u32
    }

    /// Composites this color over `background` ("source over", straight
    /// alpha). The result is in the background's color space.
    ///
    /// ```rust
    /// use uigfx_color::Color;
    ///
    /// assert_eq!(Color::RED.composite_over(Color::BLUE), Color::RED);
    /// assert_eq!(Color::TRANSPARENT.composite_over(Color::BLUE), Color::BLUE);
    /// ```
    pub fn composite_over(&self, background: Color) -> Color {
        let space = background.color_space_id();
        trace!(fg = self.0, bg = background.0, %space, "composite_over");
        let fg = self.convert(space);

        let bg_a = background.alpha();
        let fg_a = fg.alpha();
        let a = fg_a + bg_a * (1.0 - fg_a);

        let mix = |f: f32, b: f32| {
            if a == 0.0 {
                0.0
            } else {
                (f * fg_a + (b * bg_a) * (1.0 - fg_a)) / a
            }
        };

        Self::pack(
            mix(fg.red(), background.red()),
            mix(fg.green(), background.green()),
            mix(fg.blue(), background.blue()),
            a,
            space,
        )
    }

    /// Relative luminance in [0, 1], with Rec. 709 weights applied to the
    /// linear components.
    pub fn luminance(&self) -> f32 {
        let (color, space) = match self.color_space() {
            ColorSpace::Rgb(rgb) => (*self, rgb),
            other => {
                trace!(space = other.name(), "luminance via sRGB");
                let srgb = ColorSpaces::srgb().as_rgb();
                match srgb {
                    Some(rgb) => (self.convert(ColorSpaceId::Srgb), rgb),
                    None => return 0.0,
                }
            }
        };
        let r = space.eotf(color.red() as f64);
        let g = space.eotf(color.green() as f64);
        let b = space.eotf(color.blue() as f64);
        saturate((0.2126 * r + 0.7152 * g + 0.0722 * b) as f32)
    }

    // ========================================================================
    // HSV / HSL
    // ========================================================================

    /// Creates a color from hue (degrees in [0, 360]), saturation and value
    /// (both in [0, 1]), in an RGB space.
    ///
    /// ```rust
    /// use uigfx_color::{Color, ColorSpaceId};
    ///
    /// let red = Color::hsv(0.0, 1.0, 1.0, 1.0, ColorSpaceId::Srgb).unwrap();
    /// assert_eq!(red, Color::RED);
    /// ```
    pub fn hsv(
        hue: f32,
        saturation: f32,
        value: f32,
        alpha: f32,
        space: ColorSpaceId,
    ) -> ColorResult<Color> {
        check_hue_input("HSV", hue, saturation, value, space)?;
        let component = |n: f32| {
            let k = (n + hue / 60.0) % 6.0;
            value - value * saturation * k.min(4.0 - k).min(1.0).max(0.0)
        };
        Self::from_components(component(5.0), component(3.0), component(1.0), alpha, space)
    }

    /// Creates a color from hue (degrees in [0, 360]), saturation and
    /// lightness (both in [0, 1]), in an RGB space.
    pub fn hsl(
        hue: f32,
        saturation: f32,
        lightness: f32,
        alpha: f32,
        space: ColorSpaceId,
    ) -> ColorResult<Color> {
        check_hue_input("HSL", hue, saturation, lightness, space)?;
        let a = saturation * lightness.min(1.0 - lightness);
        let component = |n: f32| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };
        Self::from_components(component(0.0), component(8.0), component(4.0), alpha, space)
    }
}

fn check_hue_input(kind: &str, hue: f32, s: f32, v: f32, space: ColorSpaceId) -> ColorResult<()> {
    if !((0.0..=360.0).contains(&hue) && (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&v)) {
        return Err(ColorError::InvalidValue(format!(
            "{kind} ({hue}, {s}, {v}) must be in range (0..360, 0..1, 0..1)"
        )));
    }
    let model = space.space().model();
    if model != ColorModel::Rgb {
        return Err(ColorError::UnsupportedModel(format!(
            "{kind} needs an RGB color space, {} is {model}",
            space.name()
        )));
    }
    Ok(())
}

/// Interpolates between two colors in Oklab. The result is in the color
/// space of `stop`.
///
/// `fraction` is not clamped. `0.0` returns `start` and `1.0` returns
/// `stop`, up to the precision of the packed Oklab form.
///
/// ```rust
/// use uigfx_color::{lerp, Color};
///
/// assert_eq!(lerp(Color::RED, Color::BLUE, 0.0), Color::RED);
/// assert_eq!(lerp(Color::RED, Color::BLUE, 1.0), Color::BLUE);
/// ```
pub fn lerp(start: Color, stop: Color, fraction: f32) -> Color {
    let a = start.convert(ColorSpaceId::Oklab);
    let b = stop.convert(ColorSpaceId::Oklab);
    let mix = |x: f32, y: f32| uigfx_math::lerp(x, y, fraction);

    Color::pack(
        mix(a.red(), b.red()),
        mix(a.green(), b.green()),
        mix(a.blue(), b.blue()),
        mix(a.alpha(), b.alpha()),
        ColorSpaceId::Oklab,
    )
    .convert(stop.color_space_id())
}

impl Default for Color {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color({:?}, {:?}, {:?}, {:?}, {})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha(),
            self.color_space().name()
        )
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Color> for u64 {
    fn from(color: Color) -> u64 {
        color.0
    }
}

impl TryFrom<u64> for Color {
    type Error = ColorError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Color::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, eps: f32) {
        assert!(
            (actual - expected).abs() <= eps,
            "expected {} got {} (eps {})",
            expected,
            actual,
            eps
        );
    }

    #[test]
    fn test_srgb_packing() {
        let c = Color::new(1.0, 128.0 / 255.0, 0.0, 1.0).unwrap();
        assert_eq!(c.value(), 0xFFFF8000_0000_0000);
        assert_eq!(c.to_argb(), 0xFFFF8000);
        assert_eq!(Color::from_rgba8(0xff, 0x80, 0x00, 0xff), c);
        assert_eq!(Color::from_argb(0xFFFF8000).to_argb(), 0xFFFF8000);
    }

    #[test]
    fn test_half_packing() {
        let c = Color::from_components(1.0, 0.0, 0.0, 1.0, ColorSpaceId::DisplayP3).unwrap();
        assert_eq!(c.value(), 0x3c00_0000_0000_0000 | (1023 << 6) | 7);
        assert_eq!(c.color_space_id(), ColorSpaceId::DisplayP3);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.0, 1.0]);

        // Alpha is clamped, not rejected, outside sRGB
        let c = Color::from_components(0.5, 0.5, 0.5, 2.0, ColorSpaceId::AdobeRgb).unwrap();
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_out_of_range() {
        for (r, g, b, a) in [
            (2.0, 0.0, 0.0, 1.0),
            (-1.0, 0.0, 0.0, 1.0),
            (0.0, 2.0, 0.0, 1.0),
            (0.0, -1.0, 0.0, 1.0),
            (0.0, 0.0, 2.0, 1.0),
            (0.0, 0.0, -1.0, 1.0),
            (0.0, 0.0, 0.0, 2.0),
            (0.0, 0.0, 0.0, -1.0),
            (f32::NAN, 0.0, 0.0, 1.0),
        ] {
            assert!(
                matches!(Color::new(r, g, b, a), Err(ColorError::InvalidValue(_))),
                "({}, {}, {}, {}) accepted",
                r,
                g,
                b,
                a
            );
        }
        assert!(Color::RED.with_alpha(1.5).is_err());
        assert_eq!(Color::RED.with_alpha(0.0).unwrap().to_argb(), 0x00FF0000);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Color::from_value(0x10).unwrap(), Color::UNSPECIFIED);
        assert_eq!(Color::from_value(Color::RED.value()).unwrap(), Color::RED);
        assert_eq!(Color::from_value(18), Err(ColorError::UnknownId(18)));
        assert_eq!(Color::from_value(63), Err(ColorError::UnknownId(63)));
        assert!(Color::from_value(0xFFFF0000_0000_0100).is_err());
        assert_eq!(Color::try_from(17u64).unwrap().color_space_id(), ColorSpaceId::Oklab);
    }

    #[test]
    fn test_adobe_to_argb() {
        let c = Color::from_components(0.8916, 0.4980, 0.1168, 1.0, ColorSpaceId::AdobeRgb).unwrap();
        assert_eq!(c.to_argb(), 0xFFFF8000);
    }

    #[test]
    fn test_convert_same_space() {
        let c = Color::from_components(0.2, 0.4, 0.6, 0.5, ColorSpaceId::Bt2020).unwrap();
        assert_eq!(c.convert(ColorSpaceId::Bt2020), c);
        assert_eq!(Color::RED.convert(ColorSpaceId::Srgb), Color::RED);
    }

    #[test]
    fn test_round_trip() {
        let start = Color::from_argb(0xFF8A7360);
        for id in ColorSpaceId::ALL {
            let back = start.convert(id).convert(ColorSpaceId::Srgb);
            let a = start.to_array();
            let b = back.to_array();
            for i in 0..4 {
                assert!((a[i] - b[i]).abs() < 5e-4, "{}: {:?} -> {:?}", id, start, back);
            }
        }
    }

    #[test]
    fn test_luminance() {
        assert_close(Color::BLACK.luminance(), 0.0, 5e-4);
        assert_close(Color::WHITE.luminance(), 1.0, 5e-4);
        assert_close(Color::RED.luminance(), 0.2126, 5e-4);
        assert_close(Color::GREEN.luminance(), 0.7152, 5e-4);
        assert_close(Color::BLUE.luminance(), 0.0722, 5e-4);

        let lab = Color::WHITE.convert(ColorSpaceId::CieLab);
        assert_close(lab.luminance(), 1.0, 5e-3);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(
            Color::from_argb(0xFFFF8000).to_string(),
            "Color(1.0, 0.5019608, 0.0, 1.0, sRGB IEC61966-2.1)"
        );
        assert_eq!(format!("{:?}", Color::TRANSPARENT), "Color(0.0, 0.0, 0.0, 0.0, sRGB IEC61966-2.1)");
    }

    #[test]
    fn test_unspecified() {
        assert!(Color::UNSPECIFIED.is_unspecified());
        assert!(!Color::UNSPECIFIED.is_specified());
        assert!(Color::RED.is_specified());
        assert!(Color::TRANSPARENT.is_specified());
        assert_eq!(Color::TRANSPARENT.to_argb(), Color::UNSPECIFIED.to_argb());
        assert_ne!(Color::TRANSPARENT, Color::UNSPECIFIED);
        assert_eq!(Color::default(), Color::UNSPECIFIED);
        assert_eq!(Color::UNSPECIFIED.color_space().name(), "None");

        assert_eq!(Color::UNSPECIFIED.take_or_else(|| Color::RED), Color::RED);
        assert_eq!(Color::BLUE.take_or_else(|| Color::RED), Color::BLUE);
    }

    #[test]
    fn test_composite_transparent() {
        let clear = Color::new(0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(clear.composite_over(clear), clear);
        assert_eq!(Color::TRANSPARENT.composite_over(Color::TRANSPARENT), Color::TRANSPARENT);
    }

    #[test]
    fn test_composite_opaque() {
        assert_eq!(Color::RED.composite_over(Color::BLUE), Color::RED);
        assert_eq!(Color::GREEN.composite_over(Color::TRANSPARENT), Color::GREEN);
    }

    #[test]
    fn test_composite_half() {
        let fg = Color::new(1.0, 0.0, 0.0, 0.5).unwrap();
        assert_eq!(fg.composite_over(Color::BLUE), Color::from_argb(0xFF80007F));

        // Stays in the background's space
        let bg = Color::BLUE.convert(ColorSpaceId::DisplayP3);
        let out = fg.composite_over(bg);
        assert_eq!(out.color_space_id(), ColorSpaceId::DisplayP3);
        assert_close(out.alpha(), 1.0, 1e-3);
    }

    #[test]
    fn test_composite_into_background_space() {
        let bg = Color::from_components(0.5, 0.0, 0.0, 0.5, ColorSpaceId::DisplayP3).unwrap();
        let fg = Color::from_argb(0x7f007f00);
        let out = fg.composite_over(bg);

        assert_eq!(out.color_space_id(), ColorSpaceId::DisplayP3);
        assert_close(out.red(), 0.31, 0.01);
        assert_close(out.green(), 0.33, 0.01);
        assert_close(out.blue(), 0.09, 0.01);
        assert_close(out.alpha(), 0.75, 0.01);
    }

    #[test]
    fn test_composite_low_alpha() {
        let bg = Color::new(1.0, 0.0, 0.0, 0.01).unwrap();
        let fg = Color::new(0.0, 1.0, 0.0, 0.01).unwrap();
        let out = fg.composite_over(bg);

        assert_close(out.red(), 0.5, 0.01);
        assert_close(out.green(), 0.5, 0.01);
        assert_close(out.blue(), 0.0, 0.01);
        assert_close(out.alpha(), 0.01, 0.02);
    }

    #[test]
    fn test_composite_zero_alpha() {
        let bg = Color::from_argb(0x007f0000);
        let fg = Color::from_argb(0x00007f00);
        assert_eq!(fg.composite_over(bg), Color::new(0.0, 0.0, 0.0, 0.0).unwrap());
    }

    #[test]
    fn test_hsv() {
        let hsv = |h, s, v| Color::hsv(h, s, v, 1.0, ColorSpaceId::Srgb).unwrap();
        assert_eq!(hsv(0.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(hsv(0.0, 0.0, 1.0), Color::WHITE);
        assert_eq!(hsv(0.0, 1.0, 1.0), Color::RED);
        assert_eq!(hsv(60.0, 1.0, 1.0), Color::YELLOW);
        assert_eq!(hsv(120.0, 1.0, 1.0), Color::GREEN);
        assert_eq!(hsv(180.0, 1.0, 1.0), Color::CYAN);
        assert_eq!(hsv(240.0, 1.0, 1.0), Color::BLUE);
        assert_eq!(hsv(300.0, 1.0, 1.0), Color::MAGENTA);
        assert_eq!(hsv(360.0, 1.0, 1.0), Color::RED);
    }

    #[test]
    fn test_hsl() {
        let hsl = |h, s, l| Color::hsl(h, s, l, 1.0, ColorSpaceId::Srgb).unwrap();
        assert_eq!(hsl(0.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(hsl(0.0, 0.0, 1.0), Color::WHITE);
        assert_eq!(hsl(0.0, 1.0, 0.5), Color::RED);
        assert_eq!(hsl(60.0, 1.0, 0.5), Color::YELLOW);
        assert_eq!(hsl(120.0, 1.0, 0.5), Color::GREEN);
        assert_eq!(hsl(180.0, 1.0, 0.5), Color::CYAN);
        assert_eq!(hsl(240.0, 1.0, 0.5), Color::BLUE);
        assert_eq!(hsl(300.0, 1.0, 0.5), Color::MAGENTA);
        assert_eq!(hsl(360.0, 1.0, 0.5), Color::RED);
    }

    #[test]
    fn test_hue_validation() {
        let id = ColorSpaceId::Srgb;
        assert!(matches!(Color::hsv(-1.0, 0.0, 0.0, 1.0, id), Err(ColorError::InvalidValue(_))));
        assert!(matches!(Color::hsv(361.0, 0.0, 0.0, 1.0, id), Err(ColorError::InvalidValue(_))));
        assert!(matches!(Color::hsl(0.0, 1.1, 0.5, 1.0, id), Err(ColorError::InvalidValue(_))));
        assert!(matches!(Color::hsl(0.0, 1.0, -0.1, 1.0, id), Err(ColorError::InvalidValue(_))));
        assert!(matches!(
            Color::hsv(0.0, 1.0, 1.0, 1.0, ColorSpaceId::CieLab),
            Err(ColorError::UnsupportedModel(_))
        ));

        let p3 = Color::hsv(0.0, 1.0, 1.0, 1.0, ColorSpaceId::DisplayP3).unwrap();
        assert_eq!(p3.color_space_id(), ColorSpaceId::DisplayP3);
        assert_eq!(p3.red(), 1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(Color::RED, Color::BLUE, 0.0).to_argb(), 0xFFFF0000);
        assert_eq!(lerp(Color::RED, Color::BLUE, 1.0).to_argb(), 0xFF0000FF);

        let p3 = Color::GREEN.convert(ColorSpaceId::DisplayP3);
        let mid = lerp(Color::RED, p3, 0.5);
        assert_eq!(mid.color_space_id(), ColorSpaceId::DisplayP3);
    }

    #[test]
    fn test_lerp_alpha() {
        let mid = lerp(Color::TRANSPARENT, Color::BLACK, 0.5);
        assert_close(mid.alpha(), 0.5, 3e-3);
        assert_eq!(lerp(Color::RED, Color::RED, 0.3).to_argb(), 0xFFFF0000);
    }
}
