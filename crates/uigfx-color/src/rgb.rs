//! RGB color spaces.
//!
//! An RGB space is three primaries and a white point (which together fix
//! the RGB to XYZ matrix), a transfer function, and the range of valid
//! encoded values.

use uigfx_math::{clamp_f64, Adaptation, Mat3, Vec3};
use uigfx_primaries::{illuminant, rgb_to_xyz_matrix, Primaries, WhitePoint, SRGB};
use uigfx_transfer::{srgb, TransferFunction, TransferParameters};

use crate::{ColorError, ColorResult, MIN_ID};

/// An RGB color space.
///
/// # Example
///
/// ```rust
/// use uigfx_color::Rgb;
/// use uigfx_primaries::{illuminant, ADOBE_RGB};
/// use uigfx_transfer::TransferFunction;
///
/// let adobe = Rgb::new(
///     "Adobe RGB",
///     ADOBE_RGB,
///     illuminant::D65,
///     TransferFunction::gamma(2.2),
///     0.0,
///     1.0,
/// )
/// .unwrap();
/// assert!(adobe.is_wide_gamut());
/// assert_eq!(adobe.id(), -1);
/// ```
#[derive(Debug, Clone)]
pub struct Rgb {
    name: String,
    id: i32,
    primaries: Primaries,
    white_point: WhitePoint,
    transform: Mat3,
    inverse_transform: Mat3,
    transfer: TransferFunction,
    min: f32,
    max: f32,
    wide_gamut: bool,
    srgb: bool,
}

impl Rgb {
    /// Creates an RGB space from primaries and a white point.
    ///
    /// Fails when `min >= max`, when the transfer function is invalid, or
    /// when the primaries are degenerate.
    pub fn new(
        name: impl Into<String>,
        primaries: Primaries,
        white_point: WhitePoint,
        transfer: TransferFunction,
        min: f32,
        max: f32,
    ) -> ColorResult<Self> {
        let name = name.into();
        if !(min < max) {
            return Err(ColorError::InvalidRange { min, max });
        }
        transfer.validate()?;

        let transform = rgb_to_xyz_matrix(&primaries, white_point);
        let inverse = transform
            .inverse()
            .ok_or_else(|| ColorError::SingularTransform(name.clone()))?;

        Ok(Self::assemble(
            name,
            MIN_ID,
            primaries,
            white_point,
            transform,
            inverse,
            transfer,
            min,
            max,
        ))
    }

    /// Creates an RGB space from its RGB to XYZ matrix, with range [0, 1].
    ///
    /// Primaries and white point are recovered from the matrix.
    pub fn from_transform(
        name: impl Into<String>,
        to_xyz: &Mat3,
        transfer: TransferFunction,
    ) -> ColorResult<Self> {
        let primaries = Primaries::from_matrix(to_xyz);
        let white_point = WhitePoint::from_matrix(to_xyz);
        Self::new(name, primaries, white_point, transfer, 0.0, 1.0)
    }

    /// Registry constructor. The inputs are known-good constants.
    pub(crate) fn registered(
        name: &str,
        id: i32,
        primaries: Primaries,
        white_point: WhitePoint,
        transfer: TransferFunction,
        min: f32,
        max: f32,
    ) -> Self {
        let transform = rgb_to_xyz_matrix(&primaries, white_point);
        let inverse = transform.inverse().unwrap_or(Mat3::IDENTITY);
        Self::assemble(
            name.to_string(),
            id,
            primaries,
            white_point,
            transform,
            inverse,
            transfer,
            min,
            max,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        name: String,
        id: i32,
        primaries: Primaries,
        white_point: WhitePoint,
        transform: Mat3,
        inverse_transform: Mat3,
        transfer: TransferFunction,
        min: f32,
        max: f32,
    ) -> Self {
        let wide_gamut = primaries.is_wide_gamut(min, max);
        let srgb = is_srgb(&primaries, &white_point, &transfer, min, max, id);
        Self {
            name,
            id,
            primaries,
            white_point,
            transform,
            inverse_transform,
            transfer,
            min,
            max,
            wide_gamut,
            srgb,
        }
    }

    /// Name of the space.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry id, or -1 for a space that is not registered.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Chromaticities of the primaries.
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// Reference white.
    pub fn white_point(&self) -> WhitePoint {
        self.white_point
    }

    /// Linear RGB to XYZ matrix.
    pub fn transform(&self) -> Mat3 {
        self.transform
    }

    /// XYZ to linear RGB matrix.
    pub fn inverse_transform(&self) -> Mat3 {
        self.inverse_transform
    }

    /// Transfer function.
    pub fn transfer(&self) -> &TransferFunction {
        &self.transfer
    }

    /// Parametric form of the transfer function, if any.
    pub fn transfer_parameters(&self) -> Option<TransferParameters> {
        self.transfer.parameters()
    }

    /// Lower bound of encoded values.
    pub fn min_value(&self) -> f32 {
        self.min
    }

    /// Upper bound of encoded values.
    pub fn max_value(&self) -> f32 {
        self.max
    }

    /// See [`Primaries::is_wide_gamut`].
    pub fn is_wide_gamut(&self) -> bool {
        self.wide_gamut
    }

    /// True for sRGB and any space indistinguishable from it.
    pub fn is_srgb(&self) -> bool {
        self.srgb
    }

    /// Decodes one encoded value; the input is clamped to the range first.
    #[inline]
    pub fn eotf(&self, x: f64) -> f64 {
        self.transfer
            .eotf(clamp_f64(x, self.min as f64, self.max as f64))
    }

    /// Encodes one linear value; the output is clamped to the range.
    #[inline]
    pub fn oetf(&self, x: f64) -> f64 {
        clamp_f64(self.transfer.oetf(x), self.min as f64, self.max as f64)
    }

    /// Decodes an encoded triplet to linear RGB.
    pub fn to_linear(&self, v: [f32; 3]) -> [f32; 3] {
        v.map(|c| self.eotf(c as f64) as f32)
    }

    /// Encodes a linear RGB triplet.
    pub fn from_linear(&self, v: [f32; 3]) -> [f32; 3] {
        v.map(|c| self.oetf(c as f64) as f32)
    }

    /// Encoded RGB to XYZ.
    pub fn to_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        let linear = Vec3::from_array(self.to_linear(v));
        (self.transform * linear).to_array()
    }

    /// XYZ to encoded RGB.
    pub fn from_xyz(&self, v: [f32; 3]) -> [f32; 3] {
        let linear = self.inverse_transform * Vec3::from_array(v);
        self.from_linear(linear.to_array())
    }

    /// This space seen under another reference white.
    ///
    /// Returns `None` when the white points already match. The adapted
    /// space keeps name, primaries, transfer function and range, takes the
    /// new white, and is not registered.
    pub fn adapted(&self, white_point: WhitePoint, adaptation: Adaptation) -> Option<Self> {
        if self.white_point.approx_eq(&white_point) {
            return None;
        }
        let cat = adaptation.matrix(self.white_point.to_xyz(), white_point.to_xyz());
        let transform = cat * self.transform;
        let inverse = transform.inverse().unwrap_or(Mat3::IDENTITY);
        Some(Self::assemble(
            self.name.clone(),
            MIN_ID,
            self.primaries,
            white_point,
            transform,
            inverse,
            self.transfer,
            self.min,
            self.max,
        ))
    }
}

/// sRGB check: registry id 0, or same primaries, white, range and curves.
fn is_srgb(
    primaries: &Primaries,
    white_point: &WhitePoint,
    transfer: &TransferFunction,
    min: f32,
    max: f32,
    id: i32,
) -> bool {
    if id == 0 {
        return true;
    }
    if !primaries.approx_eq(&SRGB) || !white_point.approx_eq(&illuminant::D65) {
        return false;
    }
    if min != 0.0 || max != 1.0 {
        return false;
    }

    let step = 1.0 / 255.0;
    let mut x = 0.0;
    while x <= 1.0 {
        if (transfer.oetf(x) - srgb::oetf(x)).abs() > 1e-3
            || (transfer.eotf(x) - srgb::eotf(x)).abs() > 1e-3
        {
            return false;
        }
        x += step;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigfx_primaries::{ADOBE_RGB, BT2020};

    fn srgb_space() -> Rgb {
        Rgb::new(
            "sRGB",
            SRGB,
            illuminant::D65,
            TransferFunction::Parametric(srgb::SRGB),
            0.0,
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_range() {
        let err = Rgb::new("bad", SRGB, illuminant::D65, TransferFunction::Identity, 1.0, 1.0);
        assert!(matches!(err, Err(ColorError::InvalidRange { .. })));
    }

    #[test]
    fn test_new_validates_transfer() {
        let err = Rgb::new("bad", SRGB, illuminant::D65, TransferFunction::Gamma(-1.0), 0.0, 1.0);
        assert!(matches!(err, Err(ColorError::Transfer(_))));
    }

    #[test]
    fn test_new_rejects_degenerate_primaries() {
        let flat = Primaries {
            r: (0.3, 0.3),
            g: (0.3, 0.3),
            b: (0.3, 0.3),
        };
        assert!(Rgb::new("flat", flat, illuminant::D65, TransferFunction::Identity, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_unregistered_srgb_is_detected() {
        let space = srgb_space();
        assert_eq!(space.id(), MIN_ID);
        assert!(space.is_srgb());
        assert!(!space.is_wide_gamut());

        let adobe = Rgb::new("Adobe", ADOBE_RGB, illuminant::D65, TransferFunction::gamma(2.2), 0.0, 1.0).unwrap();
        assert!(!adobe.is_srgb());
    }

    #[test]
    fn test_eotf_clamps_input_oetf_clamps_output() {
        let space = srgb_space();
        assert_eq!(space.eotf(2.0), space.eotf(1.0));
        assert_eq!(space.eotf(-1.0), 0.0);
        assert_eq!(space.oetf(4.0), 1.0);
        assert_eq!(space.oetf(-4.0), 0.0);
    }

    #[test]
    fn test_xyz_roundtrip() {
        let space = Rgb::new("BT.2020", BT2020, illuminant::D65, TransferFunction::gamma(2.4), 0.0, 1.0).unwrap();
        let v = [0.25, 0.5, 0.75];
        let back = space.from_xyz(space.to_xyz(v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-5, "{:?}", back);
        }
    }

    #[test]
    fn test_from_transform() {
        let space = srgb_space();
        let copy = Rgb::from_transform("copy", &space.transform(), TransferFunction::Parametric(srgb::SRGB)).unwrap();
        assert!(copy.primaries().approx_eq(&SRGB));
        assert!(copy.white_point().approx_eq(&illuminant::D65));
        assert!(copy.transform().abs_diff_eq(&space.transform(), 1e-5));
    }

    #[test]
    fn test_adapted() {
        let space = srgb_space();
        assert!(space.adapted(illuminant::D65, Adaptation::Bradford).is_none());

        let d50 = space.adapted(illuminant::D50, Adaptation::Bradford).unwrap();
        assert_eq!(d50.id(), MIN_ID);
        assert_eq!(d50.white_point(), illuminant::D50);
        assert!(!d50.is_srgb());
        assert_eq!(d50.primaries(), space.primaries());

        // White still maps to the (new) white
        let white = Vec3::from_array(d50.to_xyz([1.0, 1.0, 1.0]));
        assert!(white.abs_diff_eq(illuminant::D50.to_xyz(), 1e-4));
    }
}
