//! Standard CIE illuminants as xy white points.

use uigfx_math::Vec3;

use crate::WhitePoint;

/// Incandescent tungsten.
pub const A: WhitePoint = WhitePoint::new(0.44757, 0.40745);
/// Noon sunlight (obsolete).
pub const B: WhitePoint = WhitePoint::new(0.34842, 0.35161);
/// Average daylight, NTSC (1953) reference white.
pub const C: WhitePoint = WhitePoint::new(0.31006, 0.31616);
/// Horizon light, ICC profile connection space white.
pub const D50: WhitePoint = WhitePoint::new(0.34567, 0.35850);
/// Mid-morning daylight.
pub const D55: WhitePoint = WhitePoint::new(0.33242, 0.34743);
/// ACES white.
pub const D60: WhitePoint = WhitePoint::new(0.32168, 0.33767);
/// Noon daylight, the white of sRGB and most display spaces.
pub const D65: WhitePoint = WhitePoint::new(0.31271, 0.32902);
/// North sky daylight.
pub const D75: WhitePoint = WhitePoint::new(0.29902, 0.31485);
/// Equal energy.
pub const E: WhitePoint = WhitePoint::new(0.33333, 0.33333);
/// DCI projector white.
pub const DCI: WhitePoint = WhitePoint::new(0.314, 0.351);

/// D50 in XYZ, the reference white of the profile connection space.
pub const D50_XYZ: Vec3 = Vec3::new(0.964212, 1.0, 0.825188);
