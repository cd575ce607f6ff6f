//! ICC parametric transfer curve.
//!
//! The curve is defined piecewise by seven parameters:
//!
//! ```text
//! Y = (aX + b)^g + e   for X >= d
//! Y = cX + f           for X <  d
//! ```
//!
//! `Y` is linear light and `X` the encoded value, so this is the EOTF.
//! The OETF is the analytic inverse.

use crate::{TransferError, TransferResult};

/// Parameters of an ICC parametric curve (see module docs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferParameters {
    /// Exponent `g`.
    pub gamma: f64,
    /// Slope of the power segment.
    pub a: f64,
    /// Offset of the power segment.
    pub b: f64,
    /// Slope of the linear segment.
    pub c: f64,
    /// Breakpoint between the two segments, in encoded units.
    pub d: f64,
    /// Offset added after the power segment.
    pub e: f64,
    /// Offset of the linear segment.
    pub f: f64,
}

// Next representable f32 after 1.0, widened.
const D_MAX: f64 = 1.0 + f32::EPSILON as f64;

impl TransferParameters {
    /// Creates validated parameters.
    ///
    /// Fails when any value is NaN, when `d` is outside [0, 1], or when
    /// the curve would be constant or decreasing.
    ///
    /// ```rust
    /// use uigfx_transfer::TransferParameters;
    ///
    /// assert!(TransferParameters::new(2.2, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0).is_ok());
    /// assert!(TransferParameters::new(2.2, 1.0, 0.0, 0.0, 1.5, 0.0, 0.0).is_err());
    /// ```
    pub fn new(gamma: f64, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> TransferResult<Self> {
        let params = Self { gamma, a, b, c, d, e, f };
        params.validate()?;
        Ok(params)
    }

    /// Creates parameters without the `e` and `f` offsets.
    pub fn simple(gamma: f64, a: f64, b: f64, c: f64, d: f64) -> TransferResult<Self> {
        Self::new(gamma, a, b, c, d, 0.0, 0.0)
    }

    /// Parameters of a pure power law `x^gamma`.
    pub const fn power(gamma: f64) -> Self {
        Self { gamma, a: 1.0, b: 0.0, c: 0.0, d: 0.0, e: 0.0, f: 0.0 }
    }

    /// Checks the constraints listed on [`TransferParameters::new`].
    pub fn validate(&self) -> TransferResult<()> {
        let Self { gamma, a, b, c, d, e, f } = *self;

        if [gamma, a, b, c, d, e, f].iter().any(|v| v.is_nan()) {
            return Err(invalid("parameters cannot be NaN"));
        }
        if !(0.0..=D_MAX).contains(&d) {
            return Err(TransferError::InvalidParameter(format!(
                "d must be in the range [0..1], was {d}"
            )));
        }
        if d == 0.0 && (a == 0.0 || gamma == 0.0) {
            return Err(invalid("a or g is zero, the curve is constant"));
        }
        if d >= 1.0 && c == 0.0 {
            return Err(invalid("c is zero, the curve is constant"));
        }
        if (a == 0.0 || gamma == 0.0) && c == 0.0 {
            return Err(invalid("a or g is zero, and c is zero, the curve is constant"));
        }
        if c < 0.0 {
            return Err(invalid("the curve must be increasing"));
        }
        if a < 0.0 || gamma < 0.0 {
            return Err(invalid("the curve must be positive or increasing"));
        }
        Ok(())
    }

    /// Encoded to linear.
    #[inline]
    pub fn response(&self, x: f64) -> f64 {
        if x >= self.d {
            (self.a * x + self.b).powf(self.gamma) + self.e
        } else {
            self.c * x + self.f
        }
    }

    /// Linear to encoded.
    #[inline]
    pub fn rcp_response(&self, x: f64) -> f64 {
        if x >= self.d * self.c {
            ((x - self.e).powf(1.0 / self.gamma) - self.b) / self.a
        } else {
            (x - self.f) / self.c
        }
    }

    /// [`response`](Self::response) applied to `|x|`, with the sign of `x`.
    #[inline]
    pub fn abs_response(&self, x: f64) -> f64 {
        self.response(x.abs()).copysign(x)
    }

    /// [`rcp_response`](Self::rcp_response) applied to `|x|`, with the sign of `x`.
    #[inline]
    pub fn abs_rcp_response(&self, x: f64) -> f64 {
        self.rcp_response(x.abs()).copysign(x)
    }

    /// Loose equality used to recognise well-known curves.
    ///
    /// Every parameter must be within 1e-3, except `d` which gets 2e-3
    /// to absorb the published variants of the sRGB breakpoint.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.a - other.a).abs() < 1e-3
            && (self.b - other.b).abs() < 1e-3
            && (self.c - other.c).abs() < 1e-3
            && (self.d - other.d).abs() < 2e-3
            && (self.e - other.e).abs() < 1e-3
            && (self.f - other.f).abs() < 1e-3
            && (self.gamma - other.gamma).abs() < 1e-3
    }
}

fn invalid(msg: &str) -> TransferError {
    TransferError::InvalidParameter(msg.to_string())
}
