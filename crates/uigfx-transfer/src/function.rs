//! Transfer function carried by an RGB color space.

use crate::gamma::{gamma_eotf, gamma_oetf};
use crate::{TransferParameters, TransferResult};

/// Encoding curve of an RGB color space.
///
/// # Example
///
/// ```rust
/// use uigfx_transfer::{srgb::SRGB, TransferFunction};
///
/// let tf = TransferFunction::Parametric(SRGB);
/// let encoded = tf.oetf(tf.eotf(0.25));
/// assert!((encoded - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum TransferFunction {
    /// Linear encoding.
    Identity,
    /// Pure power law with the given exponent.
    Gamma(f64),
    /// ICC parametric curve; negative inputs follow the linear segment.
    Parametric(TransferParameters),
    /// ICC parametric curve mirrored around zero.
    Extended(TransferParameters),
    /// Arbitrary curve pair with no parametric form.
    Custom {
        /// Linear to encoded.
        oetf: fn(f64) -> f64,
        /// Encoded to linear.
        eotf: fn(f64) -> f64,
    },
}

impl TransferFunction {
    /// Pure power law, collapsing to [`Identity`](Self::Identity) at 1.0.
    pub fn gamma(gamma: f64) -> Self {
        if gamma == 1.0 {
            Self::Identity
        } else {
            Self::Gamma(gamma)
        }
    }

    /// Checks that the curve is usable.
    ///
    /// Custom curves are accepted as is.
    pub fn validate(&self) -> TransferResult<()> {
        match self.parameters() {
            Some(params) => params.validate(),
            None => Ok(()),
        }
    }

    /// Linear to encoded.
    #[inline]
    pub fn oetf(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Gamma(g) => gamma_oetf(x, *g),
            Self::Parametric(p) => p.rcp_response(x),
            Self::Extended(p) => p.abs_rcp_response(x),
            Self::Custom { oetf, .. } => oetf(x),
        }
    }

    /// Encoded to linear.
    #[inline]
    pub fn eotf(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Gamma(g) => gamma_eotf(x, *g),
            Self::Parametric(p) => p.response(x),
            Self::Extended(p) => p.abs_response(x),
            Self::Custom { eotf, .. } => eotf(x),
        }
    }

    /// Parametric description of this curve, if it has one.
    ///
    /// A power law `g` is described as `(g, 1, 0, 0, 0, 0, 0)`.
    pub fn parameters(&self) -> Option<TransferParameters> {
        match self {
            Self::Identity => Some(TransferParameters::power(1.0)),
            Self::Gamma(g) => Some(TransferParameters::power(*g)),
            Self::Parametric(p) | Self::Extended(p) => Some(*p),
            Self::Custom { .. } => None,
        }
    }
}
