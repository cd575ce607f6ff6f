//! IEEE 754 half precision packing.
//!
//! Non-sRGB colors store each component as a binary16 value. Encoding
//! truncates the mantissa and then rounds half up on the first dropped
//! bit, which is not what [`half::f16::from_f32`] does (round to nearest
//! even), so packed values would drift by one ulp on ties. Decoding is
//! exact and delegates to `half`.

use half::f16;

/// Encodes `value` as binary16 bits, rounding half away from zero.
///
/// Finite values too large for binary16 become infinity; NaN stays NaN.
///
/// ```rust
/// use uigfx_color::float16;
///
/// assert_eq!(float16::encode(1.0), 0x3c00);
/// assert_eq!(float16::encode(-2.0), 0xc000);
/// assert_eq!(float16::decode(float16::encode(0.5)), 0.5);
/// ```
pub fn encode(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = bits >> 31;
    let exp = ((bits >> 23) & 0xff) as i32;
    let mut mantissa = bits & 0x7f_ffff;

    let mut out_e: u32 = 0;
    let mut out_m: u32 = 0;

    if exp == 0xff {
        // Infinity or NaN
        out_e = 0x1f;
        out_m = if mantissa != 0 { 0x200 } else { 0 };
    } else {
        let e = exp - 127 + 15;
        if e >= 0x1f {
            out_e = 0x1f;
        } else if e <= 0 {
            // Subnormal, or signed zero below the smallest subnormal
            if e >= -10 {
                mantissa = (mantissa | 0x80_0000) >> (1 - e);
                if mantissa & 0x1000 != 0 {
                    mantissa += 0x2000;
                }
                out_m = mantissa >> 13;
            }
        } else {
            out_e = e as u32;
            out_m = mantissa >> 13;
            if mantissa & 0x1000 != 0 {
                // May carry into the exponent, up to infinity
                return ((((out_e << 10) | out_m) + 1) | (sign << 15)) as u16;
            }
        }
    }

    ((sign << 15) | (out_e << 10) | out_m) as u16
}

/// Decodes binary16 bits.
#[inline]
pub fn decode(bits: u16) -> f32 {
    f16::from_bits(bits).to_f32()
}

/// Rounds `value` through binary16.
#[inline]
pub fn quantize(value: f32) -> f32 {
    decode(encode(value))
}
