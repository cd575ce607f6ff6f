//! CLI command implementations

pub mod composite;
pub mod convert;
pub mod hue;
pub mod inspect;
pub mod lerp;
pub mod spaces;
pub mod transform;

use anyhow::{bail, Context, Result};
use uigfx_color::{Color, ColorSpaceId};

/// Parses a color argument.
///
/// `#RRGGBB`, `#AARRGGBB` and `0xAARRGGBB` are sRGB; comma separated
/// components `r,g,b[,a]` are read in `space`.
pub fn parse_color(text: &str, space: ColorSpaceId) -> Result<Color> {
    let text = text.trim();

    if let Some(hex) = text.strip_prefix('#') {
        let argb = u32::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid hex color: {}", text))?;
        return match hex.len() {
            6 => Ok(Color::from_argb(0xFF00_0000 | argb)),
            8 => Ok(Color::from_argb(argb)),
            _ => bail!("Hex color must be #RRGGBB or #AARRGGBB: {}", text),
        };
    }

    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let argb = u32::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid hex color: {}", text))?;
        return Ok(Color::from_argb(argb));
    }

    let values = parse_floats(text)?;
    let (r, g, b, a) = match values.as_slice() {
        [r, g, b] => (*r, *g, *b, 1.0),
        [r, g, b, a] => (*r, *g, *b, *a),
        _ => bail!("Expected r,g,b or r,g,b,a, got {} values: {}", values.len(), text),
    };
    Color::from_components(r, g, b, a, space).with_context(|| format!("Invalid color: {}", text))
}

/// Parses comma separated floats.
pub fn parse_floats(text: &str) -> Result<Vec<f32>> {
    text.split(',')
        .map(|s| {
            s.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid number '{}' in '{}'", s.trim(), text))
        })
        .collect()
}

/// Formats a color as `#AARRGGBB` after converting it to sRGB.
pub fn format_argb(color: Color) -> String {
    format!("#{:08X}", color.to_argb())
}
