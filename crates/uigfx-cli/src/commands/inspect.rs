//! Inspect command: components, luminance and packing of a color.

use std::fmt::Write;

use crate::InspectArgs;
use anyhow::Result;

pub fn run(args: InspectArgs, verbose: u8) -> Result<()> {
    print!("{}", render(&args, verbose)?);
    Ok(())
}

fn render(args: &InspectArgs, verbose: u8) -> Result<String> {
    let color = super::parse_color(&args.color, args.from)?;
    let (r, g, b, a, space) = color.components();

    let mut out = String::new();
    writeln!(out, "{}", color)?;
    writeln!(out, "  Space:      {} (id {})", space.name(), space.id())?;
    writeln!(out, "  Model:      {}", space.model())?;
    writeln!(out, "  Components: {} {} {}", r, g, b)?;
    writeln!(out, "  Alpha:      {}", a)?;
    writeln!(out, "  Luminance:  {:.6}", color.luminance())?;
    writeln!(out, "  ARGB:       {}", super::format_argb(color))?;
    writeln!(out, "  Packed:     {:#018x}", color.value())?;

    if verbose > 0 {
        writeln!(out, "  Wide gamut: {}", space.is_wide_gamut())?;
        writeln!(out, "  sRGB:       {}", space.is_srgb())?;
        writeln!(out, "  Specified:  {}", color.is_specified())?;
    }

    Ok(out)
}
