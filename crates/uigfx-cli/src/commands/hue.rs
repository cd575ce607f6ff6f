//! HSV and HSL commands.

use std::fmt::Write;

use crate::HueArgs;
use anyhow::{Context, Result};
use uigfx_color::Color;

pub fn run_hsv(args: HueArgs, verbose: u8) -> Result<()> {
    print!("{}", render_hsv(&args, verbose)?);
    Ok(())
}

pub fn run_hsl(args: HueArgs, verbose: u8) -> Result<()> {
    print!("{}", render_hsl(&args, verbose)?);
    Ok(())
}

fn render_hsv(args: &HueArgs, verbose: u8) -> Result<String> {
    let color = Color::hsv(args.hue, args.saturation, args.level, args.alpha, args.space)
        .context("Invalid HSV input")?;
    render(color, verbose)
}

fn render_hsl(args: &HueArgs, verbose: u8) -> Result<String> {
    let color = Color::hsl(args.hue, args.saturation, args.level, args.alpha, args.space)
        .context("Invalid HSL input")?;
    render(color, verbose)
}

fn render(color: Color, verbose: u8) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", color)?;
    writeln!(out, "{}", super::format_argb(color))?;
    if verbose > 0 {
        writeln!(out, "Packed: {:#018x}", color.value())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigfx_color::ColorSpaceId;

    fn args(hue: f32, saturation: f32, level: f32) -> HueArgs {
        HueArgs {
            hue,
            saturation,
            level,
            alpha: 1.0,
            space: ColorSpaceId::Srgb,
        }
    }

    #[test]
    fn test_hsv_primaries() {
        let out = render_hsv(&args(0.0, 1.0, 1.0), 0).unwrap();
        assert_eq!(out, "Color(1.0, 0.0, 0.0, 1.0, sRGB IEC61966-2.1)\n#FFFF0000\n");

        let out = render_hsv(&args(240.0, 1.0, 1.0), 1).unwrap();
        assert_eq!(out.lines().nth(1), Some("#FF0000FF"));
        assert_eq!(out.lines().nth(2), Some("Packed: 0xff0000ff00000000"));
    }

    #[test]
    fn test_hsl_green() {
        let out = render_hsl(&args(120.0, 1.0, 0.5), 0).unwrap();
        assert_eq!(out, "Color(0.0, 1.0, 0.0, 1.0, sRGB IEC61966-2.1)\n#FF00FF00\n");
    }

    #[test]
    fn test_hue_out_of_range() {
        assert!(render_hsv(&args(361.0, 1.0, 1.0), 0).is_err());
        assert!(render_hsl(&args(0.0, 1.5, 0.5), 0).is_err());

        let mut lab = args(0.0, 1.0, 1.0);
        lab.space = ColorSpaceId::CieLab;
        assert!(render_hsv(&lab, 0).is_err());
    }
}
