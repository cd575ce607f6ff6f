//! Composite command

use std::fmt::Write;

use crate::CompositeArgs;
use anyhow::Result;
use tracing::trace;

pub fn run(args: CompositeArgs, verbose: u8) -> Result<()> {
    print!("{}", render(&args, verbose)?);
    Ok(())
}

fn render(args: &CompositeArgs, verbose: u8) -> Result<String> {
    let fg = super::parse_color(&args.fg, args.from)?;
    let bg = super::parse_color(&args.bg, args.from)?;
    trace!(fg = %fg, bg = %bg, "composite");

    let mut out = String::new();
    if verbose > 0 {
        writeln!(out, "Compositing {} over {}", fg, bg)?;
    }

    let result = fg.composite_over(bg);
    writeln!(out, "{}", result)?;
    writeln!(out, "{}", super::format_argb(result))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigfx_color::ColorSpaceId;

    fn args(fg: &str, bg: &str) -> CompositeArgs {
        CompositeArgs {
            fg: fg.to_string(),
            bg: bg.to_string(),
            from: ColorSpaceId::Srgb,
        }
    }

    #[test]
    fn test_composite_half_red_over_blue() {
        let out = render(&args("#80FF0000", "#0000FF"), 0).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(", 1.0, sRGB IEC61966-2.1)"), "{}", lines[0]);
        assert_eq!(lines[1], "#FF80007F");
    }

    #[test]
    fn test_composite_opaque_wins() {
        let out = render(&args("#00FF00", "#0000FF"), 0).unwrap();
        assert_eq!(out, "Color(0.0, 1.0, 0.0, 1.0, sRGB IEC61966-2.1)\n#FF00FF00\n");
    }

    #[test]
    fn test_composite_verbose() {
        let out = render(&args("#00FF00", "#0000FF"), 1).unwrap();
        assert!(out.starts_with("Compositing Color(0.0, 1.0, 0.0, 1.0"), "{}", out);
        assert_eq!(out.lines().count(), 3);
    }
}
