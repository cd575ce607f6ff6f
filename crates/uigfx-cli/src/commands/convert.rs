//! Convert command: moves a color to another color space.

use std::fmt::Write;

use crate::ConvertArgs;
use anyhow::{Context, Result};
use tracing::debug;
use uigfx_color::Color;

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    print!("{}", render(&args, verbose)?);
    Ok(())
}

fn render(args: &ConvertArgs, verbose: u8) -> Result<String> {
    let color = super::parse_color(&args.color, args.from)?;
    let source = color.color_space();
    let destination = args.to.space();

    let connector = source.connect(destination, args.intent);
    debug!(
        source = source.name(),
        destination = destination.name(),
        intent = %args.intent,
        matrix = connector.rgb_matrix().is_some(),
        "convert"
    );

    let [r, g, b] = connector.transform([color.red(), color.green(), color.blue()]);
    let converted = Color::from_components(r, g, b, color.alpha(), args.to)
        .with_context(|| format!("{} does not fit {}", color, destination.name()))?;

    let mut out = String::new();
    if verbose > 0 {
        writeln!(out, "{} -> {} ({})", source.name(), destination.name(), args.intent)?;
        if let Some(m) = connector.rgb_matrix() {
            for row in m.m {
                writeln!(out, "  [{:>10.6} {:>10.6} {:>10.6}]", row[0], row[1], row[2])?;
            }
        }
    }

    writeln!(out, "{}", converted)?;
    writeln!(out, "{}", super::format_argb(converted))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigfx_color::{ColorSpaceId, RenderIntent};

    fn args(color: &str, to: ColorSpaceId) -> ConvertArgs {
        ConvertArgs {
            color: color.to_string(),
            from: ColorSpaceId::Srgb,
            to,
            intent: RenderIntent::Perceptual,
        }
    }

    #[test]
    fn test_convert_identity() {
        let out = render(&args("#FF0000", ColorSpaceId::Srgb), 0).unwrap();
        assert_eq!(out, "Color(1.0, 0.0, 0.0, 1.0, sRGB IEC61966-2.1)\n#FFFF0000\n");
    }

    #[test]
    fn test_convert_to_display_p3() {
        let out = render(&args("#FF0000", ColorSpaceId::DisplayP3), 0).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(", Display P3)"), "{}", lines[0]);
        assert_eq!(lines[1], "#FFFF0000");
    }

    #[test]
    fn test_convert_verbose_prints_matrix() {
        let out = render(&args("#FF0000", ColorSpaceId::DisplayP3), 1).unwrap();
        assert!(out.starts_with("sRGB IEC61966-2.1 -> Display P3 (perceptual)\n"), "{}", out);
        assert_eq!(out.lines().filter(|l| l.starts_with("  [")).count(), 3);
    }

    #[test]
    fn test_convert_bad_input() {
        assert!(render(&args("not a color", ColorSpaceId::Srgb), 0).is_err());
    }
}
