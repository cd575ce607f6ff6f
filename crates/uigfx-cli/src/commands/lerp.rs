//! Lerp command: prints an Oklab gradient.

use std::fmt::Write;

use crate::LerpArgs;
use anyhow::{bail, Result};
use uigfx_color::lerp;

pub fn run(args: LerpArgs, verbose: u8) -> Result<()> {
    print!("{}", render(&args, verbose)?);
    Ok(())
}

fn render(args: &LerpArgs, verbose: u8) -> Result<String> {
    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }

    let start = super::parse_color(&args.start, args.from)?;
    let stop = super::parse_color(&args.stop, args.from)?;

    let mut out = String::new();
    for i in 0..=args.steps {
        let t = i as f32 / args.steps as f32;
        let color = lerp(start, stop, t);
        if verbose > 0 {
            writeln!(out, "{:.4}  {}  {}", t, super::format_argb(color), color)?;
        } else {
            writeln!(out, "{:.4}  {}", t, super::format_argb(color))?;
        }
    }

    Ok(out)
}
