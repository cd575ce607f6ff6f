//! Spaces command: lists the color space registry.

use crate::SpacesArgs;
use anyhow::Result;
use uigfx_color::{ColorSpace, ColorSpaceId};

pub fn run(args: SpacesArgs, verbose: u8) -> Result<()> {
    println!(
        "{:>3}  {:<21} {:<5} {:<5} {:<20} {}",
        "id", "short", "model", "wide", "range", "name"
    );

    for id in ColorSpaceId::ALL {
        let space = id.space();
        if args.wide && !space.is_wide_gamut() {
            continue;
        }
        println!(
            "{:>3}  {:<21} {:<5} {:<5} {:<20} {}",
            id.id(),
            id.short_name(),
            space.model(),
            if space.is_wide_gamut() { "yes" } else { "no" },
            format_range(space),
            space.name()
        );
        if verbose > 0 {
            print_details(space);
        }
    }

    Ok(())
}

fn format_range(space: &ColorSpace) -> String {
    (0..space.component_count())
        .map(|c| format!("{}..{}", space.min_value(c), space.max_value(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_details(space: &ColorSpace) {
    let Some(rgb) = space.as_rgb() else {
        return;
    };
    let p = rgb.primaries();
    println!(
        "       primaries  r({:.4}, {:.4}) g({:.4}, {:.4}) b({:.4}, {:.4})",
        p.r.0, p.r.1, p.g.0, p.g.1, p.b.0, p.b.1
    );
    println!("       white      {}", rgb.white_point());
    match rgb.transfer_parameters() {
        Some(t) => println!(
            "       transfer   g={} a={} b={} c={} d={} e={} f={}",
            t.gamma, t.a, t.b, t.c, t.d, t.e, t.f
        ),
        None => println!("       transfer   custom"),
    }
}
