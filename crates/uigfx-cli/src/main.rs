//! uigfx - color and transform kernel on the command line
//!
//! Converts, interpolates and composites colors between the registered
//! color spaces, and maps points and rectangles through 4x4 transforms.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uigfx_color::{ColorSpaceId, RenderIntent};

mod commands;

#[derive(Parser)]
#[command(name = "uigfx")]
#[command(author, version, about = "UI graphics color and transform kernel")]
#[command(long_about = "
Color space conversion, Oklab interpolation, compositing and 2D transforms.

Colors are written as #RRGGBB, #AARRGGBB, 0xAARRGGBB (all sRGB), or as
comma separated components r,g,b[,a] in the --from space.

Examples:
  uigfx spaces                                  # List color spaces
  uigfx convert '#FF8000' --to display-p3       # Convert a color
  uigfx convert 0.9,0.9,0.9 --from dci-p3 --to srgb --intent absolute
  uigfx lerp '#FF0000' '#0000FF' -n 8           # Oklab gradient
  uigfx composite '#80FF0000' '#0000FF'         # Source over
  uigfx inspect 0xFF336699                      # Components and luminance
  uigfx hsl 210 0.5 0.4                         # HSL to sRGB
  uigfx transform --op rotate-z:90 --op scale:2 --rect 0,0,10,10
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered color spaces
    #[command(visible_alias = "ls")]
    Spaces(SpacesArgs),

    /// Convert a color to another color space
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Interpolate between two colors in Oklab
    Lerp(LerpArgs),

    /// Composite a color over another (source over)
    #[command(visible_alias = "comp")]
    Composite(CompositeArgs),

    /// Show everything about a color
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Create a color from hue, saturation, value
    Hsv(HueArgs),

    /// Create a color from hue, saturation, lightness
    Hsl(HueArgs),

    /// Build a 4x4 transform and map points and rectangles
    #[command(visible_alias = "t")]
    Transform(TransformArgs),
}

#[derive(Args)]
struct SpacesArgs {
    /// Only list wide gamut spaces
    #[arg(short, long)]
    wide: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Color to convert
    #[arg(allow_hyphen_values = true)]
    color: String,

    /// Color space of component input
    #[arg(short, long, default_value = "srgb")]
    from: ColorSpaceId,

    /// Destination color space
    #[arg(short, long)]
    to: ColorSpaceId,

    /// Render intent: perceptual, relative, saturation, absolute
    #[arg(short, long, default_value = "perceptual")]
    intent: RenderIntent,
}

#[derive(Args)]
struct LerpArgs {
    /// Start color
    start: String,

    /// Stop color; the gradient is in its color space
    stop: String,

    /// Number of intervals
    #[arg(short = 'n', long, default_value_t = 10)]
    steps: u32,

    /// Color space of component input
    #[arg(short, long, default_value = "srgb")]
    from: ColorSpaceId,
}

#[derive(Args)]
struct CompositeArgs {
    /// Foreground color
    fg: String,

    /// Background color; the result is in its color space
    bg: String,

    /// Color space of component input
    #[arg(short, long, default_value = "srgb")]
    from: ColorSpaceId,
}

#[derive(Args)]
struct InspectArgs {
    /// Color to inspect
    color: String,

    /// Color space of component input
    #[arg(short, long, default_value = "srgb")]
    from: ColorSpaceId,
}

#[derive(Args)]
struct HueArgs {
    /// Hue in degrees, 0..360
    hue: f32,

    /// Saturation, 0..1
    saturation: f32,

    /// Value (hsv) or lightness (hsl), 0..1
    level: f32,

    /// Alpha, 0..1
    #[arg(short, long, default_value_t = 1.0)]
    alpha: f32,

    /// RGB color space of the result
    #[arg(short, long, default_value = "srgb")]
    space: ColorSpaceId,
}

#[derive(Args)]
struct TransformArgs {
    /// Operators in call order: translate:x,y[,z], scale:x[,y[,z]],
    /// rotate-x:deg, rotate-y:deg, rotate-z:deg
    #[arg(short, long = "op", allow_hyphen_values = true)]
    ops: Vec<String>,

    /// Invert the resulting matrix
    #[arg(long)]
    invert: bool,

    /// Point to map, as x,y
    #[arg(short, long = "point", allow_hyphen_values = true)]
    points: Vec<String>,

    /// Rectangle to map, as left,top,right,bottom
    #[arg(short, long = "rect", allow_hyphen_values = true)]
    rects: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Spaces(args) => commands::spaces::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Lerp(args) => commands::lerp::run(args, cli.verbose),
        Commands::Composite(args) => commands::composite::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
        Commands::Hsv(args) => commands::hue::run_hsv(args, cli.verbose),
        Commands::Hsl(args) => commands::hue::run_hsl(args, cli.verbose),
        Commands::Transform(args) => commands::transform::run(args, cli.verbose),
    }
}
