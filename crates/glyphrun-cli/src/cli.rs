//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use glyphrun::{FontStretch, FontStyle};

/// glyphrun - Draw text as glyph runs and see where the next text goes
#[derive(Parser, Debug)]
#[command(name = "glyphrun")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output (debug logging unless RUST_LOG says otherwise)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw one or more texts, each starting where the previous one ended
    #[command(alias = "d")]
    Draw(Box<DrawArgs>),

    /// Measure texts without drawing them
    #[command(alias = "m")]
    Measure(MeasureArgs),

    /// Display metrics of the resolved face
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Which face to draw with
#[derive(Args, Debug, Clone)]
pub struct FaceArgs {
    /// Font file path (.ttf, .otf, .ttc, .otc); skips system lookup
    #[arg(short = 'f', long = "font-file")]
    pub font_file: Option<PathBuf>,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,

    /// Family name or generic family (serif, sans-serif, monospace, cursive, fantasy)
    #[arg(short = 'F', long = "family", default_value = "sans-serif")]
    pub family: String,

    #[arg(long = "style", value_enum, default_value = "normal")]
    pub style: StyleArg,

    /// Weight on the 1..=1000 scale
    #[arg(short = 'w', long = "weight", default_value = "400")]
    pub weight: u16,

    #[arg(long = "stretch", value_enum, default_value = "normal")]
    pub stretch: StretchArg,
}

/// Arguments for the draw command
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Texts to draw, chained end to start
    #[arg(required = true)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub face: FaceArgs,

    /// Em size in device-independent units
    #[arg(short = 's', long = "size", default_value = "48")]
    pub size: f32,

    /// End each text at its origin instead of starting there
    #[arg(long = "trailing")]
    pub trailing: bool,

    /// Turn glyphs 90° and advance by their heights
    #[arg(long = "sideways")]
    pub sideways: bool,

    /// Clockwise rotation in degrees around each origin
    #[arg(short = 'a', long = "angle", default_value = "0", allow_hyphen_values = true)]
    pub angle: f32,

    /// Text color (RRGGBB or RRGGBBAA)
    #[arg(short = 'c', long = "color", default_value = "000000FF")]
    pub color: String,

    /// Background color (RRGGBB or RRGGBBAA); transparent if omitted
    #[arg(short = 'b', long = "background")]
    pub background: Option<String>,

    /// Origin of the first text
    #[arg(short = 'x', long = "x", default_value = "20", allow_hyphen_values = true)]
    pub x: f32,

    #[arg(long = "y", default_value = "100", allow_hyphen_values = true)]
    pub y: f32,

    /// Device pixels per device-independent unit
    #[arg(long = "pixels-per-dip", default_value = "1.0")]
    pub pixels_per_dip: f32,

    /// Canvas width for SVG output
    #[arg(short = 'W', long = "width", default_value = "800")]
    pub width: f32,

    /// Canvas height for SVG output
    #[arg(short = 'H', long = "height", default_value = "200")]
    pub height: f32,

    /// Mark every origin and next point with a crosshair
    #[arg(long = "mark-anchors")]
    pub mark_anchors: bool,

    /// Draw the x and y axes through the first origin
    #[arg(long = "axes")]
    pub axes: bool,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'O', long = "format", value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Silent mode (no next point report)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the measure command
#[derive(Args, Debug)]
pub struct MeasureArgs {
    /// Texts to measure
    #[arg(required = true)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub face: FaceArgs,

    /// Em size in device-independent units
    #[arg(short = 's', long = "size", default_value = "48")]
    pub size: f32,

    /// Compact JSON on one line
    #[arg(long = "compact")]
    pub compact: bool,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub face: FaceArgs,

    /// List every family the system font database knows
    #[arg(long = "families")]
    pub families: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG vector paths
    Svg,
    /// The draw command log
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    Normal,
    Italic,
    Oblique,
}

impl From<StyleArg> for FontStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Normal => Self::Normal,
            StyleArg::Italic => Self::Italic,
            StyleArg::Oblique => Self::Oblique,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum StretchArg {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl From<StretchArg> for FontStretch {
    fn from(stretch: StretchArg) -> Self {
        match stretch {
            StretchArg::UltraCondensed => Self::UltraCondensed,
            StretchArg::ExtraCondensed => Self::ExtraCondensed,
            StretchArg::Condensed => Self::Condensed,
            StretchArg::SemiCondensed => Self::SemiCondensed,
            StretchArg::Normal => Self::Normal,
            StretchArg::SemiExpanded => Self::SemiExpanded,
            StretchArg::Expanded => Self::Expanded,
            StretchArg::ExtraExpanded => Self::ExtraExpanded,
            StretchArg::UltraExpanded => Self::UltraExpanded,
        }
    }
}
