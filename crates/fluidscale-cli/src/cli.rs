//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use fluidscale_core::Unit;
use fluidscale_export::Format;

/// Fluidscale - fluid type scales as CSS custom properties
#[derive(Parser, Debug)]
#[command(name = "fluidscale")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Silent mode (errors only)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a type scale and print it as CSS or JSON
    #[command(alias = "c")]
    Calculate(Box<CalculateArgs>),

    /// Show each step's size at one or more viewport widths
    #[command(alias = "p")]
    Preview(Box<PreviewArgs>),

    /// List the named modular ratios
    Ratios(RatiosArgs),

    /// Process multiple scale jobs from a JSONL file
    Batch(BatchArgs),
}

/// Scale definition shared by `calculate` and `preview`
///
/// Flags override the matching fields of `--query`, which in turn
/// overrides the defaults.
#[derive(Args, Debug, Default)]
pub struct ScaleArgs {
    /// Query string in the calculator's URL format, e.g. "minFontSize=18&useRems=on"
    #[arg(long = "query")]
    pub query: Option<String>,

    /// Base font size in px at the min screen width [default: 16]
    #[arg(long = "min-font-size")]
    pub min_font_size: Option<f64>,

    /// Base font size in px at the max screen width [default: 19]
    #[arg(long = "max-font-size")]
    pub max_font_size: Option<f64>,

    /// Viewport width in px where scaling starts [default: 400]
    #[arg(long = "min-width")]
    pub min_width: Option<f64>,

    /// Viewport width in px where scaling stops [default: 1280]
    #[arg(long = "max-width")]
    pub max_width: Option<f64>,

    /// Ratio at the min screen width, a number or a name such as major-third [default: 1.25]
    #[arg(long = "min-ratio")]
    pub min_ratio: Option<String>,

    /// Ratio at the max screen width, a number or a name such as perfect-fourth [default: 1.333]
    #[arg(long = "max-ratio")]
    pub max_ratio: Option<String>,

    /// Comma-separated step names, smallest first [default: sm,base,md,lg,xl,xxl,xxxl]
    #[arg(short = 's', long = "steps")]
    pub steps: Option<String>,

    /// Step that gets the base font sizes [default: base]
    #[arg(short = 'b', long = "base-step")]
    pub base_step: Option<String>,

    /// Decimal places for rounded sizes (0-10) [default: 2]
    #[arg(short = 'd', long = "decimals")]
    pub decimals: Option<u32>,

    /// Output unit [default: rem]
    #[arg(short = 'u', long = "unit")]
    pub unit: Option<UnitArg>,

    /// Pixels per rem [default: 16]
    #[arg(long = "rem-value", env = "FLUIDSCALE_REM_VALUE")]
    pub rem_value: Option<f64>,

    /// Custom property prefix: --<prefix>-<step> [default: font-size]
    #[arg(short = 'p', long = "prefix")]
    pub prefix: Option<String>,

    /// Wrap the CSS in @supports blocks with static fallbacks
    #[arg(long = "fallbacks")]
    pub fallbacks: bool,
}

/// Arguments for the calculate command
#[derive(Args, Debug)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub scale: ScaleArgs,

    /// Output format
    #[arg(short = 'O', long = "format", default_value = "css")]
    pub format: FormatArg,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Indent plain CSS declarations by this many tabs
    #[arg(long = "indent", default_value = "0")]
    pub indent: usize,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub scale: ScaleArgs,

    /// Viewport width in px; repeat or comma-separate for several columns
    /// [default: midway between min and max width]
    #[arg(short = 'w', long = "width", value_delimiter = ',')]
    pub width: Vec<f64>,
}

/// Arguments for the ratios command
#[derive(Args, Debug)]
pub struct RatiosArgs {
    /// Print as JSON instead of a table
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input JSONL file, one job per line (stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output JSONL file, one result per line (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Px,
    Rem,
}

impl From<UnitArg> for Unit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Px => Unit::Px,
            UnitArg::Rem => Unit::Rem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Css,
    Json,
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Css => Format::Css,
            FormatArg::Json => Format::Json,
        }
    }
}
