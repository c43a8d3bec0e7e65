//! CLI argument definitions for barcode-studio.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "barcode-studio",
    version,
    about = "Barcode Studio - Validate, checksum and prepare barcode values",
    long_about = "Validate barcode values, compute check digits and prepare render-ready \
                  values for 1D and 2D symbologies.\n\n\
                  Supports CODE 39/93/128, EAN/UPC, ITF, MSI, Pharmacode, Codabar, \
                  QR Code, Aztec, Data Matrix and PDF417."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Style profile (TOML). Defaults to config.toml in the user config directory.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-targets", global = true)]
    pub log_targets: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List supported barcode formats.
    Formats(FormatsArgs),

    /// List the checksums a format offers.
    Checksums(ChecksumsArgs),

    /// Check a value against the rules of a format.
    Validate(ValidateArgs),

    /// Validate, apply a checksum and print the render request.
    Encode(EncodeArgs),

    /// Run every checksum algorithm on one input.
    Calc(CalcArgs),

    /// Prepare many values for one format.
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct FormatsArgs {
    /// Only list formats of this category.
    #[arg(long = "category", value_enum)]
    pub category: Option<CategoryArg>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ChecksumsArgs {
    /// Format identifier (e.g. CODE39, EAN-13, qrcode).
    #[arg(value_name = "FORMAT")]
    pub format: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Value to validate.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Format identifier (default: from the style profile, else CODE39).
    #[arg(long = "format", short = 'f')]
    pub format: Option<String>,

    /// Print JSON instead of plain text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Value to encode.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Format identifier (default: from the style profile, else CODE39).
    #[arg(long = "format", short = 'f')]
    pub format: Option<String>,

    /// Checksum to apply (default: none).
    #[arg(long = "checksum", short = 'c')]
    pub checksum: Option<String>,

    /// Output scale factor.
    #[arg(long = "scale", conflicts_with = "size")]
    pub scale: Option<f32>,

    /// Output size preset.
    #[arg(long = "size", value_enum)]
    pub size: Option<SizeArg>,

    /// Output quality (A, B or C).
    #[arg(long = "quality")]
    pub quality: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// Per-invocation style overrides, applied on top of the style profile.
#[derive(Args, Default)]
pub struct StyleArgs {
    /// Width of a single bar in pixels (before scaling).
    #[arg(long = "bar-width", value_name = "PX")]
    pub bar_width: Option<f32>,

    /// Bar height in pixels (before scaling).
    #[arg(long = "height", value_name = "PX")]
    pub height: Option<f32>,

    /// Quiet zone around the symbol in pixels (before scaling).
    #[arg(long = "margin", value_name = "PX")]
    pub margin: Option<f32>,

    /// Font size of the human-readable text (before scaling).
    #[arg(long = "font-size", value_name = "PX")]
    pub font_size: Option<f32>,

    /// Do not print the value under the bars.
    #[arg(long = "hide-text")]
    pub hide_text: bool,

    /// Bar color as #RRGGBB.
    #[arg(long = "line-color", value_name = "COLOR")]
    pub line_color: Option<String>,

    /// Background color as #RRGGBB.
    #[arg(long = "background", value_name = "COLOR")]
    pub background: Option<String>,
}

#[derive(Args)]
pub struct CalcArgs {
    /// Input to run every algorithm on.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Format identifier (default: from the style profile, else CODE39).
    #[arg(long = "format", short = 'f')]
    pub format: Option<String>,

    /// Checksum to apply to every value (default: none).
    #[arg(long = "checksum", short = 'c')]
    pub checksum: Option<String>,

    /// File with one value per line.
    #[arg(
        long = "input",
        value_name = "FILE",
        required_unless_present = "random",
        conflicts_with = "random"
    )]
    pub input: Option<PathBuf>,

    /// Generate this many random values (1-1000) instead of reading a file.
    #[arg(
        long = "random",
        value_name = "COUNT",
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    pub random: Option<u16>,

    /// Length of generated values, 1-20 (fixed-length formats override it).
    #[arg(
        long = "length",
        default_value_t = 8,
        requires = "random",
        value_parser = clap::value_parser!(u16).range(1..=20)
    )]
    pub length: u16,

    /// Seed for reproducible random values.
    #[arg(long = "seed", requires = "random")]
    pub seed: Option<u64>,

    /// Write a CSV report of every value to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    #[value(name = "1d")]
    Linear,
    #[value(name = "2d")]
    Matrix,
}

/// Output size presets.
#[derive(Clone, Copy, ValueEnum)]
pub enum SizeArg {
    Small,
    Medium,
    Large,
}

impl SizeArg {
    pub fn label(self) -> &'static str {
        match self {
            SizeArg::Small => "Small",
            SizeArg::Medium => "Medium",
            SizeArg::Large => "Large",
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
