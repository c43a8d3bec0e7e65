use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use barcode_checksum::calculate_all;
use barcode_cli::config::{StyleProfile, load_profile};
use barcode_cli::report::write_csv_report;
use barcode_core::{
    BatchReport, RenderRequest, Session, parse_values, process_batch_with, random_values,
};
use barcode_model::{
    BarcodeConfig, BarcodeFormat, Category, ChecksumKind, QualityLevel, SCALE_PRESETS,
    ValidationResult, is_hex_color,
};
use barcode_standards::{FormatRegistry, descriptor, is_applicable};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, info_span, warn};

use crate::cli::{
    BatchArgs, CalcArgs, CategoryArg, ChecksumsArgs, EncodeArgs, FormatsArgs, SizeArg,
    StyleArgs, ValidateArgs,
};
use crate::summary::{
    print_batch_summary, print_calculator, print_checksum_options, print_formats,
    print_render_request,
};

pub fn run_formats(args: &FormatsArgs) -> Result<()> {
    let registry = FormatRegistry::global();
    let formats: Vec<_> = match args.category {
        Some(CategoryArg::Linear) => registry.formats_in(Category::Linear).collect(),
        Some(CategoryArg::Matrix) => registry.formats_in(Category::Matrix).collect(),
        None => registry.formats().iter().collect(),
    };
    if args.json {
        print_json(&formats)
    } else {
        print_formats(formats);
        Ok(())
    }
}

pub fn run_checksums(args: &ChecksumsArgs) -> Result<()> {
    let format = parse_format(&args.format)?;
    let descriptor = descriptor(format);
    if args.json {
        print_json(&descriptor.checksums)
    } else {
        print_checksum_options(descriptor);
        Ok(())
    }
}

/// Returns the validation outcome; invalid input is not an error.
pub fn run_validate(args: &ValidateArgs, config_path: Option<&Path>) -> Result<ValidationResult> {
    let mut config = base_config(config_path)?;
    if let Some(format) = &args.format {
        config.set_format(parse_format(format)?);
    }
    config.set_text(args.text.clone());
    let session = Session::from_config(config);
    let result = session.validation();
    if args.json {
        print_json(&result)?;
    } else if result.valid {
        println!("valid: {} ({})", args.text, session.config().format);
    } else {
        println!("invalid: {}", result.message);
    }
    Ok(result)
}

pub fn run_encode(args: &EncodeArgs, config_path: Option<&Path>) -> Result<()> {
    let mut session = Session::from_config(base_config(config_path)?);
    if let Some(format) = &args.format {
        session.set_format(parse_format(format)?);
    }
    if let Some(checksum) = &args.checksum {
        session.set_checksum(parse_checksum(checksum)?);
    }
    if let Some(scale) = args.scale {
        if !(scale.is_finite() && scale > 0.0) {
            bail!("scale must be a positive number, got {scale}");
        }
        session.set_scale(scale);
    }
    if let Some(size) = args.size {
        session.set_scale(preset_scale(size));
    }
    if let Some(quality) = &args.quality {
        let quality: QualityLevel = quality.parse().context("parse quality")?;
        session.set_quality(quality);
    }
    apply_style_overrides(&mut session, &args.style)?;
    session.set_text(args.text.clone());
    warn_if_inapplicable(session.config());

    let request: RenderRequest = session
        .render_request()
        .with_context(|| format!("encode {:?} as {}", args.text, session.config().format))?;
    if args.json {
        print_json(&request)
    } else {
        print_render_request(&request);
        Ok(())
    }
}

pub fn run_calc(args: &CalcArgs) -> Result<()> {
    let rows = calculate_all(&args.input);
    if rows.is_empty() {
        bail!("Please enter a value");
    }
    if args.json {
        print_json(&rows)
    } else {
        print_calculator(&args.input, &rows);
        Ok(())
    }
}

pub fn run_batch(args: &BatchArgs, config_path: Option<&Path>) -> Result<BatchReport> {
    let mut config = base_config(config_path)?;
    if let Some(format) = &args.format {
        config.set_format(parse_format(format)?);
    }
    if let Some(checksum) = &args.checksum {
        config.set_checksum(parse_checksum(checksum)?);
    }
    warn_if_inapplicable(&config);
    let (format, checksum) = (config.format, config.checksum);

    let batch_span = info_span!("batch_command", format = %format);
    let _batch_guard = batch_span.enter();

    let values = match (&args.input, args.random) {
        (Some(path), _) => read_values(path)?,
        (None, Some(count)) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            random_values(
                format,
                usize::from(count),
                usize::from(args.length),
                &mut rng,
            )
        }
        (None, None) => bail!("either --input or --random is required"),
    };
    if values.is_empty() {
        bail!("Please enter at least one value");
    }

    let start = Instant::now();
    let progress = progress_bar(values.len(), args.no_progress);
    let report = process_batch_with(&values, format, checksum, |_| progress.inc(1));
    progress.finish_and_clear();
    debug!(
        values = values.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch prepared"
    );

    if let Some(path) = &args.report {
        write_csv_report(&report, path)?;
        info!(path = %path.display(), "wrote batch report");
    }
    print_batch_summary(&report);
    if let Some(path) = &args.report {
        println!("Report: {}", path.display());
    }
    Ok(report)
}

fn base_config(config_path: Option<&Path>) -> Result<BarcodeConfig> {
    let profile: StyleProfile = load_profile(config_path).context("load style profile")?;
    Ok(profile.to_config()?)
}

fn apply_style_overrides(session: &mut Session, args: &StyleArgs) -> Result<()> {
    let dimensions = [
        ("bar-width", args.bar_width),
        ("height", args.height),
        ("margin", args.margin),
        ("font-size", args.font_size),
    ];
    for (name, value) in dimensions {
        if let Some(value) = value
            && !(value.is_finite() && value >= 0.0)
        {
            bail!("--{name} must be a non-negative number, got {value}");
        }
    }
    for (name, color) in [
        ("line-color", &args.line_color),
        ("background", &args.background),
    ] {
        if let Some(color) = color
            && !is_hex_color(color)
        {
            bail!("--{name} must be a #RRGGBB color, got {color:?}");
        }
    }

    let style = session.style_mut();
    if let Some(width) = args.bar_width {
        style.width = width;
    }
    if let Some(height) = args.height {
        style.height = height;
    }
    if let Some(margin) = args.margin {
        style.margin = margin;
    }
    if let Some(font_size) = args.font_size {
        style.font_size = font_size;
    }
    if args.hide_text {
        style.display_value = false;
    }
    if let Some(color) = &args.line_color {
        style.line_color.clone_from(color);
    }
    if let Some(color) = &args.background {
        style.background.clone_from(color);
    }
    Ok(())
}

fn parse_format(value: &str) -> Result<BarcodeFormat> {
    value
        .parse()
        .with_context(|| format!("parse format {value:?}"))
}

fn parse_checksum(value: &str) -> Result<ChecksumKind> {
    value
        .parse()
        .with_context(|| format!("parse checksum {value:?}"))
}

fn preset_scale(size: SizeArg) -> f32 {
    SCALE_PRESETS
        .iter()
        .find(|(label, _)| *label == size.label())
        .map_or(1.0, |(_, scale)| *scale)
}

fn warn_if_inapplicable(config: &BarcodeConfig) {
    if !is_applicable(config.format, config.checksum) {
        warn!(
            format = %config.format,
            checksum = %config.checksum,
            "checksum is not offered for this format"
        );
    }
}

fn read_values(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let values = parse_values(&content);
    info!(path = %path.display(), values = values.len(), "read batch input");
    Ok(values)
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(len as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    progress
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
