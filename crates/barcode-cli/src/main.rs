//! barcode-studio CLI.

use std::io::{self, IsTerminal};

use barcode_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_batch, run_calc, run_checksums, run_encode, run_formats, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config_path = cli.config.as_deref();
    let outcome = match &cli.command {
        Command::Formats(args) => run_formats(args).map(|()| 0),
        Command::Checksums(args) => run_checksums(args).map(|()| 0),
        Command::Validate(args) => {
            run_validate(args, config_path).map(|result| if result.valid { 0 } else { 1 })
        }
        Command::Encode(args) => run_encode(args, config_path).map(|()| 0),
        Command::Calc(args) => run_calc(args).map(|()| 0),
        Command::Batch(args) => run_batch(args, config_path)
            .map(|report| if report.rejected_count() > 0 { 1 } else { 0 }),
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_targets;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_flags_reach_config() {
        let cli = Cli::parse_from([
            "barcode-studio",
            "--log-timestamps",
            "--log-targets",
            "--log-format",
            "json",
            "formats",
        ]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.format, LogFormat::Json);

        let config = log_config_from_cli(&Cli::parse_from(["barcode-studio", "formats"]));
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn test_batch_random_bounds() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(["barcode-studio", "batch"].iter().chain(args).copied())
        };
        assert!(parse(&["--random", "1000", "--length", "20"]).is_ok());
        assert!(parse(&["--random", "0"]).is_err());
        assert!(parse(&["--random", "1001"]).is_err());
        assert!(parse(&["--random", "5", "--length", "0"]).is_err());
        assert!(parse(&["--random", "5", "--length", "21"]).is_err());

        let cli = parse(&["--random", "5"]).unwrap();
        let Command::Batch(args) = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(args.random, Some(5));
        assert_eq!(args.length, 8);
    }

    #[test]
    fn test_encode_style_flags_parse() {
        let cli = Cli::parse_from([
            "barcode-studio",
            "encode",
            "123456",
            "--height",
            "40",
            "--hide-text",
            "--line-color",
            "#112233",
        ]);
        let Command::Encode(args) = cli.command else {
            panic!("expected encode command");
        };
        assert_eq!(args.style.height, Some(40.0));
        assert!(args.style.hide_text);
        assert_eq!(args.style.line_color.as_deref(), Some("#112233"));
        assert_eq!(args.style.margin, None);
    }
}
