//! Clarus Pharmacy Analytics CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use clarus_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use clarus_cli::commands::{run_analyze, run_views};
use clarus_cli::logging::{LogConfig, LogFormat, init_logging};
use clarus_cli::summary::{print_analysis, print_schema, print_views};
use clarus_ingest::{IngestError, required_columns};
use clarus_report::report_to_json_string;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Analyze(args) => match run_analyze(args) {
            Ok(outcome) => {
                if args.format == ReportFormatArg::Json {
                    match report_to_json_string(&outcome.result.report) {
                        Ok(json) => {
                            println!("{json}");
                            0
                        }
                        Err(error) => {
                            eprintln!("error: {error:#}");
                            1
                        }
                    }
                } else {
                    print_analysis(&outcome);
                    0
                }
            }
            Err(error) => {
                report_error(&error);
                1
            }
        },
        Command::Views(args) => match run_views(args) {
            Ok(views) => {
                print_views(&args.file, &views);
                0
            }
            Err(error) => {
                report_error(&error);
                1
            }
        },
        Command::Schema => {
            print_schema();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Print a failure; schema problems also get the required-columns reference.
fn report_error(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    if matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::MissingColumns { .. })
    ) {
        eprintln!();
        eprintln!("Required columns: {}", required_columns().join(", "));
    }
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
