//! Loadplan Studio CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use loadplan_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_export, run_parse, run_stats, run_validate};
use crate::summary::{print_file_table, print_rollups, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Parse(args) => match run_parse(&args) {
            Ok(result) => {
                print_file_table(&result.loaded.reports);
                if let Some(out) = &result.out {
                    println!("Orders written to {}", out.display());
                }
                0
            }
            Err(error) => fail(&error),
        },
        Command::Validate(args) => match run_validate(&args) {
            Ok(result) => {
                print_file_table(&result.loaded.reports);
                print_validation(&result.summary);
                if result.summary.is_valid { 0 } else { 1 }
            }
            Err(error) => fail(&error),
        },
        Command::Stats(args) => match run_stats(&args) {
            Ok(result) => {
                print_file_table(&result.loaded.reports);
                print_rollups(&result.rollups);
                0
            }
            Err(error) => fail(&error),
        },
        Command::Export(args) => match run_export(&args) {
            Ok(result) => {
                print_file_table(&result.loaded.reports);
                println!(
                    "Consolidated sheet written to {} ({} orders)",
                    result.out.display(),
                    result.loaded.orders.len()
                );
                0
            }
            Err(error) => fail(&error),
        },
    };
    std::process::exit(exit_code);
}

fn fail(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error}");
    1
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
