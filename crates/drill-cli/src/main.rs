//! Drill-hole data check CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use drill_cli::logging::{LogConfig, LogFormat, init_logging};
use drill_model::RuleKind;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod render;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_all, run_rule_command, run_tables};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Geology(args) => run_rule_command(RuleKind::Geology, args),
        Command::Samples(args) => run_rule_command(RuleKind::SampleStandards, args),
        Command::Alteration(args) => run_rule_command(RuleKind::Alteration, args),
        Command::Intervals(args) => run_rule_command(RuleKind::Intervals, args),
        Command::Major(args) => run_rule_command(RuleKind::RockType, args),
        Command::Ratio(args) => run_rule_command(RuleKind::StandardsRatio, args),
        Command::All(args) => run_all(args),
        Command::Tables => {
            run_tables();
            std::process::exit(0);
        }
    };
    let exit_code = match result {
        Ok(report) => {
            if report.has_errors() { 1 } else { 0 }
        }
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
