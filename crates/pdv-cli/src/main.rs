//! Personal record validator CLI.

use clap::{ColorChoice, Parser};
use pdv_cli::commands::run_check;
use pdv_cli::logging::{LogConfig, LogFormat, init_logging};
use pdv_cli::summary::print_summary;
use pdv_cli::types::CheckRequest;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let request = CheckRequest {
        input: cli.input.clone(),
        output: cli.output.clone(),
        show_progress: cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let exit_code = match run_check(&request) {
        Ok(result) => {
            print_summary(&result);
            0
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
    config.with_timestamps = cli.log_timestamps;
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
    fn test_log_timestamps_flag_reaches_config() {
        let cli = Cli::parse_from(["pdv", "--log-timestamps", "--log-format", "compact"]);
        let config = log_config_from_cli(&cli);

        assert!(config.with_timestamps);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_explicit_level_disables_env_filter() {
        let cli = Cli::parse_from(["pdv", "--log-level", "debug"]);
        let config = log_config_from_cli(&cli);

        assert!(!config.with_timestamps);
        assert!(!config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
    }
}
