//! MedTrack CLI.

use clap::{ColorChoice, Parser};
use medtrack_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use medtrack_cli::commands::{AppContext, error_report, run};
use medtrack_cli::logging::{LogConfig, LogFormat, init_logging};
use medtrack_cli::settings::Settings;
use medtrack_core::{SubscriptionManager, SystemClock};
use medtrack_persistence::JsonFileStore;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let settings = Settings::load_from(&config_path);
    let data_dir = settings.resolve_data_dir(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let store = JsonFileStore::new(data_dir);
    let clock = SystemClock;
    let subscription = SubscriptionManager::new(&store, &clock);
    if let Err(error) = subscription.ensure_initialized() {
        report(&error.into());
        std::process::exit(1);
    }

    let ctx = AppContext {
        store: &store,
        clock: &clock,
        subscription: &subscription,
        settings: &settings,
    };
    let exit_code = match run(&ctx, cli.command) {
        Ok(()) => 0,
        Err(error) => {
            report(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) {
    for line in error_report(error) {
        eprintln!("{line}");
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
