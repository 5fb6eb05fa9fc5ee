pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};

use crate::config::{default_config_file, FilterConfig};
use crate::core::constants::env_vars;
use anyhow::Result;
use clap::Parser;
use commands::chart::ChartCommand;
use commands::config::ConfigCommand;
use commands::filter::FilterCommand;
use commands::watch::WatchCommand;
use commands::Command;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_file()?,
    };

    let command: Box<dyn Command + Send + Sync> = match cli.command {
        // Config commands must work even when the file is invalid.
        Commands::Config { action } => {
            init_logging(cli.verbose, "info");
            Box::new(ConfigCommand::new(action, config_path))
        }
        Commands::Chart(args) => {
            Box::new(ChartCommand::new(args, load_config(&config_path, cli.verbose)?))
        }
        Commands::Filter(args) => {
            Box::new(FilterCommand::new(args, load_config(&config_path, cli.verbose)?))
        }
        Commands::Watch(args) => {
            Box::new(WatchCommand::new(args, load_config(&config_path, cli.verbose)?))
        }
    };

    command.execute().await
}

fn load_config(path: &Path, verbose: bool) -> Result<FilterConfig> {
    let config = FilterConfig::load_validated(path)?;
    init_logging(verbose, &config.logging.level);
    Ok(config)
}

/// `RECFILTER_LOG` wins, then `--verbose`, then the configured level
fn init_logging(verbose: bool, configured_level: &str) {
    let log_level = if verbose { "debug" } else { configured_level };
    let filter = EnvFilter::try_from_env(env_vars::LOG)
        .unwrap_or_else(|_| EnvFilter::new(format!("rec_filter={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
