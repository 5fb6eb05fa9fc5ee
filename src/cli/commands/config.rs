use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::cli::commands::Command;
use crate::config::{ConfigAction, ConfigValidator, FilterConfig};

pub struct ConfigCommand {
    action: ConfigAction,
    config_path: PathBuf,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, config_path: PathBuf) -> Self {
        Self {
            action,
            config_path,
        }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { force } => {
                if self.config_path.exists() && !force {
                    bail!(
                        "Configuration already exists at {} (use --force to overwrite)",
                        self.config_path.display()
                    );
                }
                FilterConfig::default().save(&self.config_path)?;
                println!("Configuration initialized at {}", self.config_path.display());
            }

            ConfigAction::Show => {
                let config = FilterConfig::load(&self.config_path)?;
                println!("{}", config.to_toml()?);
            }

            ConfigAction::Path => println!("{}", self.config_path.display()),

            ConfigAction::Validate => {
                let config = FilterConfig::load(&self.config_path)?;
                let report = ConfigValidator::new().validate(&config);
                report.print_summary();
                if report.has_errors() {
                    bail!("Configuration validation failed with {} errors", report.errors.len());
                }
            }
        }

        Ok(())
    }
}
