use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::cli::args::{FilterArgs, OutputFormat};
use crate::cli::commands::{utils::load_engine, Command};
use crate::config::FilterConfig;
use crate::core::ItemId;

pub struct FilterCommand {
    args: FilterArgs,
    config: FilterConfig,
}

#[derive(Serialize)]
struct FilterOutput {
    threshold: u32,
    top_count: usize,
    visible: Vec<ItemId>,
    hidden: Vec<ItemId>,
}

impl FilterCommand {
    pub fn new(args: FilterArgs, config: FilterConfig) -> Self {
        Self { args, config }
    }
}

#[async_trait]
impl Command for FilterCommand {
    async fn execute(&self) -> Result<()> {
        let engine = load_engine(&self.args.items, &self.config, Some(self.args.threshold))?;

        let (visible, hidden): (Vec<_>, Vec<_>) =
            engine.items().iter().partition(|item| item.is_visible());

        match self.args.format {
            OutputFormat::Text => {
                for item in &visible {
                    println!("{}\t{}", item.id, item.recommended_count);
                }
            }
            OutputFormat::Json => {
                let output = FilterOutput {
                    threshold: engine.current_selection(),
                    top_count: engine.index().top_count_at_least(self.args.threshold),
                    visible: visible.iter().map(|item| item.id.clone()).collect(),
                    hidden: hidden.iter().map(|item| item.id.clone()).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }
}
