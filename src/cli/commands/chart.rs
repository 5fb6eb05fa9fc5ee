use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::cli::args::{ChartArgs, OutputFormat};
use crate::cli::commands::{utils::load_engine, Command};
use crate::config::FilterConfig;
use crate::core::FilterSnapshot;
use crate::view::{build_rows, ChartRow, TextRenderer};

pub struct ChartCommand {
    args: ChartArgs,
    config: FilterConfig,
}

#[derive(Serialize)]
struct ChartOutput {
    chart_id: String,
    link: ChartLink,
    selection: u32,
    max_count: u32,
    rows: Vec<ChartRow>,
}

/// The jump link an embedding page places above the comments
#[derive(Serialize)]
struct ChartLink {
    id: String,
    text: String,
    target: String,
    shortcut: String,
}

impl ChartOutput {
    fn new(snapshot: &FilterSnapshot, config: &FilterConfig) -> Self {
        let chart = &config.chart;
        Self {
            chart_id: chart.chart_id.clone(),
            link: ChartLink {
                id: chart.chart_link_id.clone(),
                text: chart.link_text.clone(),
                target: format!("#{}", chart.chart_id),
                shortcut: config.shortcuts.jump_to_chart.clone(),
            },
            selection: snapshot.selection,
            max_count: snapshot.chart.max_count,
            rows: build_rows(&snapshot.chart, snapshot.selection, chart),
        }
    }
}

impl ChartCommand {
    pub fn new(args: ChartArgs, config: FilterConfig) -> Self {
        Self { args, config }
    }
}

#[async_trait]
impl Command for ChartCommand {
    async fn execute(&self) -> Result<()> {
        let engine = load_engine(&self.args.items, &self.config, self.args.threshold)?;
        let snapshot = engine.snapshot();

        match self.args.format {
            OutputFormat::Text => {
                let renderer = TextRenderer::new(self.config.clone()).with_color(self.args.color);
                print!("{}", renderer.render(&snapshot));
            }
            OutputFormat::Json => {
                let output = ChartOutput::new(&snapshot, &self.config);
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }
}
