use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::cli::args::WatchArgs;
use crate::cli::commands::{utils::load_engine, Command};
use crate::config::FilterConfig;
use crate::core::{ChangeWatcher, ItemSource, View};
use crate::source::FileChangeNotifier;
use crate::view::{KeyChord, ShortcutMap, TextRenderer};

pub struct WatchCommand {
    args: WatchArgs,
    config: FilterConfig,
}

impl WatchCommand {
    pub fn new(args: WatchArgs, config: FilterConfig) -> Self {
        Self { args, config }
    }
}

/// What a line typed on stdin asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputOutcome {
    Selected(u32),
    ShowChart,
    Ignored,
}

/// A threshold number, or a key chord bound in `shortcuts`
fn apply_input<S: ItemSource>(
    engine: &mut ChangeWatcher<S>,
    shortcuts: &ShortcutMap,
    line: &str,
) -> Result<InputOutcome, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(InputOutcome::Ignored);
    }

    if let Ok(threshold) = line.parse::<u32>() {
        engine.select_threshold(threshold).map_err(|e| e.to_string())?;
        return Ok(InputOutcome::Selected(threshold));
    }

    let chord = KeyChord::parse(line)?;
    let action = shortcuts
        .action_for(&chord)
        .ok_or_else(|| format!("'{chord}' is not bound to any action"))?;

    match action.threshold() {
        Some(threshold) => {
            engine.select_threshold(threshold).map_err(|e| e.to_string())?;
            Ok(InputOutcome::Selected(threshold))
        }
        None => Ok(InputOutcome::ShowChart),
    }
}

#[async_trait]
impl Command for WatchCommand {
    async fn execute(&self) -> Result<()> {
        let mut engine = load_engine(&self.args.items, &self.config, self.args.threshold)?;
        let shortcuts = ShortcutMap::from_config(&self.config.shortcuts).map_err(anyhow::Error::msg)?;
        let mut renderer = TextRenderer::new(self.config.clone()).with_color(self.args.color);
        println!("{}", renderer.render(&engine.snapshot()));

        let signal = engine.signal();
        let _notifier = FileChangeNotifier::watch(&self.args.items, signal.clone())?;
        let debounce = Duration::from_millis(self.config.watcher.debounce_ms);
        let mut input = BufReader::new(tokio::io::stdin()).lines();
        let mut input_open = true;
        info!(
            "Watching {} for changes; type a threshold or a shortcut, Ctrl-C to stop",
            self.args.items.display()
        );

        loop {
            tokio::select! {
                _ = signal.changed() => {
                    // Let a burst of file events settle into one rebuild.
                    tokio::time::sleep(debounce).await;
                    match engine.process_pending(&mut renderer) {
                        Ok(reports) => {
                            for report in reports.iter().filter(|r| r.migrated()) {
                                info!(
                                    "Selection moved from {} to {}",
                                    report.previous_selection, report.selection
                                );
                            }
                            if let Some(frame) = renderer.take_frame() {
                                println!("{frame}");
                            }
                        }
                        Err(e) => error!("Rebuild failed, keeping previous state: {}", e),
                    }
                }
                line = input.next_line(), if input_open => {
                    match line {
                        Ok(Some(line)) => match apply_input(&mut engine, &shortcuts, &line) {
                            Ok(InputOutcome::Ignored) => {}
                            Ok(_) => {
                                renderer.redraw(&engine.snapshot());
                                if let Some(frame) = renderer.take_frame() {
                                    println!("{frame}");
                                }
                            }
                            Err(e) => warn!("{}", e),
                        },
                        Ok(None) => input_open = false,
                        Err(e) => {
                            warn!("Stopped reading input: {}", e);
                            input_open = false;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping watch");
                    break;
                }
            }
        }

        Ok(())
    }
}
