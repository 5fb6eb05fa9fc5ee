use anyhow::Result;
use async_trait::async_trait;

pub mod chart;
pub mod config;
pub mod filter;
pub mod watch;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::config::FilterConfig;
    use crate::core::{ChangeWatcher, NullView};
    use crate::error::RecResult;
    use crate::source::JsonFileSource;
    use std::path::Path;
    use tracing::warn;

    /// Load the item file, build the filter state and apply `threshold`
    pub fn load_engine(
        items: &Path,
        config: &FilterConfig,
        threshold: Option<u32>,
    ) -> RecResult<ChangeWatcher<JsonFileSource>> {
        let mut engine = ChangeWatcher::with_config(JsonFileSource::new(items), &config.watcher);
        let report = engine.initialize(&mut NullView)?;

        if report.malformed_count > 0 {
            warn!(
                "{} of {} items had unusable counts and were left out",
                report.malformed_count,
                report.malformed_count + report.item_count
            );
        }
        if let Some(threshold) = threshold {
            engine.select_threshold(threshold)?;
        }

        Ok(engine)
    }
}
