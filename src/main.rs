use anyhow::Result;
use rec_filter::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
