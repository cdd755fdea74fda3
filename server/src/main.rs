// server/src/main.rs

// Entry point for the hospital registry CLI.
use anyhow::Result;
use hospital_server::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    start_cli().await
}
