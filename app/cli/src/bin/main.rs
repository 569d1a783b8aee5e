//! Parley CLI binary entry point.

use anyhow::Result;
use clap::Parser;
use parley_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse().run().await
}
