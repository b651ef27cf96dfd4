use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod discovery;
mod engine;
mod error;
mod output;
mod runner;
mod score;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Per-problem progress goes through tracing; the result table goes to stdout.
    let filter = if cli.verbose {
        EnvFilter::new("solverbench=debug")
    } else {
        EnvFilter::new("solverbench=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    cli::run::execute(cli).await
}
