mod adapters;
mod config;
mod error;
mod models;
mod pipeline;
mod sink;

use clap::Parser;
use config::{Cli, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout only carries the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse());

    info!("🏞️  Terreno Scout - unified land listings");
    info!("Reading raw sources from {}", config.raw_dir.display());

    let summary = pipeline::run(&config)?;

    if summary.written {
        println!("Unified dataset saved to {}", config.output.display());
    } else {
        println!(
            "Dry run: {} listings mapped, nothing written to {}",
            summary.total_listings,
            config.output.display()
        );
    }

    Ok(())
}
