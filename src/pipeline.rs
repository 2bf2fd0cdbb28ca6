use crate::adapters::{registered_adapters, SourceAdapter};
use crate::config::Config;
use crate::error::Result;
use crate::models::Envelope;
use crate::sink;
use tracing::info;

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total_listings: usize,
    pub written: bool,
}

/// Drain every adapter in order into a single envelope.
///
/// The first failing record aborts the whole aggregation; nothing is returned partially.
pub fn aggregate(adapters: &[Box<dyn SourceAdapter>], generated_from: &str) -> Result<Envelope> {
    let mut envelope = Envelope::new(generated_from);

    for adapter in adapters {
        let span = tracing::info_span!("adapter", source = adapter.source_name());
        let _enter = span.enter();

        let before = envelope.listings.len();
        for listing in adapter.listings()? {
            envelope.push(&listing?)?;
        }

        info!(
            "Mapped {} listings from {}",
            envelope.listings.len() - before,
            adapter.raw_path().display()
        );
    }

    info!("Aggregated {} listings from {} sources", envelope.listings.len(), adapters.len());
    Ok(envelope)
}

/// Run the registered adapters against the configured raw directory and persist the result
pub fn run(config: &Config) -> Result<RunSummary> {
    let adapters = registered_adapters(&config.raw_dir);
    let envelope = aggregate(&adapters, &config.generated_from)?;
    let total_listings = envelope.listings.len();

    if config.dry_run {
        info!("Dry run, skipping write to {}", config.output.display());
        return Ok(RunSummary {
            total_listings,
            written: false,
        });
    }

    sink::write_envelope(&config.output, &envelope)?;

    Ok(RunSummary {
        total_listings,
        written: true,
    })
}
