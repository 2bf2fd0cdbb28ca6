use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_RAW_DIR: &str = "data/raw";
pub const DEFAULT_OUTPUT: &str = "docs/data/listings.json";
pub const DEFAULT_GENERATED_FROM: &str = "local samples";

#[derive(Parser, Debug)]
#[command(name = "terreno-scout")]
#[command(about = "Builds the unified land listings dataset from portal and auction sources")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Directory holding portal_a.json, portal_b.json and remates.json
    #[arg(long, default_value = DEFAULT_RAW_DIR)]
    pub raw_dir: PathBuf,

    /// Where the unified dataset is written
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Provenance tag stored in the output document
    #[arg(long, default_value = DEFAULT_GENERATED_FROM)]
    pub generated_from: String,

    /// Map and count listings without writing the output
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw_dir: PathBuf,
    pub output: PathBuf,
    pub generated_from: String,
    pub dry_run: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            raw_dir: cli.raw_dir,
            output: cli.output,
            generated_from: cli.generated_from,
            dry_run: cli.dry_run,
        }
    }
}
