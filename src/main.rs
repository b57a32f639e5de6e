//! # medistream CLI
//!
//! A command-line tool for parsing medicine registry catalogs.
//!
//! ## Usage
//!
//! ```bash
//! # Print the deduplicated record set
//! medistream catalog.xml
//!
//! # Emit the records as JSON
//! medistream catalog.xml --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use medistream::CatalogStreamer;

/// medistream - Streaming Medicine Catalog Reader
#[derive(Parser)]
#[command(name = "medistream")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog XML file to parse
    #[arg(value_name = "CATALOG")]
    catalog: PathBuf,

    /// Emit records as JSON instead of the summary listing
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let streamer = CatalogStreamer::open(&cli.catalog)
        .with_context(|| format!("cannot open catalog {}", cli.catalog.display()))?;
    let catalog = streamer
        .build_catalog()
        .with_context(|| format!("failed to parse {}", cli.catalog.display()))?;
    info!("parsed {} unique record(s)", catalog.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        println!("{} unique medicine record(s)", catalog.len());
        for medicine in &catalog {
            println!("  {}", medicine);
        }
    }
    Ok(())
}
