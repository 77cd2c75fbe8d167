//! Jobindex Job Report
//!
//! Fetches every page of a Jobindex job search and prints or saves
//! a report of the listings.

use anyhow::Result;
use clap::Parser;
use jobindex_scraper::cli;
use tracing::error;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // No subscriber yet, so this one goes straight to stderr.
    if let Err(err) = cli::init_logging(args.log_level.as_deref()) {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    }

    if let Err(err) = cli::dispatch(args) {
        error!("❌ {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}
