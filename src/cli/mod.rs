//! CLI module for Station API
//!
//! Provides subcommands for querying the catalog from the command line:
//! - `resolve`: run one field through the data fetchers and print the response
//! - `list`: print a whole entity collection

pub mod list;
pub mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Station API - Line and station lookups
#[derive(Parser)]
#[command(name = "station-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to use instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a single field (line, lines, linesByIds and the station equivalents)
    Resolve(resolve::ResolveArgs),

    /// Print every entity of a kind
    List(list::ListArgs),
}

/// Loads `.env` and configuration, then installs logging
fn bootstrap(catalog: Option<PathBuf>) -> anyhow::Result<crate::AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = crate::AppConfig::load()?;
    if catalog.is_some() {
        config.catalog.path = catalog;
    }

    crate::infrastructure::logging::init_logging(&config.logging);
    Ok(config)
}
