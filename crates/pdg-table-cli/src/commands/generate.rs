//! Table generation commands.

use std::path::PathBuf;

use anyhow::Result;
use pdg_table_core::{generate, Dialect, GenerateRequest, JsonCatalog};
use tracing::{debug, info};

use crate::config::Config;

/// Generate a table in `dialect` from the configured catalog.
///
/// `catalog` overrides the configured catalog path and `output` the
/// dialect's configured destination.
pub fn execute(
    config: &Config,
    dialect: Dialect,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let catalog = JsonCatalog::new(catalog.unwrap_or_else(|| config.catalog.clone()));
    let output = output.unwrap_or_else(|| config.output_for(dialect));
    debug!(catalog = %catalog.path().display(), output = %output.display(), "Resolved paths");

    let request = GenerateRequest::new(dialect, output).with_layout(config.layout());

    let report = match generate(&catalog, &request) {
        Ok(report) => report,
        Err(err) if err.is_catalog_unavailable() => {
            println!(
                "Couldn't read the particle catalog at '{}'. Pass '--catalog <path>' or set PDG_CATALOG.",
                catalog.path().display()
            );
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    info!(particles = report.particles, bytes = report.bytes, "Table generated");
    println!("Output written in '{}'", report.output.display());
    Ok(())
}
