//! Common helpers shared across CLI commands: boundary parsing and dataset
//! loading with warning reporting.

use std::path::Path;

use colored::Colorize;
use lifeline_core::{LocationSet, Snapshot, UnitKind};
use lifeline_dataset::load_snapshot;

/// Load a dataset snapshot, printing any load warnings to stderr.
pub async fn load_reporting(data_dir: &Path) -> anyhow::Result<Snapshot> {
    let (snapshot, warnings) = load_snapshot(data_dir).await?;
    for warning in &warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
    Ok(snapshot)
}

/// Parse a comma-separated location list into a validated set.
pub fn parse_locations(raw: &str) -> anyhow::Result<LocationSet> {
    Ok(LocationSet::new(raw.split(','))?)
}

/// Parse a unit kind, naming the accepted kinds on failure.
pub fn parse_kind(raw: &str) -> anyhow::Result<UnitKind> {
    UnitKind::parse(raw).ok_or_else(|| {
        anyhow::anyhow!("unknown unit kind '{raw}' (expected power, water, telecom, or transport)")
    })
}
