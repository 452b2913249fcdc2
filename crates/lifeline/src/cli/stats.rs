//! `lifeline stats` command implementation.

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use super::display;

/// Run the stats command.
pub async fn run(data_dir: &Path, json: bool) -> anyhow::Result<()> {
    let snapshot = display::load_reporting(data_dir).await?;

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<&str, usize> = BTreeMap::new();
    for unit in snapshot.units() {
        *by_kind.entry(unit.kind.as_str()).or_default() += 1;
        *by_status.entry(unit.status.as_str()).or_default() += 1;
    }

    if json {
        let stats = serde_json::json!({
            "units": snapshot.unit_count(),
            "edges": snapshot.edge_count(),
            "by_kind": by_kind,
            "by_status": by_status,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Dataset statistics".cyan().bold());
    println!();
    println!(
        "  {}: {} units, {} dependency edges",
        "Graph".white().bold(),
        snapshot.unit_count(),
        snapshot.edge_count()
    );
    println!();

    println!("  {}:", "Units by kind".white().bold());
    if by_kind.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for (kind, count) in &by_kind {
        println!("    {} {kind}: {count}", "•".dimmed());
    }
    println!();

    println!("  {}:", "Units by status".white().bold());
    if by_status.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for (status, count) in &by_status {
        println!("    {} {status}: {count}", "•".dimmed());
    }

    Ok(())
}
