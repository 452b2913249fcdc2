//! `lifeline root-cause` command implementation.

use std::path::Path;

use colored::Colorize;
use lifeline_core::AnalysisConfig;

use super::display;

/// Run the root-cause command.
pub async fn run(
    data_dir: &Path,
    kind: &str,
    locations: &str,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let kind = display::parse_kind(kind)?;
    let locations = display::parse_locations(locations)?;
    let snapshot = display::load_reporting(data_dir).await?;

    let config = AnalysisConfig {
        chain_limit: limit,
        ..AnalysisConfig::default()
    };
    let result = snapshot.root_cause(kind, &locations, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Root cause for {} failure in {}:",
        kind.as_str().cyan().bold(),
        locations.joined().cyan()
    );
    println!();
    println!(
        "  {} [{}] affects {} service(s)",
        result.root_cause.name.red().bold(),
        result.root_cause.id,
        result.affected_services.to_string().yellow()
    );
    println!();

    println!("  {}:", "Impact chain".white().bold());
    if result.impact_chain.is_empty() {
        println!("    {}", "(no dependent services)".dimmed());
    }
    for entry in &result.impact_chain {
        println!(
            "    {} depth {}: {} ({})",
            "•".dimmed(),
            entry.depth,
            entry.unit.name,
            entry.unit.kind
        );
    }
    if result.affected_services > result.impact_chain.len() {
        println!(
            "    {} ... and {} more",
            "•".dimmed(),
            result.affected_services - result.impact_chain.len()
        );
    }

    Ok(())
}
