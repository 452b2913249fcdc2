//! `lifeline region` command implementation.

use std::path::Path;

use colored::Colorize;
use lifeline_core::AnalysisConfig;

use super::display;

/// Run the region command.
pub async fn run(data_dir: &Path, locations: &str, json: bool) -> anyhow::Result<()> {
    let locations = display::parse_locations(locations)?;
    let snapshot = display::load_reporting(data_dir).await?;

    let analysis = snapshot.rank_region(&locations, &AnalysisConfig::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("Region analysis for {}:", analysis.region.cyan().bold());
    println!();
    println!(
        "  {}: {}",
        "Units in region".white().bold(),
        analysis.total_units
    );
    println!();

    println!("  {}:", "Critical units".white().bold());
    if analysis.critical_units.is_empty() {
        println!("    {}", "(no unit has dependents)".dimmed());
    }
    for critical in &analysis.critical_units {
        println!(
            "    {} {} ({}) supports {} unit(s)",
            "•".dimmed(),
            critical.unit.name,
            critical.unit.kind,
            critical.dependent_count.to_string().yellow()
        );
    }

    if !analysis.vulnerabilities.is_empty() {
        println!();
        println!("  {}:", "Vulnerabilities".white().bold());
        for finding in &analysis.vulnerabilities {
            println!("    {} {finding}", "!".yellow().bold());
        }
    }

    Ok(())
}
