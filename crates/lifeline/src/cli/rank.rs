//! `lifeline rank` command implementation.

use std::path::Path;

use colored::Colorize;

use super::display;

/// Run the global ranking command.
pub async fn run(data_dir: &Path, json: bool) -> anyhow::Result<()> {
    let snapshot = display::load_reporting(data_dir).await?;

    let ranking = snapshot.rank_global();

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    println!(
        "Critical infrastructure ranking ({} units):",
        ranking.entries.len().to_string().cyan().bold()
    );
    println!();

    if ranking.entries.is_empty() {
        println!("  {}", "(dataset contains no units)".dimmed());
    }
    for (position, entry) in ranking.entries.iter().enumerate() {
        println!(
            "  {:>3}. {} ({} direct dependents)",
            position + 1,
            entry.name.white().bold(),
            entry.direct_dependents.to_string().yellow()
        );
    }

    Ok(())
}
