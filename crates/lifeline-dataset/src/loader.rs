//! Dataset loading: from JSONL files to an analyzable snapshot.
//!
//! A dataset directory holds two files: [`UNITS_FILE`] with one
//! `InfrastructureUnit` per line and [`EDGES_FILE`] with one `DependencyEdge`
//! per line. Loading is resilient: malformed lines, duplicate unit ids, and
//! edges with unknown endpoints become [`LoadWarning`]s instead of failing
//! the load, so one bad export line never takes the analysis down.
//!
//! The engine's own [`Snapshot::build`] stays strict - feeding it an
//! unfiltered edge list still fails on unknown ids. The filtering here is a
//! dataset-boundary policy, not an engine relaxation.

use crate::error::{Error, Result};
use crate::reader::JsonlReader;
use crate::warning::LoadWarning;
use lifeline_core::{DependencyEdge, InfrastructureUnit, Snapshot, UnitId};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs::File;
use tracing::{debug, warn};

/// File name of the unit list inside a dataset directory.
pub const UNITS_FILE: &str = "units.jsonl";

/// File name of the edge list inside a dataset directory.
pub const EDGES_FILE: &str = "edges.jsonl";

/// Read all parseable records from a JSONL file, collecting parse warnings.
async fn read_records<T>(
    path: &Path,
    warnings: &mut Vec<LoadWarning>,
) -> Result<Vec<(usize, T)>>
where
    T: DeserializeOwned,
{
    let file = File::open(path).await?;
    let mut reader = JsonlReader::new(file);
    let mut records = Vec::new();

    loop {
        match reader.read_line::<T>().await {
            Ok(Some(record)) => records.push((reader.line_number(), record)),
            Ok(None) => break,
            Err(Error::Json(e)) => {
                warn!(
                    file = %path.display(),
                    line = reader.line_number(),
                    error = %e,
                    "Skipping malformed dataset line"
                );
                warnings.push(LoadWarning::MalformedJson {
                    line_number: reader.line_number(),
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}

/// Load the unit list from a JSONL file.
///
/// Duplicate unit ids keep the first occurrence; later occurrences are
/// discarded with a [`LoadWarning::DuplicateUnit`].
///
/// # Errors
///
/// Returns an error only for infrastructure failures (file missing,
/// unreadable); malformed content becomes warnings.
pub async fn load_units(path: &Path) -> Result<(Vec<InfrastructureUnit>, Vec<LoadWarning>)> {
    let mut warnings = Vec::new();
    let records = read_records::<InfrastructureUnit>(path, &mut warnings).await?;

    let mut seen: HashSet<UnitId> = HashSet::with_capacity(records.len());
    let mut units = Vec::with_capacity(records.len());
    for (line_number, unit) in records {
        if seen.insert(unit.id.clone()) {
            units.push(unit);
        } else {
            warnings.push(LoadWarning::DuplicateUnit {
                id: unit.id,
                line_number,
            });
        }
    }

    debug!(units = units.len(), warnings = warnings.len(), "Unit file loaded");
    Ok((units, warnings))
}

/// Load the edge list from a JSONL file.
///
/// # Errors
///
/// Returns an error only for infrastructure failures; malformed lines become
/// warnings. Endpoint validation happens in [`load_dataset`], which knows the
/// unit set.
pub async fn load_edges(path: &Path) -> Result<(Vec<DependencyEdge>, Vec<LoadWarning>)> {
    let mut warnings = Vec::new();
    let records = read_records::<DependencyEdge>(path, &mut warnings).await?;

    let edges = records.into_iter().map(|(_, edge)| edge).collect();
    Ok((edges, warnings))
}

/// Load a full dataset directory into flat unit and edge lists.
///
/// Edges whose endpoints are not in the loaded unit set are dropped with a
/// [`LoadWarning::UnknownEndpoint`], so the returned lists always satisfy the
/// engine's strict snapshot contract.
///
/// # Errors
///
/// Returns an error if either dataset file cannot be read.
pub async fn load_dataset(
    dir: &Path,
) -> Result<(Vec<InfrastructureUnit>, Vec<DependencyEdge>, Vec<LoadWarning>)> {
    let (units, mut warnings) = load_units(&dir.join(UNITS_FILE)).await?;
    let (edges, edge_warnings) = load_edges(&dir.join(EDGES_FILE)).await?;
    warnings.extend(edge_warnings);

    let known: HashSet<&UnitId> = units.iter().map(|u| &u.id).collect();
    let mut kept = Vec::with_capacity(edges.len());
    for edge in edges {
        if known.contains(&edge.from) && known.contains(&edge.to) {
            kept.push(edge);
        } else {
            warn!(from = %edge.from, to = %edge.to, "Dropping edge with unknown endpoint");
            warnings.push(LoadWarning::UnknownEndpoint {
                from: edge.from,
                to: edge.to,
            });
        }
    }

    Ok((units, kept, warnings))
}

/// Load a dataset directory and build an analyzable snapshot from it.
///
/// # Errors
///
/// Returns an error if a dataset file cannot be read or the filtered data
/// still fails snapshot construction.
pub async fn load_snapshot(dir: &Path) -> Result<(Snapshot, Vec<LoadWarning>)> {
    let (units, edges, warnings) = load_dataset(dir).await?;

    // Endpoints were filtered against the unit set, so construction only
    // fails if that filtering has a bug; surface it rather than panic.
    let snapshot =
        Snapshot::build(units, edges).map_err(|e| Error::InvalidFormat(e.to_string()))?;

    debug!(
        units = snapshot.unit_count(),
        edges = snapshot.edge_count(),
        "Dataset snapshot ready"
    );
    Ok((snapshot, warnings))
}
