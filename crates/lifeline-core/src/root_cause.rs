//! Root-cause selection for failure queries.
//!
//! Given a failure kind and a set of affected locations, the selector finds
//! the candidate unit whose failure would affect the most other units, then
//! assembles the bounded impact chain for it.

use crate::cascade::{AnalysisConfig, build_chain};
use crate::domain::{InfrastructureUnit, UnitKind};
use crate::error::{Error, Result};
use crate::reachability::Affected;
use crate::snapshot::Snapshot;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// A deduplicated, deterministically ordered set of location names.
///
/// Query boundaries receive locations as free-text lists (often comma-joined);
/// this type normalizes them once - trimming, dropping empties, deduplicating -
/// so the engine never sees malformed input. Construction fails on an
/// effectively empty set, which is a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSet(BTreeSet<String>);

impl LocationSet {
    /// Build a location set from raw names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLocationSet`] if no non-empty names remain after
    /// trimming.
    pub fn new<I, S>(locations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = locations
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if set.is_empty() {
            return Err(Error::EmptyLocationSet);
        }
        Ok(Self(set))
    }

    /// Whether the set contains the given location name.
    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.0.contains(location)
    }

    /// The location names, in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// Comma-joined display form for reports and error messages.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// One entry of an impact chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainEntry {
    /// The affected unit
    pub unit: InfrastructureUnit,
    /// Minimum number of dependency hops from the root cause
    pub depth: u32,
}

/// Result of a root-cause query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootCauseResult {
    /// The unit whose failure affects the most other units
    pub root_cause: InfrastructureUnit,
    /// Transitive dependents, depth-ascending, capped at the chain limit
    pub impact_chain: Vec<ChainEntry>,
    /// Count of ALL transitive dependents - not the capped chain length
    pub affected_services: usize,
    /// Names of the impact-chain entries, in chain order
    pub critical_path: Vec<String>,
}

impl Snapshot {
    /// Select the root cause for a failure of `kind` observed in `locations`.
    ///
    /// The root cause is the candidate (matching kind and location) with the
    /// largest transitive-dependent set; ties are broken by ascending unit id
    /// so the result is reproducible across runs on an identical snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] - carrying the requested kind and location
    /// list - if no unit matches the filters.
    pub fn root_cause(
        &self,
        kind: UnitKind,
        locations: &LocationSet,
        config: &AnalysisConfig,
    ) -> Result<RootCauseResult> {
        let candidates: Vec<&InfrastructureUnit> = self
            .units()
            .filter(|u| u.kind == kind && locations.contains(&u.location))
            .collect();

        if candidates.is_empty() {
            return Err(Error::NotFound {
                kind,
                locations: locations.names(),
            });
        }

        let mut scored: Vec<(&InfrastructureUnit, Vec<Affected>)> = candidates
            .into_iter()
            .map(|unit| {
                let dependents = self.transitive_dependents(&unit.id);
                debug!(
                    candidate = %unit.id,
                    dependents = dependents.len(),
                    "Scored root-cause candidate"
                );
                (unit, dependents)
            })
            .collect();

        // Highest dependent count wins; ties fall back to ascending unit id
        scored.sort_by(|(unit_a, deps_a), (unit_b, deps_b)| {
            deps_b
                .len()
                .cmp(&deps_a.len())
                .then_with(|| unit_a.id.cmp(&unit_b.id))
        });
        let (root, dependents) = scored.swap_remove(0);

        let affected_services = dependents.len();
        let impact_chain: Vec<ChainEntry> = build_chain(dependents, config.chain_limit)
            .into_iter()
            .filter_map(|affected| {
                self.get(&affected.id).map(|unit| ChainEntry {
                    unit: unit.clone(),
                    depth: affected.depth,
                })
            })
            .collect();
        let critical_path = impact_chain.iter().map(|e| e.unit.name.clone()).collect();

        Ok(RootCauseResult {
            root_cause: root.clone(),
            impact_chain,
            affected_services,
            critical_path,
        })
    }
}
