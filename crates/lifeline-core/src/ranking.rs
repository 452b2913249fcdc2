//! Region and global criticality rankings.
//!
//! Two distinct modes that must not be confused:
//!
//! - **Region mode** ranks the units of a location set by their *transitive*
//!   dependent count and derives a short narrative of vulnerabilities.
//! - **Global mode** ranks every unit by its *direct* (depth-1) dependent
//!   count, with no traversal and no cap.

use crate::cascade::AnalysisConfig;
use crate::domain::InfrastructureUnit;
use crate::root_cause::LocationSet;
use crate::snapshot::Snapshot;
use serde::Serialize;

/// A unit ranked by its transitive dependent count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalUnit {
    /// The ranked unit
    pub unit: InfrastructureUnit,
    /// Number of units that transitively depend on it
    pub dependent_count: usize,
}

/// Result of a region criticality analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionAnalysis {
    /// Comma-joined display form of the analyzed location set
    pub region: String,
    /// Top units by transitive dependent count; only units with at least one
    /// dependent appear
    pub critical_units: Vec<CriticalUnit>,
    /// Human-readable findings derived from the ranking
    pub vulnerabilities: Vec<String>,
    /// Size of the full location-filtered unit set, including units with no
    /// dependents
    pub total_units: usize,
}

/// One entry of the global criticality ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedUnit {
    /// Display name of the unit
    pub name: String,
    /// Number of distinct units depending on it directly
    pub direct_dependents: usize,
}

/// Global ranking of units by direct dependent count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalityRanking {
    /// All units, most-depended-upon first
    pub entries: Vec<RankedUnit>,
}

impl Snapshot {
    /// Rank the units of a region by transitive dependent count.
    ///
    /// Units with zero dependents are excluded from `critical_units` but
    /// still counted in `total_units`. Ties are broken by ascending unit id.
    #[must_use]
    pub fn rank_region(&self, locations: &LocationSet, config: &AnalysisConfig) -> RegionAnalysis {
        let in_region: Vec<&InfrastructureUnit> = self
            .units()
            .filter(|u| locations.contains(&u.location))
            .collect();
        let total_units = in_region.len();

        let mut critical: Vec<CriticalUnit> = in_region
            .into_iter()
            .filter_map(|unit| {
                let count = self.transitive_dependents(&unit.id).len();
                (count > 0).then(|| CriticalUnit {
                    unit: unit.clone(),
                    dependent_count: count,
                })
            })
            .collect();

        critical.sort_by(|a, b| {
            b.dependent_count
                .cmp(&a.dependent_count)
                .then_with(|| a.unit.id.cmp(&b.unit.id))
        });
        critical.truncate(config.region_top_k);

        let region = locations.joined();
        let vulnerabilities = region_findings(&critical, &region);

        RegionAnalysis {
            region,
            critical_units: critical,
            vulnerabilities,
            total_units,
        }
    }

    /// Rank every unit by its direct dependent count.
    ///
    /// Counts are distinct incoming edges at depth 1 - no traversal. The
    /// ranking is uncapped; ties are broken by ascending unit id.
    #[must_use]
    pub fn rank_global(&self) -> CriticalityRanking {
        let mut ranked: Vec<(&InfrastructureUnit, usize)> = self
            .units()
            .map(|unit| (unit, self.direct_dependent_count(&unit.id)))
            .collect();

        ranked.sort_by(|(unit_a, count_a), (unit_b, count_b)| {
            count_b
                .cmp(count_a)
                .then_with(|| unit_a.id.cmp(&unit_b.id))
        });

        CriticalityRanking {
            entries: ranked
                .into_iter()
                .map(|(unit, direct_dependents)| RankedUnit {
                    name: unit.name.clone(),
                    direct_dependents,
                })
                .collect(),
        }
    }
}

/// Derive the narrative findings for a region ranking.
///
/// Intentionally simple: one finding for the count of critical units, one
/// naming the top unit as a single point of failure. No findings when the
/// region has no critical units.
fn region_findings(critical: &[CriticalUnit], region: &str) -> Vec<String> {
    let Some(top) = critical.first() else {
        return Vec::new();
    };

    vec![
        format!(
            "{} critical unit(s) identified in {region}",
            critical.len()
        ),
        format!(
            "{} is a single point of failure affecting {} downstream unit(s)",
            top.unit.name, top.dependent_count
        ),
    ]
}
