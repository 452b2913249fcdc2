//! Impact-chain ordering and truncation.
//!
//! The cascade chain is the presentation form of a traversal result: the
//! dependents of a failed unit ordered by how soon the failure reaches them,
//! bounded so reports stay readable. The full dependent count is reported
//! separately and is never truncated.

use crate::reachability::Affected;

/// Tunable bounds for analysis output.
///
/// Bounds are configuration rather than constants so components stay testable
/// at other sizes.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Maximum number of entries in an impact chain.
    pub chain_limit: usize,
    /// Number of critical units reported per region analysis.
    pub region_top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chain_limit: 10,
            region_top_k: 5,
        }
    }
}

/// Order dependents into a bounded, depth-ascending impact chain.
///
/// Sorts by (depth ascending, unit id ascending) and truncates to `limit`.
/// The sort key is a total order, so the chain is identical for identical
/// inputs regardless of discovery order.
#[must_use]
pub fn build_chain(mut dependents: Vec<Affected>, limit: usize) -> Vec<Affected> {
    dependents.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.id.cmp(&b.id)));
    dependents.truncate(limit);
    dependents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnitId;

    fn affected(id: &str, depth: u32) -> Affected {
        Affected {
            id: UnitId::from(id),
            depth,
        }
    }

    #[test]
    fn chain_orders_by_depth_then_id() {
        let chain = build_chain(
            vec![
                affected("z", 2),
                affected("b", 1),
                affected("a", 2),
                affected("c", 1),
            ],
            10,
        );

        let ids: Vec<&str> = chain.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a", "z"]);
    }

    #[test]
    fn chain_truncates_to_limit() {
        let dependents: Vec<Affected> = (0..20).map(|i| affected(&format!("u{i:02}"), 1)).collect();

        let chain = build_chain(dependents, 10);
        assert_eq!(chain.len(), 10);
        assert_eq!(chain[0].id, UnitId::from("u00"));
        assert_eq!(chain[9].id, UnitId::from("u09"));
    }

    #[test]
    fn chain_respects_other_limits() {
        let dependents: Vec<Affected> = (0..5).map(|i| affected(&format!("u{i}"), 1)).collect();

        assert_eq!(build_chain(dependents.clone(), 3).len(), 3);
        assert_eq!(build_chain(dependents.clone(), 0).len(), 0);
        assert_eq!(build_chain(dependents, 50).len(), 5);
    }

    #[test]
    fn default_config_matches_report_bounds() {
        let config = AnalysisConfig::default();
        assert_eq!(config.chain_limit, 10);
        assert_eq!(config.region_top_k, 5);
    }
}
