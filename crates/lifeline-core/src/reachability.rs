//! Transitive-dependent traversal over the dependency graph.
//!
//! Answers "if this unit fails, what else is affected?" by walking the
//! dependency edges backwards: a unit X is a transitive dependent of R when a
//! directed path X -> ... -> R exists along the requires-edges.
//!
//! The traversal is breadth-first, so each reached unit is recorded at its
//! *minimum* hop distance from the root. A visited set guarantees every unit
//! appears at most once, which also makes traversal over cyclic graphs
//! terminate without double-counting.

use crate::domain::UnitId;
use crate::snapshot::Snapshot;
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// A unit reached by transitive-dependent traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affected {
    /// The reached unit
    pub id: UnitId,
    /// Minimum number of dependency hops from the failed root (1 = direct)
    pub depth: u32,
}

impl Snapshot {
    /// Find every unit that transitively depends on `root`, with its minimum
    /// path depth.
    ///
    /// Direct dependents are reported at depth 1. The root itself is never
    /// included. The result is unbounded; callers decide whether to cap it.
    ///
    /// Ordering is deterministic: results appear in breadth-first discovery
    /// order, and the dependents of each unit are visited in ascending
    /// `UnitId` order, so identical snapshots always produce identical
    /// sequences.
    ///
    /// An unknown `root` yields an empty result; public query paths only pass
    /// ids taken from the snapshot itself.
    #[must_use]
    pub fn transitive_dependents(&self, root: &UnitId) -> Vec<Affected> {
        let Some(start) = self.node(root) else {
            return Vec::new();
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        visited.insert(start);

        let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::new();
        queue.push_back((start, 0));

        let mut result = Vec::new();

        while let Some((node, depth)) = queue.pop_front() {
            // Incoming edges lead to the units that require this one
            let mut dependents: Vec<NodeIndex> = self
                .graph()
                .neighbors_directed(node, Direction::Incoming)
                .collect();

            // Fixed neighbor order keeps same-depth discovery reproducible
            dependents.sort_by(|a, b| self.id_of(*a).cmp(self.id_of(*b)));

            for dependent in dependents {
                if visited.insert(dependent) {
                    queue.push_back((dependent, depth + 1));
                    result.push(Affected {
                        id: self.id_of(dependent).clone(),
                        depth: depth + 1,
                    });
                }
            }
        }

        debug!(root = %root, reached = result.len(), "Transitive-dependent traversal completed");

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyEdge, InfrastructureUnit, UnitKind, UnitStatus};

    fn unit(id: &str) -> InfrastructureUnit {
        InfrastructureUnit {
            id: UnitId::from(id),
            name: id.to_uppercase(),
            kind: UnitKind::Power,
            location: "north".to_string(),
            department: "ops".to_string(),
            status: UnitStatus::Operational,
        }
    }

    fn snapshot(ids: &[&str], edges: &[(&str, &str)]) -> Snapshot {
        Snapshot::build(
            ids.iter().map(|id| unit(id)).collect(),
            edges
                .iter()
                .map(|(from, to)| DependencyEdge::new(*from, *to))
                .collect(),
        )
        .expect("graph is valid")
    }

    fn reached(snapshot: &Snapshot, root: &str) -> Vec<(String, u32)> {
        snapshot
            .transitive_dependents(&UnitId::from(root))
            .into_iter()
            .map(|a| (a.id.0, a.depth))
            .collect()
    }

    #[test]
    fn chain_reports_each_hop_at_its_distance() {
        // a -> b -> c: a requires b, b requires c
        let snapshot = snapshot(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        assert_eq!(
            reached(&snapshot, "c"),
            vec![("b".to_string(), 1), ("a".to_string(), 2)]
        );
    }

    #[test]
    fn depth_is_minimum_over_multiple_paths() {
        // x reaches the root both directly and via y; depth must be 1
        let snapshot = snapshot(
            &["root", "x", "y"],
            &[("x", "root"), ("x", "y"), ("y", "root")],
        );

        let result = reached(&snapshot, "root");
        assert!(result.contains(&("x".to_string(), 1)));
        assert!(result.contains(&("y".to_string(), 1)));
    }

    #[test]
    fn cycle_terminates_and_visits_each_unit_once() {
        // 3-cycle a -> b -> c -> a with an external dependent d -> a
        let snapshot = snapshot(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")],
        );

        let result = reached(&snapshot, "a");
        assert_eq!(
            result,
            vec![
                ("c".to_string(), 1),
                ("d".to_string(), 1),
                ("b".to_string(), 2),
            ]
        );
    }

    #[test]
    fn root_is_never_included() {
        let snapshot = snapshot(&["a", "b"], &[("a", "b"), ("b", "a")]);

        let result = reached(&snapshot, "a");
        assert!(result.iter().all(|(id, _)| id != "a"));
    }

    #[test]
    fn unknown_root_yields_empty_result() {
        let snapshot = snapshot(&["a"], &[]);

        assert!(snapshot
            .transitive_dependents(&UnitId::from("ghost"))
            .is_empty());
    }

    #[test]
    fn same_depth_units_appear_in_ascending_id_order() {
        let snapshot = snapshot(
            &["hub", "z", "m", "a"],
            &[("z", "hub"), ("m", "hub"), ("a", "hub")],
        );

        assert_eq!(
            reached(&snapshot, "hub"),
            vec![
                ("a".to_string(), 1),
                ("m".to_string(), 1),
                ("z".to_string(), 1),
            ]
        );
    }
}
