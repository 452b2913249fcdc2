//! Immutable graph snapshots and the shared snapshot store.
//!
//! A [`Snapshot`] is the unit of work for every query: a fixed unit map plus
//! the full dependency edge set, indexed for traversal in both directions.
//! Snapshots are built once per ingestion and read-only for the lifetime of
//! all queries against them; "updating" the graph means building a new
//! snapshot and swapping the whole reference via [`SnapshotStore`].
//!
//! # Graph Representation and Edge Direction Convention
//!
//! The dependency graph uses petgraph's `DiGraph` with edges directed from
//! **dependent to dependency**:
//!
//! - **Edge source**: the unit that requires something (the dependent)
//! - **Edge target**: the unit being required (the dependency)
//!
//! So "which units depend on X" is answered by following edges *incoming*
//! to X, and "what does X require" by following edges *outgoing* from X.
//! A `HashMap<UnitId, NodeIndex>` maps unit ids to graph nodes for O(1)
//! lookups. Duplicate edges are collapsed at build time so direct-dependent
//! counts are counts of distinct edges.
//!
//! # Thread Safety
//!
//! `Snapshot` is `Send + Sync` and contains no interior mutability; queries
//! against a shared `Arc<Snapshot>` can run fully in parallel without locks.
//! The only mutable shared state in the engine is the current-snapshot
//! reference inside [`SnapshotStore`].

use crate::domain::{DependencyEdge, InfrastructureUnit, UnitId};
use crate::error::{Error, Result};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// An immutable, fully-indexed copy of the unit/edge graph.
#[derive(Debug)]
pub struct Snapshot {
    /// Units indexed by ID for O(1) lookups
    units: HashMap<UnitId, InfrastructureUnit>,

    /// Dependency graph: nodes carry `UnitId`, edge direction is
    /// dependent -> dependency
    graph: DiGraph<UnitId, ()>,

    /// Mapping from unit ID to graph node. Every unit in `units` has a
    /// corresponding entry.
    node_map: HashMap<UnitId, NodeIndex>,
}

impl Snapshot {
    /// Build a snapshot from flat unit and edge lists.
    ///
    /// Runs in time linear in the number of units and edges. Duplicate edges
    /// are collapsed; duplicate unit ids keep the last occurrence (dataset
    /// loaders are expected to have resolved duplicates already).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if an edge references a unit id that
    /// is not present in `units`.
    pub fn build(units: Vec<InfrastructureUnit>, edges: Vec<DependencyEdge>) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::with_capacity(units.len());
        let mut unit_map = HashMap::with_capacity(units.len());

        for unit in units {
            let node = graph.add_node(unit.id.clone());
            node_map.insert(unit.id.clone(), node);
            unit_map.insert(unit.id.clone(), unit);
        }

        let mut seen = HashSet::with_capacity(edges.len());
        for edge in edges {
            let Some(&from) = node_map.get(&edge.from) else {
                return Err(Error::InvalidGraph {
                    missing: edge.from.clone(),
                    from: edge.from,
                    to: edge.to,
                });
            };
            let Some(&to) = node_map.get(&edge.to) else {
                return Err(Error::InvalidGraph {
                    missing: edge.to.clone(),
                    from: edge.from,
                    to: edge.to,
                });
            };

            // Collapse duplicates so direct-dependent counts stay distinct
            if seen.insert((from, to)) {
                graph.add_edge(from, to, ());
            }
        }

        debug!(
            units = unit_map.len(),
            edges = graph.edge_count(),
            "Snapshot built"
        );

        Ok(Self {
            units: unit_map,
            graph,
            node_map,
        })
    }

    /// Number of units in the snapshot.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of distinct dependency edges in the snapshot.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a unit by ID.
    #[must_use]
    pub fn get(&self, id: &UnitId) -> Option<&InfrastructureUnit> {
        self.units.get(id)
    }

    /// Iterate over all units, in no particular order.
    pub fn units(&self) -> impl Iterator<Item = &InfrastructureUnit> {
        self.units.values()
    }

    /// Number of distinct units that directly depend on the given unit.
    #[must_use]
    pub fn direct_dependent_count(&self, id: &UnitId) -> usize {
        self.node_map.get(id).map_or(0, |&node| {
            self.graph
                .neighbors_directed(node, Direction::Incoming)
                .count()
        })
    }

    pub(crate) fn node(&self, id: &UnitId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(crate) fn graph(&self) -> &DiGraph<UnitId, ()> {
        &self.graph
    }

    pub(crate) fn id_of(&self, node: NodeIndex) -> &UnitId {
        &self.graph[node]
    }
}

/// Atomically-swapped reference to the current snapshot.
///
/// Designed for a request-serving context: many concurrent readers call
/// [`SnapshotStore::load`] and run queries against the `Arc<Snapshot>` they
/// received, while a data reload calls [`SnapshotStore::replace`] with a
/// freshly built snapshot. In-flight queries keep the snapshot they started
/// with; there is never a partially-updated graph.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Create a store holding the given initial snapshot.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Get the current snapshot.
    ///
    /// Cheap: clones the `Arc`, not the graph. The returned snapshot remains
    /// valid even if the store is swapped afterwards.
    #[must_use]
    pub fn load(&self) -> Arc<Snapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            // A poisoned lock still holds a fully-built snapshot; recover it.
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the current snapshot, returning the previous one.
    pub fn replace(&self, next: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(next);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UnitKind, UnitStatus};

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

    #[test]
    fn build_indexes_all_units_and_edges() {
        let snapshot = Snapshot::build(
            vec![unit("a"), unit("b"), unit("c")],
            vec![DependencyEdge::new("a", "b"), DependencyEdge::new("b", "c")],
        )
        .expect("graph is valid");

        assert_eq!(snapshot.unit_count(), 3);
        assert_eq!(snapshot.edge_count(), 2);
        assert!(snapshot.get(&UnitId::from("b")).is_some());
        assert!(snapshot.get(&UnitId::from("z")).is_none());
    }

    #[test]
    fn build_fails_when_edge_references_unknown_unit() {
        let result = Snapshot::build(vec![unit("a")], vec![DependencyEdge::new("a", "ghost")]);

        assert_eq!(
            result.err(),
            Some(Error::InvalidGraph {
                from: UnitId::from("a"),
                to: UnitId::from("ghost"),
                missing: UnitId::from("ghost"),
            })
        );
    }

    #[test]
    fn build_collapses_duplicate_edges() {
        let snapshot = Snapshot::build(
            vec![unit("a"), unit("b")],
            vec![
                DependencyEdge::new("a", "b"),
                DependencyEdge::new("a", "b"),
                DependencyEdge::new("a", "b"),
            ],
        )
        .expect("graph is valid");

        assert_eq!(snapshot.edge_count(), 1);
        assert_eq!(snapshot.direct_dependent_count(&UnitId::from("b")), 1);
    }

    #[test]
    fn direct_dependent_count_counts_incoming_edges_only() {
        let snapshot = Snapshot::build(
            vec![unit("a"), unit("b"), unit("c")],
            vec![DependencyEdge::new("a", "c"), DependencyEdge::new("b", "c")],
        )
        .expect("graph is valid");

        assert_eq!(snapshot.direct_dependent_count(&UnitId::from("c")), 2);
        assert_eq!(snapshot.direct_dependent_count(&UnitId::from("a")), 0);
    }

    #[test]
    fn store_replace_swaps_whole_snapshot() {
        let store = SnapshotStore::new(
            Snapshot::build(vec![unit("a")], vec![]).expect("graph is valid"),
        );
        let before = store.load();

        let previous = store.replace(
            Snapshot::build(vec![unit("a"), unit("b")], vec![]).expect("graph is valid"),
        );

        // The reader that loaded before the swap still sees the old graph
        assert_eq!(before.unit_count(), 1);
        assert_eq!(previous.unit_count(), 1);
        assert_eq!(store.load().unit_count(), 2);
    }
}
