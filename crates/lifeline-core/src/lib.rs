//! # Lifeline Core: Infrastructure Dependency Analysis Engine
//!
//! Lifeline models interdependent urban infrastructure (power, water,
//! telecom, transport) as a directed dependency graph and answers two
//! questions: which unit is the *root cause* of a failure - the unit whose
//! failure would affect the most other units - and what is the ordered
//! *cascade* of units transitively affected by it.
//!
//! ## Design Philosophy
//!
//! - **Engine, not service** - receives a snapshot and a query, returns plain
//!   serializable data; no storage, no rendering, no network protocol
//! - **Immutable snapshots** - queries read a fixed graph; reloads swap the
//!   whole snapshot reference atomically
//! - **Deterministic results** - identical snapshots always yield identical
//!   orderings, down to the byte
//! - **Embeddable** - library first; the CLI and dataset loaders are thin
//!   collaborators in sibling crates
//!
//! ## Quick Start
//!
//! ```
//! use lifeline_core::{
//!     AnalysisConfig, DependencyEdge, InfrastructureUnit, LocationSet, Snapshot, UnitId,
//!     UnitKind, UnitStatus,
//! };
//!
//! fn unit(id: &str, kind: UnitKind) -> InfrastructureUnit {
//!     InfrastructureUnit {
//!         id: UnitId::from(id),
//!         name: id.to_uppercase(),
//!         kind,
//!         location: "north".to_string(),
//!         department: "City Operations".to_string(),
//!         status: UnitStatus::Operational,
//!     }
//! }
//!
//! let units = vec![
//!     unit("p1", UnitKind::Power),
//!     unit("p2", UnitKind::Power),
//!     unit("s1", UnitKind::Telecom),
//! ];
//! let edges = vec![
//!     DependencyEdge::new("p2", "p1"),
//!     DependencyEdge::new("s1", "p1"),
//! ];
//! let snapshot = Snapshot::build(units, edges)?;
//!
//! let locations = LocationSet::new(["north"])?;
//! let result = snapshot.root_cause(UnitKind::Power, &locations, &AnalysisConfig::default())?;
//!
//! assert_eq!(result.root_cause.id, UnitId::from("p1"));
//! assert_eq!(result.affected_services, 2);
//! # Ok::<(), lifeline_core::Error>(())
//! ```

mod cascade;
mod domain;
mod error;
mod ranking;
mod reachability;
mod root_cause;
mod snapshot;

pub use cascade::{AnalysisConfig, build_chain};
pub use domain::{DependencyEdge, InfrastructureUnit, UnitId, UnitKind, UnitStatus};
pub use error::{Error, Result};
pub use ranking::{CriticalUnit, CriticalityRanking, RankedUnit, RegionAnalysis};
pub use reachability::Affected;
pub use root_cause::{ChainEntry, LocationSet, RootCauseResult};
pub use snapshot::{Snapshot, SnapshotStore};
