//! Common test utilities shared across integration tests.

use lifeline_core::{DependencyEdge, InfrastructureUnit, Snapshot, UnitId, UnitKind, UnitStatus};

/// Build a unit with the given identity; name is the uppercased id.
pub fn unit(id: &str, kind: UnitKind, location: &str) -> InfrastructureUnit {
    InfrastructureUnit {
        id: UnitId::from(id),
        name: id.to_uppercase(),
        kind,
        location: location.to_string(),
        department: "City Operations".to_string(),
        status: UnitStatus::Operational,
    }
}

/// Build a snapshot from compact unit and edge descriptions.
pub fn snapshot(units: &[(&str, UnitKind, &str)], edges: &[(&str, &str)]) -> Snapshot {
    Snapshot::build(
        units
            .iter()
            .map(|(id, kind, location)| unit(id, *kind, location))
            .collect(),
        edges
            .iter()
            .map(|(from, to)| DependencyEdge::new(*from, *to))
            .collect(),
    )
    .expect("test graph is valid")
}
