//! Domain types for infrastructure failure analysis.
//!
//! This module contains the core domain model:
//! - **Identity**: [`UnitId`]
//! - **Classification**: [`UnitKind`], [`UnitStatus`]
//! - **Entities**: [`InfrastructureUnit`], [`DependencyEdge`]
//!
//! All types are serde-derived so query results built from them can be
//! serialized by a request layer without any adapter code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an infrastructure unit.
///
/// Ordered so that ranking ties and traversal order can fall back to a
/// stable, reproducible key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub String);

impl UnitId {
    /// Create a new unit ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of infrastructure a unit provides.
///
/// Adding a new kind is a single new variant plus its `as_str`/`parse` arms;
/// the analysis engine never matches exhaustively on specific kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Electrical generation and distribution
    Power,
    /// Water treatment and supply
    Water,
    /// Telecommunications and data services
    Telecom,
    /// Roads, rail, and transit systems
    Transport,
}

impl UnitKind {
    /// Parse a kind from its lowercase name.
    ///
    /// # Returns
    ///
    /// `None` if the name is not a known kind.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "power" => Some(Self::Power),
            "water" => Some(Self::Water),
            "telecom" => Some(Self::Telecom),
            "transport" => Some(Self::Transport),
            _ => None,
        }
    }

    /// Convert to the canonical string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Water => "water",
            Self::Telecom => "telecom",
            Self::Transport => "transport",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operational status of a unit.
///
/// Informational only: the traversal and ranking algorithms never consult
/// status. It is carried through snapshots so the request layer can render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    /// Unit is fully operational
    Operational,
    /// Unit is running with reduced capacity
    Degraded,
    /// Unit has failed
    Failed,
}

impl UnitStatus {
    /// Convert to the canonical string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
        }
    }
}

/// A single piece of infrastructure: a substation, a pumping station,
/// a switching center, a depot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfrastructureUnit {
    /// Unique identifier for the unit
    pub id: UnitId,

    /// Display name
    pub name: String,

    /// What kind of infrastructure this is
    pub kind: UnitKind,

    /// Place name of the unit's location
    pub location: String,

    /// Operational body responsible for the unit
    pub department: String,

    /// Current operational status
    pub status: UnitStatus,
}

/// A directed dependency between two units.
///
/// `from -> to` means *from requires to to be operational*; equivalently,
/// a failure of `to` can propagate to `from`. The edge set may contain
/// cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The dependent unit
    pub from: UnitId,

    /// The unit being depended upon
    pub to: UnitId,
}

impl DependencyEdge {
    /// Create a new dependency edge.
    pub fn new(from: impl Into<UnitId>, to: impl Into<UnitId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::power("power", UnitKind::Power)]
    #[case::water("water", UnitKind::Water)]
    #[case::telecom("telecom", UnitKind::Telecom)]
    #[case::transport("transport", UnitKind::Transport)]
    #[case::mixed_case("Power", UnitKind::Power)]
    #[case::padded(" water ", UnitKind::Water)]
    fn unit_kind_parse_recognizes_known_kinds(#[case] input: &str, #[case] expected: UnitKind) {
        assert_eq!(UnitKind::parse(input), Some(expected));
    }

    #[rstest]
    #[case::unknown("gas")]
    #[case::empty("")]
    #[case::garbage("p0wer")]
    fn unit_kind_parse_rejects_unknown_kinds(#[case] input: &str) {
        assert_eq!(UnitKind::parse(input), None);
    }

    #[test]
    fn unit_kind_round_trips_through_as_str() {
        for kind in [
            UnitKind::Power,
            UnitKind::Water,
            UnitKind::Telecom,
            UnitKind::Transport,
        ] {
            assert_eq!(UnitKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unit_id_orders_lexicographically() {
        assert!(UnitId::from("p1") < UnitId::from("p2"));
        assert!(UnitId::from("a9") < UnitId::from("b1"));
    }

    #[test]
    fn unit_serializes_with_lowercase_kind_and_status() {
        let unit = InfrastructureUnit {
            id: UnitId::from("p1"),
            name: "North Substation".to_string(),
            kind: UnitKind::Power,
            location: "north".to_string(),
            department: "City Power Authority".to_string(),
            status: UnitStatus::Operational,
        };

        let json = serde_json::to_string(&unit).expect("serialization should succeed");
        assert!(json.contains("\"kind\":\"power\""));
        assert!(json.contains("\"status\":\"operational\""));
    }
}
