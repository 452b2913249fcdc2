//! Error types for engine operations.
//!
//! The engine validates inputs at the entry of each public operation and
//! fails fast with a typed error; traversal and ranking are pure computations
//! over a valid snapshot and never fail afterwards. There is no partial or
//! degraded result mode.

use crate::domain::{UnitId, UnitKind};
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for snapshot construction and query operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge references a unit id that is not part of the snapshot.
    ///
    /// Raised during snapshot construction; fatal to that build attempt.
    #[error("invalid graph: edge {from} -> {to} references unknown unit {missing}")]
    InvalidGraph {
        /// Dependent end of the offending edge
        from: UnitId,
        /// Depended-upon end of the offending edge
        to: UnitId,
        /// The endpoint that has no matching unit
        missing: UnitId,
    },

    /// No unit matched the requested kind and location set.
    ///
    /// Recoverable: carries the attempted query so the caller can render a
    /// helpful message.
    #[error("no {kind} unit found in locations [{}]", .locations.join(", "))]
    NotFound {
        /// The requested unit kind
        kind: UnitKind,
        /// The locations that were searched
        locations: Vec<String>,
    },

    /// The locations parameter contained no usable location names.
    #[error("location set is empty")]
    EmptyLocationSet,
}
