//! Warning types for non-fatal problems during dataset loading.
//!
//! Dataset files come from exports and hand-maintained inventories, so a
//! single bad line should not prevent loading the rest. Non-fatal problems
//! are collected as [`LoadWarning`] values and returned alongside the loaded
//! data; callers decide whether to log, display, or ignore them.

use lifeline_core::UnitId;
use std::fmt;

/// A non-fatal problem encountered while loading a dataset.
///
/// Each variant records enough context to locate the problem in the source
/// files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A line contained malformed JSON and was skipped.
    MalformedJson {
        /// The 1-based line number where the error occurred
        line_number: usize,
        /// A description of the JSON parsing error
        error: String,
    },

    /// A unit id appeared more than once; the first occurrence wins.
    DuplicateUnit {
        /// The duplicated unit id
        id: UnitId,
        /// The 1-based line number of the discarded occurrence
        line_number: usize,
    },

    /// An edge references a unit id not present in the unit file; the edge
    /// is dropped.
    UnknownEndpoint {
        /// Dependent end of the dropped edge
        from: UnitId,
        /// Depended-upon end of the dropped edge
        to: UnitId,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "skipped malformed JSON at line {line_number}: {error}")
            }
            Self::DuplicateUnit { id, line_number } => {
                write!(f, "discarded duplicate unit {id} at line {line_number}")
            }
            Self::UnknownEndpoint { from, to } => {
                write!(f, "dropped edge {from} -> {to}: endpoint not in unit set")
            }
        }
    }
}
