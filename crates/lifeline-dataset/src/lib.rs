//! Resilient JSONL dataset loading for lifeline infrastructure graphs.
//!
//! This crate is the data-loading collaborator of `lifeline-core`: it reads
//! unit and edge lists from JSONL files and produces the flat lists (or a
//! ready-built snapshot) the engine consumes, collecting non-fatal problems
//! as warnings along the way.

pub mod error;
pub mod loader;
pub mod reader;
pub mod warning;

pub use error::{Error, Result};
pub use loader::{EDGES_FILE, UNITS_FILE, load_dataset, load_edges, load_snapshot, load_units};
pub use reader::JsonlReader;
pub use warning::LoadWarning;
