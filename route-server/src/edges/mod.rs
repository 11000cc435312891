//! Edge list loading.
//!
//! Reads the tabular edge format the planner is fed from: one undirected
//! edge per row as `station A, station B, distance km, time min`.

mod error;
mod loader;

pub use error::EdgeListError;
pub use loader::{load_edges, parse_edges, parse_edges_str};
