//! Station graph construction.
//!
//! Turns a raw edge list into an immutable adjacency structure that the
//! planner searches. Each edge is stored in both directions and carries a
//! fare derived from its distance.

mod graph;
mod sample;
mod shared;

pub use graph::{Connection, Graph, StationId};
pub use sample::sample_edges;
pub use shared::SharedGraph;

/// Build the bundled demo network.
pub fn sample_network() -> Graph {
    Graph::build(&sample_edges())
}
