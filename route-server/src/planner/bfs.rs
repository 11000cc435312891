//! Fewest-stops search.
//!
//! Breadth-first search over the station graph, ignoring weights. The
//! first time the destination is dequeued we have a path with the minimum
//! number of hops.

use std::collections::VecDeque;

use tracing::trace;

use crate::network::{Graph, StationId};

/// Outcome of a fewest-stops search.
pub struct StopsPath {
    /// Stations in travel order, both ends included.
    pub stations: Vec<StationId>,
    /// Number of stations dequeued before the destination was reached.
    pub explored: usize,
}

/// Find a path from `start` to `end` with the fewest hops.
///
/// Returns `None` if `end` is unreachable. `start == end` yields the
/// single-station path `[start]`. Among equal-length paths, the one whose
/// stations were discovered first (adjacency order) wins.
pub fn fewest_stops(graph: &Graph, start: StationId, end: StationId) -> Option<StopsPath> {
    let n = graph.station_count();
    let mut parent: Vec<Option<StationId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut explored = 0;

    visited[start.0] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        explored += 1;

        if current == end {
            let mut stations = vec![end];
            let mut cursor = end;
            while let Some(p) = parent[cursor.0] {
                stations.push(p);
                cursor = p;
            }
            stations.reverse();
            return Some(StopsPath { stations, explored });
        }

        for conn in graph.neighbors(current) {
            if !visited[conn.to.0] {
                visited[conn.to.0] = true;
                parent[conn.to.0] = Some(current);
                queue.push_back(conn.to);
            }
        }
    }

    trace!(explored, "Frontier exhausted without reaching destination");
    None
}
