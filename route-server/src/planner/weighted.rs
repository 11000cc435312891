//! Weighted shortest-path search.
//!
//! Single-source Dijkstra with a linear scan for the next station to
//! settle. Networks are small (hundreds of stations), so the O(V²) scan
//! keeps the search simple and its tie-breaking predictable: among equal
//! tentative costs, the station with the lowest id is settled first.

use tracing::trace;

use crate::network::{Connection, Graph, StationId};

/// Predecessor link: the station we came from and the connection used.
type Predecessor = (StationId, Connection);

/// Outcome of a weighted search.
pub struct WeightedPath {
    /// Stations and connections in travel order: `(from, connection)`.
    pub steps: Vec<(StationId, Connection)>,
    /// Number of stations settled before the search stopped.
    pub settled: usize,
}

/// Find the cheapest path from `start` to `end` under `cost`.
///
/// Returns `None` if `end` is unreachable. `start == end` yields an empty
/// path. Costs are assumed non-negative; negative costs do not break
/// termination but the result is then not guaranteed optimal.
pub fn shortest_path<F>(
    graph: &Graph,
    start: StationId,
    end: StationId,
    cost: F,
) -> Option<WeightedPath>
where
    F: Fn(&Connection) -> f64,
{
    let n = graph.station_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<Predecessor>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut settled_count = 0;

    dist[start.0] = 0.0;

    loop {
        let Some(current) = next_unsettled(&dist, &settled) else {
            break;
        };
        if current == end {
            break;
        }

        settled[current.0] = true;
        settled_count += 1;

        for conn in graph.neighbors(current) {
            if settled[conn.to.0] {
                continue;
            }
            let alt = dist[current.0] + cost(conn);
            if alt < dist[conn.to.0] {
                dist[conn.to.0] = alt;
                prev[conn.to.0] = Some((current, *conn));
            }
        }
    }

    if dist[end.0] == f64::INFINITY {
        trace!(settled = settled_count, "Destination unreachable");
        return None;
    }

    let mut steps = Vec::new();
    let mut cursor = end;
    while cursor != start {
        let Some((from, conn)) = prev[cursor.0] else {
            break;
        };
        steps.push((from, conn));
        cursor = from;
    }
    steps.reverse();

    Some(WeightedPath {
        steps,
        settled: settled_count,
    })
}

/// The unsettled station with the smallest finite tentative cost.
///
/// Returns `None` when every reachable station is settled.
fn next_unsettled(dist: &[f64], settled: &[bool]) -> Option<StationId> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (&d, &done)) in dist.iter().zip(settled).enumerate() {
        if done || d == f64::INFINITY {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| StationId(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Edge;

    fn distance(conn: &Connection) -> f64 {
        conn.distance_km
    }

    fn ids(graph: &Graph, path: &WeightedPath, end: StationId) -> Vec<String> {
        let mut names: Vec<String> = path
            .steps
            .iter()
            .map(|(from, _)| graph.station(*from).to_string())
            .collect();
        names.push(graph.station(end).to_string());
        names
    }

    #[test]
    fn picks_cheaper_two_hop_path() {
        let graph = Graph::build(&[
            Edge::new("A", "B", 2.0, 5.0),
            Edge::new("B", "C", 3.0, 5.0),
            Edge::new("A", "C", 10.0, 5.0),
        ]);
        let a = graph.station_id("A").unwrap();
        let c = graph.station_id("C").unwrap();

        let path = shortest_path(&graph, a, c, distance).unwrap();
        assert_eq!(ids(&graph, &path, c), vec!["A", "B", "C"]);
    }

    #[test]
    fn start_equals_end_is_empty() {
        let graph = Graph::build(&[Edge::new("A", "B", 1.0, 1.0)]);
        let a = graph.station_id("A").unwrap();
        let path = shortest_path(&graph, a, a, distance).unwrap();
        assert!(path.steps.is_empty());
        assert_eq!(path.settled, 0);
    }

    #[test]
    fn unreachable_is_none() {
        let graph = Graph::build(&[Edge::new("A", "B", 1.0, 1.0), Edge::new("C", "D", 1.0, 1.0)]);
        let a = graph.station_id("A").unwrap();
        let d = graph.station_id("D").unwrap();
        assert!(shortest_path(&graph, a, d, distance).is_none());
    }

    #[test]
    fn uses_cheapest_parallel_edge() {
        let graph = Graph::build(&[Edge::new("A", "B", 5.0, 1.0), Edge::new("A", "B", 3.0, 9.0)]);
        let a = graph.station_id("A").unwrap();
        let b = graph.station_id("B").unwrap();

        let path = shortest_path(&graph, a, b, distance).unwrap();
        assert_eq!(path.steps.len(), 1);
        assert_eq!(path.steps[0].1.distance_km, 3.0);
        assert_eq!(path.steps[0].1.time_min, 9.0);
    }

    #[test]
    fn stops_once_destination_is_selected() {
        // A-B is cheap, the long tail beyond C is never needed
        let graph = Graph::build(&[
            Edge::new("A", "B", 1.0, 1.0),
            Edge::new("B", "C", 1.0, 1.0),
            Edge::new("C", "D", 100.0, 1.0),
            Edge::new("D", "E", 100.0, 1.0),
        ]);
        let a = graph.station_id("A").unwrap();
        let b = graph.station_id("B").unwrap();

        let path = shortest_path(&graph, a, b, distance).unwrap();
        assert_eq!(path.steps.len(), 1);
        assert_eq!(path.settled, 1);
    }

    #[test]
    fn ties_settle_lowest_id_first() {
        // Two equal-cost routes A-B-D and A-C-D. B has the lower id, so D is
        // first relaxed from B and the later equal cost via C does not replace it.
        let graph = Graph::build(&[
            Edge::new("A", "B", 1.0, 1.0),
            Edge::new("A", "C", 1.0, 1.0),
            Edge::new("B", "D", 1.0, 1.0),
            Edge::new("C", "D", 1.0, 1.0),
        ]);
        let a = graph.station_id("A").unwrap();
        let d = graph.station_id("D").unwrap();

        let path = shortest_path(&graph, a, d, distance).unwrap();
        assert_eq!(ids(&graph, &path, d), vec!["A", "B", "D"]);
    }

    #[test]
    fn next_unsettled_skips_settled_and_unreached() {
        let dist = [0.0, f64::INFINITY, 2.0, 1.0];
        let settled = [true, false, false, false];
        assert_eq!(next_unsettled(&dist, &settled), Some(StationId(3)));

        let all_done = [true, false, true, true];
        assert_eq!(next_unsettled(&dist, &all_done), None);
    }
}
