//! Undirected weighted station graph.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Edge, Station, fare};

/// Dense index of a station within one [`Graph`].
///
/// Ids are assigned in first-seen order and are only meaningful for the
/// graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// A directed adjacency record: one direction of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Neighbouring station
    pub to: StationId,
    /// Track distance (km)
    pub distance_km: f64,
    /// Travel time (minutes)
    pub time_min: f64,
    /// Fare for this edge, derived from its distance
    pub fare: f64,
}

/// An immutable station graph.
///
/// Every edge is stored in both directions with identical weights, so for
/// an edge between A and B, B appears among A's neighbours and A among B's.
/// Parallel edges between the same pair are all kept.
///
/// Graphs are never edited after construction. Reloading a network means
/// building a new `Graph` and replacing the old one.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
    index: HashMap<Station, StationId>,
    adjacency: Vec<Vec<Connection>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from a list of undirected edges.
    ///
    /// Stations are discovered from edge endpoints. The fare of each edge
    /// is computed once and shared by both directions. Weights are not
    /// validated here; see [`Edge::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::Edge;
    /// use route_server::network::Graph;
    ///
    /// let graph = Graph::build(&[Edge::new("Bugis", "Lavender", 1.1, 5.0)]);
    /// assert_eq!(graph.station_count(), 2);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn build(edges: &[Edge]) -> Self {
        Self::build_with_stations(std::iter::empty::<Station>(), edges)
    }

    /// Build a graph that also contains the given stations, even if no
    /// edge touches them.
    pub fn build_with_stations<I, S>(stations: I, edges: &[Edge]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Station>,
    {
        let mut graph = Self::default();

        for station in stations {
            graph.intern(station.into());
        }

        for edge in edges {
            graph.insert(edge);
        }

        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count,
            "Built station graph"
        );

        graph
    }

    fn intern(&mut self, station: Station) -> StationId {
        if let Some(&id) = self.index.get(&station) {
            return id;
        }
        let id = StationId(self.stations.len());
        self.index.insert(station.clone(), id);
        self.stations.push(station);
        self.adjacency.push(Vec::new());
        id
    }

    fn insert(&mut self, edge: &Edge) {
        let a = self.intern(edge.a.clone());
        let b = self.intern(edge.b.clone());
        let fare = fare(edge.distance_km);

        self.adjacency[a.0].push(Connection {
            to: b,
            distance_km: edge.distance_km,
            time_min: edge.time_min,
            fare,
        });
        self.adjacency[b.0].push(Connection {
            to: a,
            distance_km: edge.distance_km,
            time_min: edge.time_min,
            fare,
        });
        self.edge_count += 1;
    }

    /// Look up a station's id by name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.index.get(name).copied()
    }

    /// Returns true if the graph contains a station with this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the station for an id issued by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// Returns the outgoing connections of a station.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn neighbors(&self, id: StationId) -> &[Connection] {
        &self.adjacency[id.0]
    }

    /// Returns the outgoing connections of a station by name, if it exists.
    pub fn neighbors_of(&self, name: &str) -> Option<&[Connection]> {
        self.station_id(name).map(|id| self.neighbors(id))
    }

    /// Returns the shortest-distance connection from `from` to `to`, if
    /// the two stations are adjacent.
    pub fn connection_between(&self, from: StationId, to: StationId) -> Option<&Connection> {
        self.neighbors(from)
            .iter()
            .filter(|c| c.to == to)
            .min_by(|x, y| x.distance_km.total_cmp(&y.distance_km))
    }

    /// Returns the number of stations, including isolated ones.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of undirected edges, counting parallel edges
    /// separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate over all stations in id order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i), s))
    }

    /// Station names sorted alphabetically, for station pickers.
    pub fn sorted_station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stations.iter().map(Station::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::build(&[
            Edge::new("A", "B", 2.0, 5.0),
            Edge::new("B", "C", 3.0, 5.0),
            Edge::new("A", "C", 10.0, 5.0),
        ])
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.station_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.station_id("A").is_none());
    }

    #[test]
    fn stations_discovered_from_edges() {
        let graph = triangle();
        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains("A"));
        assert!(graph.contains("C"));
        assert!(!graph.contains("D"));
    }

    #[test]
    fn ids_in_first_seen_order() {
        let graph = triangle();
        assert_eq!(graph.station_id("A"), Some(StationId(0)));
        assert_eq!(graph.station_id("B"), Some(StationId(1)));
        assert_eq!(graph.station_id("C"), Some(StationId(2)));
        assert_eq!(graph.station(StationId(1)).as_str(), "B");
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = Graph::build(&[Edge::new("Bishan", "Braddell", 1.2, 5.0)]);

        let from_bishan = graph.neighbors_of("Bishan").unwrap();
        let from_braddell = graph.neighbors_of("Braddell").unwrap();

        assert_eq!(from_bishan.len(), 1);
        assert_eq!(from_braddell.len(), 1);
        assert_eq!(graph.station(from_bishan[0].to).as_str(), "Braddell");
        assert_eq!(graph.station(from_braddell[0].to).as_str(), "Bishan");
        assert_eq!(from_bishan[0].distance_km, from_braddell[0].distance_km);
        assert_eq!(from_bishan[0].time_min, from_braddell[0].time_min);
        assert_eq!(from_bishan[0].fare, from_braddell[0].fare);
    }

    #[test]
    fn fare_attached_per_edge() {
        let graph = Graph::build(&[
            Edge::new("A", "B", 1.0, 1.0),
            Edge::new("B", "C", 50.0, 1.0),
        ]);
        let b = graph.station_id("B").unwrap();
        let fares: Vec<f64> = graph.neighbors(b).iter().map(|c| c.fare).collect();
        assert_eq!(fares, vec![0.99, 2.24]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let graph = Graph::build(&[
            Edge::new("A", "B", 4.0, 5.0),
            Edge::new("A", "B", 2.0, 9.0),
        ]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors_of("A").unwrap().len(), 2);
        assert_eq!(graph.neighbors_of("B").unwrap().len(), 2);
    }

    #[test]
    fn connection_between_prefers_shortest_parallel_edge() {
        let graph = Graph::build(&[
            Edge::new("A", "B", 4.0, 5.0),
            Edge::new("A", "B", 2.0, 9.0),
        ]);
        let a = graph.station_id("A").unwrap();
        let b = graph.station_id("B").unwrap();

        let conn = graph.connection_between(a, b).unwrap();
        assert_eq!(conn.distance_km, 2.0);
        assert_eq!(conn.time_min, 9.0);
    }

    #[test]
    fn connection_between_non_adjacent() {
        let graph = Graph::build(&[Edge::new("A", "B", 1.0, 1.0), Edge::new("B", "C", 1.0, 1.0)]);
        let a = graph.station_id("A").unwrap();
        let c = graph.station_id("C").unwrap();
        assert!(graph.connection_between(a, c).is_none());
    }

    #[test]
    fn self_loop_appears_twice() {
        let graph = Graph::build(&[Edge::new("A", "A", 1.0, 1.0)]);
        assert_eq!(graph.station_count(), 1);
        assert_eq!(graph.neighbors_of("A").unwrap().len(), 2);
    }

    #[test]
    fn isolated_stations() {
        let graph = Graph::build_with_stations(["Z"], &[Edge::new("A", "B", 1.0, 1.0)]);
        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.neighbors_of("Z"), Some(&[][..]));
    }

    #[test]
    fn malformed_weights_pass_through() {
        let graph = Graph::build(&[Edge::new("A", "B", -1.0, 0.0)]);
        let conn = graph.neighbors_of("A").unwrap()[0];
        assert_eq!(conn.distance_km, -1.0);
        assert_eq!(conn.time_min, 0.0);
    }

    #[test]
    fn sorted_names() {
        let graph = Graph::build(&[Edge::new("Yishun", "Khatib", 1.4, 5.0)]);
        assert_eq!(graph.sorted_station_names(), vec!["Khatib", "Yishun"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let graph = Graph::build(&[Edge::new("Expo", "expo", 1.0, 1.0)]);
        assert_eq!(graph.station_count(), 2);
    }
}
