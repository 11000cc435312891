//! Route search entry point.
//!
//! Validates the request against the graph, dispatches to the weighted or
//! fewest-stops search according to the cost mode, and turns the found
//! path into a [`RouteResult`].

use tracing::debug;

use crate::domain::{CostMode, Hop, RouteResult, Station};
use crate::network::{Graph, StationId};

use super::bfs::fewest_stops;
use super::config::PlannerConfig;
use super::cost::edge_cost;
use super::weighted::shortest_path;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Start or end station is not in the graph
    #[error("station not found: {0}")]
    UnknownStation(Station),

    /// Both stations exist but are not connected
    #[error("no path found from {from} to {to}")]
    NoPathExists { from: Station, to: Station },
}

/// Request for a route between two stations.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Station to start from.
    pub from: Station,

    /// Station to reach.
    pub to: Station,

    /// What to minimise.
    pub mode: CostMode,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(from: impl Into<Station>, to: impl Into<Station>, mode: CostMode) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            mode,
        }
    }

    /// Resolve both stations in `graph`.
    ///
    /// The start station is checked first, so if both are unknown the
    /// error names the start.
    fn resolve(&self, graph: &Graph) -> Result<(StationId, StationId), PathError> {
        let lookup = |station: &Station| {
            graph
                .station_id(station.as_str())
                .ok_or_else(|| PathError::UnknownStation(station.clone()))
        };
        Ok((lookup(&self.from)?, lookup(&self.to)?))
    }
}

/// Route planner over one immutable graph.
///
/// Holds only shared references, so any number of planners can search the
/// same graph concurrently.
pub struct Planner<'a> {
    graph: &'a Graph,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Find a route for the request.
    ///
    /// # Errors
    ///
    /// - [`PathError::UnknownStation`] if either station is not in the graph
    /// - [`PathError::NoPathExists`] if the stations are not connected
    pub fn search(&self, request: &RouteRequest) -> Result<RouteResult, PathError> {
        let (start, end) = request.resolve(self.graph)?;

        if start == end {
            return Ok(RouteResult::empty(request.mode));
        }

        let result = match request.mode {
            CostMode::FewestStops => self.search_fewest_stops(request, start, end),
            mode => self.search_weighted(request, mode, start, end),
        };

        match &result {
            Ok(route) => debug!(
                from = %request.from,
                to = %request.to,
                mode = %request.mode,
                hops = route.hop_count(),
                distance_km = route.total_distance_km(),
                time_min = route.total_time_min(),
                "Route found"
            ),
            Err(e) => debug!(
                from = %request.from,
                to = %request.to,
                mode = %request.mode,
                error = %e,
                "Route search failed"
            ),
        }

        result
    }

    fn search_weighted(
        &self,
        request: &RouteRequest,
        mode: CostMode,
        start: StationId,
        end: StationId,
    ) -> Result<RouteResult, PathError> {
        let path = shortest_path(self.graph, start, end, |conn| {
            edge_cost(mode, self.config, conn)
        })
        .ok_or_else(|| no_path(request))?;

        debug!(settled = path.settled, "Weighted search complete");

        let hops = path
            .steps
            .iter()
            .map(|(from, conn)| {
                Hop::new(
                    self.graph.station(*from).clone(),
                    self.graph.station(conn.to).clone(),
                    conn.distance_km,
                    conn.time_min,
                    conn.fare,
                )
            })
            .collect();

        Ok(RouteResult::from_hops(mode, hops))
    }

    /// Fewest-stops hops carry the real weights of the connection between
    /// each consecutive pair (the shortest one if there are parallel edges),
    /// so totals reflect actual distance, time and fare.
    fn search_fewest_stops(
        &self,
        request: &RouteRequest,
        start: StationId,
        end: StationId,
    ) -> Result<RouteResult, PathError> {
        let path = fewest_stops(self.graph, start, end).ok_or_else(|| no_path(request))?;

        debug!(explored = path.explored, "Fewest-stops search complete");

        let mut hops = Vec::with_capacity(path.stations.len().saturating_sub(1));
        for pair in path.stations.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            // BFS only steps along existing connections
            let Some(conn) = self.graph.connection_between(from, to) else {
                return Err(no_path(request));
            };
            hops.push(Hop::new(
                self.graph.station(from).clone(),
                self.graph.station(to).clone(),
                conn.distance_km,
                conn.time_min,
                conn.fare,
            ));
        }

        Ok(RouteResult::from_hops(CostMode::FewestStops, hops))
    }
}

fn no_path(request: &RouteRequest) -> PathError {
    PathError::NoPathExists {
        from: request.from.clone(),
        to: request.to.clone(),
    }
}

/// Find a route from `from` to `to` in `graph`.
///
/// Convenience wrapper around [`Planner::search`].
///
/// # Examples
///
/// ```
/// use route_server::domain::{CostMode, Edge};
/// use route_server::network::Graph;
/// use route_server::planner::{PlannerConfig, find_route};
///
/// let graph = Graph::build(&[
///     Edge::new("A", "B", 2.0, 5.0),
///     Edge::new("B", "C", 3.0, 5.0),
///     Edge::new("A", "C", 10.0, 5.0),
/// ]);
/// let config = PlannerConfig::default();
///
/// let route = find_route(&graph, "A", "C", CostMode::Distance, &config).unwrap();
/// assert_eq!(route.to_string(), "A → B → C");
/// assert_eq!(route.total_distance_km(), 5.0);
/// ```
pub fn find_route(
    graph: &Graph,
    from: &str,
    to: &str,
    mode: CostMode,
    config: &PlannerConfig,
) -> Result<RouteResult, PathError> {
    Planner::new(graph, config).search(&RouteRequest::new(from, to, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::UnknownStation(Station::new("Atlantis"));
        assert_eq!(err.to_string(), "station not found: Atlantis");

        let err = PathError::NoPathExists {
            from: Station::new("A"),
            to: Station::new("Z"),
        };
        assert_eq!(err.to_string(), "no path found from A to Z");
    }

    #[test]
    fn request_new() {
        let request = RouteRequest::new("Bishan", "Novena", CostMode::Time);
        assert_eq!(request.from, Station::new("Bishan"));
        assert_eq!(request.to, Station::new("Novena"));
        assert_eq!(request.mode, CostMode::Time);
    }
}
