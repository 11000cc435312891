//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CostMode, Hop, RouteResult};
use crate::network::Graph;

/// Query for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Start station name (exact match)
    pub from: String,

    /// Destination station name (exact match)
    pub to: String,

    /// Cost mode name (defaults to distance)
    pub mode: Option<String>,

    /// Balanced-mode distance share, overriding the server default
    pub blend: Option<f64>,
}

/// A hop in a route.
#[derive(Debug, Serialize)]
pub struct HopResult {
    /// Departing station
    pub from: String,

    /// Arriving station
    pub to: String,

    /// Distance in kilometres
    pub distance_km: f64,

    /// Travel time in minutes
    pub time_min: f64,

    /// Fare for this hop
    pub fare: f64,
}

/// Totals formatted for display.
#[derive(Debug, Serialize, PartialEq)]
pub struct RouteSummary {
    /// Whole minutes, e.g. "25 min"
    pub time: String,

    /// One decimal place, e.g. "6.0 km"
    pub distance: String,

    /// Two decimal places, e.g. "$4.95"
    pub fare: String,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Mode the route was searched with
    pub mode: CostMode,

    /// Station sequence joined with arrows
    pub route: String,

    /// Hops in travel order
    pub hops: Vec<HopResult>,

    /// Total distance in kilometres
    pub total_distance_km: f64,

    /// Total time in minutes
    pub total_time_min: f64,

    /// Total fare
    pub total_fare: f64,

    /// Totals formatted for display
    pub summary: RouteSummary,
}

/// Response listing the stations of the current network.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Station names, sorted
    pub stations: Vec<String>,

    /// Number of undirected edges
    pub edge_count: usize,
}

/// Response after publishing a network.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    /// Number of stations in the new network
    pub stations: usize,

    /// Number of edges in the new network
    pub edges: usize,
}

/// Available cost modes.
#[derive(Debug, Serialize)]
pub struct ModesResponse {
    /// Mode names accepted by the route endpoint
    pub modes: Vec<CostMode>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error category, stable for clients to match on
    pub kind: &'static str,

    /// Error message
    pub error: String,
}

// Conversion implementations

impl HopResult {
    /// Create from a domain Hop.
    pub fn from_hop(hop: &Hop) -> Self {
        Self {
            from: hop.from.to_string(),
            to: hop.to.to_string(),
            distance_km: hop.distance_km,
            time_min: hop.time_min,
            fare: hop.fare,
        }
    }
}

impl RouteSummary {
    /// Format a route's totals.
    pub fn from_route(route: &RouteResult) -> Self {
        Self {
            time: format!("{:.0} min", route.total_time_min()),
            distance: format!("{:.1} km", route.total_distance_km()),
            fare: format!("${:.2}", route.total_fare()),
        }
    }
}

impl RouteResponse {
    /// Create from a domain RouteResult.
    pub fn from_route(route: &RouteResult) -> Self {
        Self {
            mode: route.mode(),
            route: route.to_string(),
            hops: route.hops().iter().map(HopResult::from_hop).collect(),
            total_distance_km: route.total_distance_km(),
            total_time_min: route.total_time_min(),
            total_fare: route.total_fare(),
            summary: RouteSummary::from_route(route),
        }
    }
}

impl StationsResponse {
    /// List the stations of a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            stations: graph
                .sorted_station_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            edge_count: graph.edge_count(),
        }
    }
}

impl NetworkResponse {
    /// Describe a graph's size.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            stations: graph.station_count(),
            edges: graph.edge_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, Station};

    fn two_hop_route() -> RouteResult {
        RouteResult::from_hops(
            CostMode::Time,
            vec![
                Hop::new(Station::new("Bugis"), Station::new("Lavender"), 1.1, 5.0, 0.99),
                Hop::new(Station::new("Lavender"), Station::new("Kallang"), 1.1, 5.0, 0.99),
            ],
        )
    }

    #[test]
    fn route_response_from_route() {
        let response = RouteResponse::from_route(&two_hop_route());

        assert_eq!(response.mode, CostMode::Time);
        assert_eq!(response.route, "Bugis → Lavender → Kallang");
        assert_eq!(response.hops.len(), 2);
        assert_eq!(response.hops[1].from, "Lavender");
        assert_eq!(response.hops[1].to, "Kallang");
        assert_eq!(response.total_time_min, 10.0);
    }

    #[test]
    fn summary_formatting() {
        let summary = RouteSummary::from_route(&two_hop_route());
        assert_eq!(
            summary,
            RouteSummary {
                time: "10 min".into(),
                distance: "2.2 km".into(),
                fare: "$1.98".into(),
            }
        );
    }

    #[test]
    fn empty_route_summary() {
        let summary = RouteSummary::from_route(&RouteResult::empty(CostMode::Distance));
        assert_eq!(summary.time, "0 min");
        assert_eq!(summary.distance, "0.0 km");
        assert_eq!(summary.fare, "$0.00");
    }

    #[test]
    fn route_response_json_shape() {
        let json = serde_json::to_value(RouteResponse::from_route(&two_hop_route())).unwrap();
        assert_eq!(json["mode"], "time");
        assert_eq!(json["hops"][0]["from"], "Bugis");
        assert_eq!(json["summary"]["fare"], "$1.98");
    }

    #[test]
    fn stations_response_sorted() {
        let graph = Graph::build(&[Edge::new("Yishun", "Khatib", 1.4, 5.0)]);
        let response = StationsResponse::from_graph(&graph);
        assert_eq!(response.stations, vec!["Khatib", "Yishun"]);
        assert_eq!(response.edge_count, 1);
    }
}
