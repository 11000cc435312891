//! Route result types.
//!
//! A `RouteResult` is the answer to one route query: the ordered hops from
//! start to end plus distance, time and fare totals over those hops.

use std::fmt;

use serde::Serialize;

use super::{CostMode, Station};

/// One station-to-station step of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    /// Station the hop leaves from
    pub from: Station,
    /// Station the hop arrives at
    pub to: Station,
    /// Distance of the connection used (km)
    pub distance_km: f64,
    /// Travel time of the connection used (minutes)
    pub time_min: f64,
    /// Fare of the connection used
    pub fare: f64,
}

impl Hop {
    /// Creates a new hop.
    pub fn new(from: Station, to: Station, distance_km: f64, time_min: f64, fare: f64) -> Self {
        Self {
            from,
            to,
            distance_km,
            time_min,
            fare,
        }
    }
}

/// A route found by the planner.
///
/// Created fresh per query and owned by the caller.
///
/// # Invariants
///
/// - Consecutive hops connect (`hops[i].to == hops[i + 1].from`)
/// - Totals are the sums of the per-hop values
///
/// Fewest-stops routes also carry real per-hop distance, time and fare:
/// each hop reports the connection it uses (the shortest one when stations
/// are joined by parallel connections) rather than zeros, so the totals stay
/// the sum of the hops in every mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    mode: CostMode,
    hops: Vec<Hop>,
    total_distance_km: f64,
    total_time_min: f64,
    total_fare: f64,
}

impl RouteResult {
    /// A route with no hops and zero totals (start equals end).
    pub fn empty(mode: CostMode) -> Self {
        Self::from_hops(mode, Vec::new())
    }

    /// Builds a route from connected hops, summing the totals.
    pub fn from_hops(mode: CostMode, hops: Vec<Hop>) -> Self {
        debug_assert!(hops.windows(2).all(|w| w[0].to == w[1].from));

        let (total_distance_km, total_time_min, total_fare) = hops
            .iter()
            .fold((0.0, 0.0, 0.0), |(d, t, f), hop| {
                (d + hop.distance_km, t + hop.time_min, f + hop.fare)
            });

        Self {
            mode,
            hops,
            total_distance_km,
            total_time_min,
            total_fare,
        }
    }

    /// Returns the mode this route was searched with.
    pub fn mode(&self) -> CostMode {
        self.mode
    }

    /// Returns the hops in travel order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Returns the number of hops.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Returns true if the route has no hops.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Total distance in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Total travel time in minutes.
    pub fn total_time_min(&self) -> f64 {
        self.total_time_min
    }

    /// Total fare (sum of per-hop fares).
    pub fn total_fare(&self) -> f64 {
        self.total_fare
    }

    /// Returns the stations visited in order, both ends included.
    ///
    /// Empty when the route has no hops.
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self.hops.iter().map(|h| &h.from).collect();
        if let Some(last) = self.hops.last() {
            stations.push(&last.to);
        }
        stations
    }
}

impl fmt::Display for RouteResult {
    /// Renders the station sequence, e.g. `Bugis → Lavender → Kallang`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            f.write_str(station.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(from: &str, to: &str, d: f64, t: f64, fare: f64) -> Hop {
        Hop::new(Station::new(from), Station::new(to), d, t, fare)
    }

    #[test]
    fn empty_route() {
        let route = RouteResult::empty(CostMode::Time);
        assert!(route.is_empty());
        assert_eq!(route.hop_count(), 0);
        assert_eq!(route.total_distance_km(), 0.0);
        assert_eq!(route.total_time_min(), 0.0);
        assert_eq!(route.total_fare(), 0.0);
        assert!(route.stations().is_empty());
        assert_eq!(route.mode(), CostMode::Time);
    }

    #[test]
    fn totals_are_sums() {
        let route = RouteResult::from_hops(
            CostMode::Distance,
            vec![hop("A", "B", 2.0, 5.0, 0.99), hop("B", "C", 3.0, 6.0, 0.99)],
        );

        assert_eq!(route.hop_count(), 2);
        assert_eq!(route.total_distance_km(), 5.0);
        assert_eq!(route.total_time_min(), 11.0);
        assert!((route.total_fare() - 1.98).abs() < 1e-9);
    }

    #[test]
    fn stations_in_order() {
        let route = RouteResult::from_hops(
            CostMode::Distance,
            vec![hop("A", "B", 1.0, 1.0, 0.99), hop("B", "C", 1.0, 1.0, 0.99)],
        );

        let names: Vec<&str> = route.stations().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn display_joins_with_arrows() {
        let route = RouteResult::from_hops(
            CostMode::Distance,
            vec![
                hop("Bugis", "Lavender", 1.1, 5.0, 0.99),
                hop("Lavender", "Kallang", 1.1, 5.0, 0.99),
            ],
        );
        assert_eq!(route.to_string(), "Bugis → Lavender → Kallang");
        assert_eq!(RouteResult::empty(CostMode::Distance).to_string(), "");
    }
}
