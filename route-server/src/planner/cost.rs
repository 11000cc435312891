//! Edge cost functions for the weighted search.

use crate::domain::CostMode;
use crate::network::Connection;

use super::config::PlannerConfig;

/// Cost of traversing `conn` under `mode`.
///
/// Every connection costs one in [`CostMode::FewestStops`], although that
/// mode is normally answered by the unweighted search.
pub fn edge_cost(mode: CostMode, config: &PlannerConfig, conn: &Connection) -> f64 {
    match mode {
        CostMode::Distance => conn.distance_km,
        CostMode::Time => conn.time_min,
        CostMode::Balanced => {
            config.balanced_blend * conn.distance_km + config.time_share() * conn.time_min
        }
        CostMode::FewestStops => 1.0,
    }
}
