//! Route planner.
//!
//! This module implements the path engine that answers: "how do I get
//! from this station to that one?" under a chosen cost mode.
//!
//! Distance, time and balanced modes use a weighted Dijkstra search;
//! fewest-stops mode uses a breadth-first search that ignores weights.

mod bfs;
mod config;
mod cost;
mod search;
mod weighted;


pub use config::{DEFAULT_BALANCED_BLEND, PlannerConfig};
pub use cost::edge_cost;
pub use search::{PathError, Planner, RouteRequest, find_route};
