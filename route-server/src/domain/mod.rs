//! Domain types for the route planner.
//!
//! This module contains the value types shared by the graph builder,
//! the path engine and the loaders: stations, raw edges, cost modes,
//! the fare schedule and route results.

mod edge;
mod error;
mod fare;
mod mode;
mod route;
mod station;

pub use edge::Edge;
pub use error::DomainError;
pub use fare::{
    BASE_DISTANCE_KM, BASE_FARE, CAP_DISTANCE_KM, CAP_FARE, MID_DISTANCE_KM, MID_FARE, fare,
};
pub use mode::CostMode;
pub use route::{Hop, RouteResult};
pub use station::Station;
