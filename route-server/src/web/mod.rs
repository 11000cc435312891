//! Web layer for the route planner.
//!
//! Provides JSON endpoints for listing stations, finding routes, and
//! replacing the station network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
