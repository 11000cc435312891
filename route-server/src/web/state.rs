//! Application state for the web layer.

use std::sync::Arc;

use crate::network::{Graph, SharedGraph};
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains the current station graph and the planner configuration.
#[derive(Clone)]
pub struct AppState {
    /// Current station graph, replaced wholesale on reload
    pub network: SharedGraph,

    /// Route search configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, config: PlannerConfig) -> Self {
        Self {
            network: SharedGraph::new(graph),
            config: Arc::new(config),
        }
    }
}
