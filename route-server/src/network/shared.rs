//! Shared, replaceable graph.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::Graph;

/// Thread-safe handle to the current station graph.
///
/// Readers take a snapshot (`Arc<Graph>`) and search it without holding
/// the lock. Reloading publishes a whole new graph by swapping the `Arc`,
/// so a search in progress keeps the graph it started with.
#[derive(Clone)]
pub struct SharedGraph {
    inner: Arc<RwLock<Arc<Graph>>>,
}

impl SharedGraph {
    /// Create a handle publishing `graph`.
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// Snapshot of the current graph.
    pub async fn current(&self) -> Arc<Graph> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Publish a new graph, returning the one it replaced.
    pub async fn replace(&self, graph: Graph) -> Arc<Graph> {
        let next = Arc::new(graph);
        info!(
            stations = next.station_count(),
            edges = next.edge_count(),
            "Publishing new station graph"
        );

        let mut guard = self.inner.write().await;
        std::mem::replace(&mut *guard, next)
    }
}
