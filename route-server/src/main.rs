use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::edges::load_edges;
use route_server::network::{Graph, sample_network};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the configured edge list, or fall back to the demo network
    let graph = match &config.edges_path {
        Some(path) => match load_edges(path) {
            Ok(edges) if !edges.is_empty() => Graph::build(&edges),
            Ok(_) => {
                error!(path = %path.display(), "Edge list contains no edges");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load edge list");
                return ExitCode::FAILURE;
            }
        },
        None => {
            warn!("No edge list configured, using demo network");
            sample_network()
        }
    };
    info!(
        stations = graph.station_count(),
        edges = graph.edge_count(),
        "Loaded station network"
    );

    // Build app state
    let state = AppState::new(graph, config.planner.clone());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, "Route planner listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /stations        - List stations");
    info!("  GET  /modes           - List route modes");
    info!("  GET  /route           - Find a route (?from=&to=&mode=&blend=)");
    info!("  POST /network/edges   - Replace network with CSV edge list");
    info!("  POST /network/reset   - Restore demo network");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
