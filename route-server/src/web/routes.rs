//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{CostMode, DomainError};
use crate::edges::{EdgeListError, parse_edges_str};
use crate::network::{Graph, sample_network};
use crate::planner::{PathError, Planner, RouteRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/modes", get(list_modes))
        .route("/route", get(find_route))
        .route("/network/edges", post(load_network))
        .route("/network/reset", post(reset_network))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations in the current network.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let graph = state.network.current().await;
    Json(StationsResponse::from_graph(&graph))
}

/// List accepted cost modes.
async fn list_modes() -> Json<ModesResponse> {
    Json(ModesResponse {
        modes: CostMode::ALL.to_vec(),
    })
}

/// Find a route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let mode = match query.mode.as_deref() {
        Some(name) if !name.trim().is_empty() => name.parse::<CostMode>()?,
        _ => CostMode::default(),
    };

    let config = match query.blend {
        Some(blend) => state.config.as_ref().clone().with_blend(blend)?,
        None => state.config.as_ref().clone(),
    };

    // Snapshot: a concurrent reload does not affect this search
    let graph = state.network.current().await;

    let request = RouteRequest::new(query.from, query.to, mode);
    let route = Planner::new(&graph, &config).search(&request)?;

    Ok(Json(RouteResponse::from_route(&route)))
}

/// Replace the network with an edge list posted as CSV text.
///
/// The current network is kept if the edge list is invalid.
async fn load_network(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<NetworkResponse>, AppError> {
    let edges = parse_edges_str(&body)?;
    if edges.is_empty() {
        return Err(AppError::BadRequest {
            message: "edge list contains no edges".to_string(),
        });
    }

    let graph = Graph::build(&edges);
    let response = NetworkResponse::from_graph(&graph);
    state.network.replace(graph).await;

    info!(edges = response.edges, stations = response.stations, "Loaded network from request");
    Ok(Json(response))
}

/// Restore the bundled demo network.
async fn reset_network(State(state): State<AppState>) -> Json<NetworkResponse> {
    let graph = sample_network();
    let response = NetworkResponse::from_graph(&graph);
    state.network.replace(graph).await;

    info!("Network reset to demo dataset");
    Json(response)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    UnknownStation { message: String },
    NoPath { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<EdgeListError> for AppError {
    fn from(e: EdgeListError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::UnknownStation(_) => AppError::UnknownStation {
                message: e.to_string(),
            },
            PathError::NoPathExists { .. } => AppError::NoPath {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, kind, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, "bad_request", message),
            AppError::UnknownStation { message } => {
                (StatusCode::NOT_FOUND, "unknown_station", message)
            }
            AppError::NoPath { message } => (StatusCode::UNPROCESSABLE_ENTITY, "no_path", message),
        };

        warn!(%status, kind, "{message}");

        let body = Json(ErrorResponse {
            kind,
            error: message,
        });
        (status, body).into_response()
    }
}
