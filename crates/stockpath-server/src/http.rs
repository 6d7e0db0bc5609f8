//! HTTP/JSON surface for path queries

use crate::error::ServiceError;
use crate::service::PathService;
use axum::{
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stockpath_core::PathNode;
use stockpath_storage::WarehouseRepository;
use tokio_util::sync::CancellationToken;
use tower_http::limit::RequestBodyLimitLayer;
use uuid::Uuid;

const SERVER_NAME: &str = "stockpath";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum request body size (64KB); requests carry ids only
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared handler state
pub struct AppState<R> {
    service: Arc<PathService<R>>,
    shutdown: CancellationToken,
}

/// Build the API router.
///
/// `shutdown` doubles as the query cancellation token: once it is
/// cancelled, in-flight path queries fail before touching the snapshot.
pub fn router<R: WarehouseRepository + 'static>(
    service: Arc<PathService<R>>,
    shutdown: CancellationToken,
) -> Router {
    let state = Arc::new(AppState { service, shutdown });

    Router::new()
        .route("/v1/path/:destination", get(path_handler::<R>))
        .route("/v1/graph/rebuild", post(rebuild_handler::<R>))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
}

/// Serve the API on `addr` until the shutdown token fires
pub async fn serve<R: WarehouseRepository + 'static>(
    service: Arc<PathService<R>>,
    addr: &str,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let router = router(service, shutdown.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("path API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}

#[derive(Deserialize)]
struct PathParams {
    default_warehouse: String,
}

async fn path_handler<R: WarehouseRepository>(
    State(state): State<Arc<AppState<R>>>,
    UrlPath(destination): UrlPath<String>,
    Query(params): Query<PathParams>,
) -> Response {
    let destination = match Uuid::parse_str(&destination) {
        Ok(id) => id,
        Err(e) => return invalid_argument(format!("destination id: {}", e)),
    };
    let default_warehouse = match Uuid::parse_str(&params.default_warehouse) {
        Ok(id) => id,
        Err(e) => return invalid_argument(format!("default warehouse id: {}", e)),
    };

    match state
        .service
        .get_path(&destination, &default_warehouse, &state.shutdown)
    {
        Ok(path) => {
            let response = PathResponse {
                nodes: path.iter().map(PathNodeDto::from).collect(),
            };
            Json(response).into_response()
        }
        Err(e) => error_response(e),
    }
}

async fn rebuild_handler<R: WarehouseRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Response {
    match state.service.update_graph().await {
        Ok(()) => Json(serde_json::json!({ "status": "ok" })).into_response(),
        Err(e) => error_response(e),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "server": SERVER_NAME,
        "version": SERVER_VERSION
    }))
}

fn invalid_argument(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Graph(_) | ServiceError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("path query failed: {}", err);
    }
    (
        status,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathResponse {
    nodes: Vec<PathNodeDto>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathNodeDto {
    id: Uuid,
    name: String,
    kind: String,
    level: i32,
    address: String,
    descriptor_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_zone: Option<String>,
    available_for_balance: bool,
    only_stock_pickup_allowed: bool,
}

impl From<&PathNode> for PathNodeDto {
    fn from(path_node: &PathNode) -> Self {
        let node = &path_node.node;
        Self {
            id: node.id,
            name: node.name.clone(),
            kind: node.kind.as_str().to_string(),
            level: path_node.level,
            address: node.address.clone(),
            descriptor_group: node.descriptor_group.clone(),
            time_zone: node.time_zone.clone(),
            available_for_balance: node.available_for_balance,
            only_stock_pickup_allowed: node.only_stock_pickup_allowed,
        }
    }
}
