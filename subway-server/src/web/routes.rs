//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{LineId, StationId};
use crate::network::NetworkError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", axum::routing::delete(delete_station))
        .route("/lines", get(list_lines).post(create_line))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(delete_section),
        )
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> (StatusCode, Json<StationResponse>) {
    let station = state.network.create_station(req.name).await;
    (StatusCode::CREATED, Json(StationResponse::from(&station)))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.network.stations().await;
    Json(stations.iter().map(StationResponse::from).collect())
}

async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<StationId>,
) -> Result<StatusCode, AppError> {
    state.network.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line together with its first section.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<(StatusCode, Json<LineResponse>), AppError> {
    let line = state
        .network
        .create_line(
            req.name,
            req.color,
            req.up_station_id,
            req.down_station_id,
            req.distance,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(LineResponse::from(&line))))
}

async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state.network.lines().await;
    Json(lines.iter().map(LineResponse::from).collect())
}

async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.network.line(id).await?;
    Ok(Json(LineResponse::from(&line)))
}

async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.network.update_line(id, req.name, req.color).await?;
    Ok(Json(LineResponse::from(&line)))
}

async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<StatusCode, AppError> {
    state.network.delete_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Insert a section into a line's chain.
async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(req): Json<SectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .network
        .add_section(id, req.up_station_id, req.down_station_id, req.distance)
        .await?;
    Ok(Json(LineResponse::from(&line)))
}

/// Remove a station from a line's chain.
async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Query(query): Query<DeleteSectionQuery>,
) -> Result<StatusCode, AppError> {
    state.network.delete_section(id, query.station_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shortest path between two stations across all lines.
async fn find_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, AppError> {
    let route = state.network.find_path(query.source, query.target).await?;
    Ok(Json(PathResponse::from(&route)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::StationNotFound(_) | NetworkError::LineNotFound(_) => {
                AppError::NotFound { message }
            }
            NetworkError::StationInUse { .. } => AppError::Conflict { message },
            NetworkError::Line(_) | NetworkError::Path(_) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
