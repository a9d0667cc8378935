//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::Coordinates;
use crate::error::Error;
use crate::geo::GeoBackend;
use crate::lookup::{Lookup, LookupQuery, LookupResponse};
use crate::server::state::AppState;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/resolve", post(resolve_handler))
        .route("/api/status", get(status_handler))
        // Paths kept for older clients
        .route("/geocodeAndCheckIntersection", post(resolve_handler))
        .route("/findNeighbourhood", post(resolve_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Resolve request body
///
/// `coords` is `[lng, lat]` and takes precedence over `address`.
#[derive(Debug, Default, Deserialize)]
pub struct ResolveRequest {
    pub address: Option<String>,
    pub coords: Option<[f64; 2]>,
}

impl ResolveRequest {
    fn into_query(self) -> Option<LookupQuery> {
        if let Some(coords) = self.coords {
            return Some(LookupQuery::Coordinates(Coordinates::from(coords)));
        }
        self.address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .map(LookupQuery::Address)
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: message.into(),
            code: code.to_string(),
        }),
    )
}

/// Map a crate error onto a status code and error code
fn error_response(err: Error) -> (StatusCode, Json<ApiError>) {
    let (status, code) = match &err {
        Error::InvalidCoordinates(_) => (StatusCode::BAD_REQUEST, "INVALID_COORDINATES"),
        Error::AddressNotFound(_) => (StatusCode::NOT_FOUND, "ADDRESS_NOT_FOUND"),
        Error::Geometry(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GEOMETRY_ERROR"),
        Error::Geocoding(_) | Error::Http(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GEOCODING_ERROR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };

    if status.is_server_error() {
        error!(code, "Request failed: {}", err);
    } else {
        warn!(code, "Request rejected: {}", err);
    }

    api_error(status, code, err.to_string())
}

/// Resolve an address or coordinate pair to its neighborhood
///
/// POST /api/resolve
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ResolveRequest>, JsonRejection>,
) -> ApiResult<LookupResponse> {
    let Json(req) = body.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        api_error(StatusCode::BAD_REQUEST, "INVALID_REQUEST", rejection.body_text())
    })?;

    let query = req.into_query().ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            "MISSING_INPUT",
            "Either address or coords is required",
        )
    })?;

    let lookup = Lookup {
        features: &state.features,
        labels: &state.config.labels,
        geocoder: &state.geocoder,
        enricher: Some(&state.enricher),
    };

    lookup.run(query).await.map(Json).map_err(error_response)
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Number of loaded neighborhood polygons
    pub features: usize,
    /// Geocoding provider in use
    pub geocoder: String,
    pub cms_enabled: bool,
    pub database_enabled: bool,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: state.features.len(),
        geocoder: state.geocoder.name().to_string(),
        cms_enabled: state.enricher.cms_enabled(),
        database_enabled: state.enricher.database_enabled(),
        uptime_secs: state.uptime().as_secs(),
    })
}
