//! Axum web server for promptchart
//!
//! Exposes prompt and intent resolution over JSON endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::catalog::DatasetSummary;
use crate::config::ServerSettings;
use crate::intent::IntentSource;
use crate::model::{ChartIntent, ChartResponse};
use crate::resolver::{IntentResolver, ResolveError};

/// Application state shared across handlers
pub struct AppState {
    pub resolver: IntentResolver<Arc<dyn IntentSource>>,
}

impl AppState {
    pub fn new(resolver: IntentResolver<Arc<dyn IntentSource>>) -> Self {
        Self { resolver }
    }
}

/// Build the axum router with all routes
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chart", post(create_chart))
        .route("/api/chart/intent", post(resolve_intent))
        .route("/api/datasets", get(list_datasets))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Start the web server; returns after Ctrl+C.
pub async fn serve(
    settings: &ServerSettings,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(state);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "promptchart listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;
    Ok(())
}

// ============================================================================
// Errors
// ============================================================================

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// An error response with its status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.into(),
                code: code.to_string(),
            },
        }
    }

    fn invalid_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", error)
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match &err {
            ResolveError::EmptyPrompt => Self::invalid_request("Missing or invalid prompt"),
            ResolveError::InvalidIntent(_) => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_INTENT", err.to_string())
            }
            ResolveError::IntentSource(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

#[derive(Deserialize)]
struct ChartRequest {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    context: Option<serde_json::Value>,
}

/// POST /api/chart - Resolve a natural-language prompt
async fn create_chart(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::invalid_request("Invalid JSON"))?;

    let prompt = match req.prompt {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(ApiError::invalid_request("Missing or invalid prompt")),
    };

    if req.context.is_some() {
        debug!("request context supplied; not used for resolution");
    }

    let request_id = Uuid::new_v4();
    let response = state
        .resolver
        .resolve(&prompt)
        .instrument(info_span!("chart_request", %request_id))
        .await?;

    Ok(Json(response))
}

/// POST /api/chart/intent - Resolve a structured intent without a model call
async fn resolve_intent(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChartIntent>, JsonRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Json(intent) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    Ok(Json(state.resolver.resolve_intent(intent)?))
}

/// GET /api/datasets - Describe the catalog
async fn list_datasets(State(state): State<Arc<AppState>>) -> Json<Vec<DatasetSummary>> {
    Json(state.resolver.catalog().summaries())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
