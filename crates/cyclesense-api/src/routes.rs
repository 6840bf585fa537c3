//! Route handlers and router construction.

use crate::error::{ApiError, ApiResult};
use crate::form::ObservationForm;
use crate::history::{AnalysisId, AnalysisRecord, HISTORY_PAGE_SIZE};
use crate::state::AppState;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use cyclesense_advisor::Analysis;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const SERVICE_MESSAGE: &str = "Menstrual Health AI API";
const SERVICE_SYSTEM: &str = "Knowledge Graph + Rule-based Predictor";

// ============================================================================
// Response bodies
// ============================================================================

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name.
    pub message: &'static str,
    /// Always `running` while the process answers.
    pub status: &'static str,
    /// Whether the advisor is ready.
    pub ml_loaded: bool,
    /// Short description of the analysis engine.
    pub system: &'static str,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process answers.
    pub status: &'static str,
    /// Time of the check.
    pub timestamp: DateTime<Utc>,
    /// `loaded` or `loading`.
    pub ml_system: &'static str,
    /// Seconds since the state was created.
    pub uptime_seconds: u64,
}

/// Body of a successful `POST /api/analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Always `true`.
    pub success: bool,
    /// The computed analysis.
    pub analysis: Analysis,
    /// ID under which the analysis was stored.
    pub analysis_id: AnalysisId,
    /// Time the response was built.
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/analysis/history`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Always `true`.
    pub success: bool,
    /// The most recent records, oldest first.
    pub history: Vec<AnalysisRecord>,
    /// Number of records currently stored.
    pub total_analyses: usize,
}

// ============================================================================
// Handlers
// ============================================================================

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_MESSAGE,
        status: "running",
        ml_loaded: state.status().is_ready(),
        system: SERVICE_SYSTEM,
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.status();
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        ml_system: status.state().load_label(),
        uptime_seconds: status.uptime().as_secs(),
    })
}

async fn analyze(
    State(state): State<AppState>,
    ObservationForm(observation): ObservationForm,
) -> ApiResult<Json<AnalyzeResponse>> {
    let advisor = state.advisor().ok_or(ApiError::NotReady)?;

    let analysis = advisor.analyze(&observation).map_err(|e| {
        error!(error = %e, "Analysis error");
        ApiError::from(e)
    })?;

    let record = AnalysisRecord::new(observation, analysis.clone());
    let analysis_id = record.id.clone();
    if let Some(evicted) = state.history().push(record) {
        tracing::debug!(id = %evicted.id, "Evicted oldest analysis");
    }
    info!(id = %analysis_id, "Stored analysis");

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        analysis_id,
        timestamp: Utc::now(),
    }))
}

async fn history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.history();
    Json(HistoryResponse {
        success: true,
        history: history.recent(HISTORY_PAGE_SIZE),
        total_analyses: history.len(),
    })
}

// ============================================================================
// Router
// ============================================================================

/// Builds the router with request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/analysis/history", get(history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
