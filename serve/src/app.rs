//! Axum app: shared state, router, handlers, and process counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::triage::ClaimTriage;
use crate::types::{AnalyzeRequest, AnalyzeResponse, MetricsResponse, SpecialistReport};

/// Process counters since server start.
#[derive(Default)]
pub(crate) struct Metrics {
    requests_total: AtomicU64,
    failures_total: AtomicU64,
    specialist_runs_total: AtomicU64,
}

/// Shared state for the HTTP server.
pub(crate) struct AppState {
    triage: ClaimTriage,
    metrics: Metrics,
    started_at: Instant,
}

impl AppState {
    pub(crate) fn new(triage: ClaimTriage) -> Self {
        Self {
            triage,
            metrics: Metrics::default(),
            started_at: Instant::now(),
        }
    }
}

/// Builds the router: analyze, health, metrics.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/claims/analyze", post(analyze))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Handles `POST /claims/analyze`: fans the claim text out to all specialists
/// and returns their combined output plus per-specialist telemetry.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    if req.claim_text.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "claim_text must not be empty" })),
        )
            .into_response();
    }

    let request_id = Uuid::new_v4().to_string();
    let started = Instant::now();
    let outcome = state
        .triage
        .analyze(&req.claim_text)
        .instrument(info_span!("analyze", request_id = %request_id))
        .await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    state.metrics.requests_total.fetch_add(1, Ordering::Relaxed);
    state
        .metrics
        .specialist_runs_total
        .fetch_add(outcome.runs.len() as u64, Ordering::Relaxed);
    if outcome.has_errors() {
        state.metrics.failures_total.fetch_add(1, Ordering::Relaxed);
    }
    info!(
        request_id = %request_id,
        elapsed_ms,
        specialists = outcome.runs.len(),
        errors = outcome.has_errors(),
        "claim analyzed"
    );

    let response = AnalyzeResponse {
        request_id,
        combined: outcome.combined(),
        total_usage: outcome.total_usage(),
        specialists: outcome
            .runs
            .into_iter()
            .map(|r| SpecialistReport {
                name: r.name,
                reply: r.reply,
                elapsed_ms: r.elapsed_ms,
                usage: r.usage,
                is_error: r.is_error,
            })
            .collect(),
        elapsed_ms,
    };
    Json(response).into_response()
}

/// Handles `GET /health`.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Handles `GET /metrics`: process counters since start.
async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        requests_total: state.metrics.requests_total.load(Ordering::Relaxed),
        failures_total: state.metrics.failures_total.load(Ordering::Relaxed),
        specialist_runs_total: state.metrics.specialist_runs_total.load(Ordering::Relaxed),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
