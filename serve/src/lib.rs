//! HTTP host for concurrent claim triage (axum).
//!
//! Fans one insurance-claim text out to four independently-prompted specialist
//! agents in parallel and serves their combined output plus telemetry
//! (per-specialist latency and token usage, process counters).
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`].

mod app;
mod triage;
mod types;

pub use triage::{claim_specialists, ClaimTriage};
pub use types::{AnalyzeRequest, AnalyzeResponse, MetricsResponse, SpecialistReport};

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use parley::LlmClient;

use app::{router, AppState};

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

/// Runs the server on an existing listener. Used by tests (bind to
/// 127.0.0.1:0, then pass the listener) with a mock LLM client.
pub async fn run_serve_on_listener(
    listener: TcpListener,
    llm: Arc<dyn LlmClient>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("claim triage server listening on http://{}", addr);

    let state = Arc::new(AppState::new(ClaimTriage::new(llm)));
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Runs the server. Listens on `addr` (default 127.0.0.1:8080).
pub async fn run_serve(
    addr: Option<&str>,
    llm: Arc<dyn LlmClient>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_HTTP_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, llm).await
}
