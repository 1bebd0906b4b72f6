//! Request/response types for the claim triage API.

use serde::{Deserialize, Serialize};

use parley::LlmUsage;

/// Body of `POST /claims/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-form claim description to fan out to the specialists.
    pub claim_text: String,
}

/// One specialist's contribution in an analyze response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistReport {
    pub name: String,
    /// Final reply, or the error text when `is_error`.
    pub reply: String,
    /// Wall-clock time for this specialist's run.
    pub elapsed_ms: u64,
    /// Token usage for this run, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<LlmUsage>,
    pub is_error: bool,
}

/// Body of a successful `POST /claims/analyze` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub request_id: String,
    /// All replies rendered as one markdown document.
    pub combined: String,
    /// Per-specialist results in declaration order.
    pub specialists: Vec<SpecialistReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_usage: Option<LlmUsage>,
    /// Wall-clock time for the whole fan-out.
    pub elapsed_ms: u64,
}

/// Body of `GET /metrics`: process counters since start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub requests_total: u64,
    /// Analyze requests where at least one specialist failed.
    pub failures_total: u64,
    pub specialist_runs_total: u64,
    pub uptime_seconds: u64,
}
