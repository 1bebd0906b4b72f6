//! Agent execution error types.
//!
//! Returned by `LlmClient::invoke` and the agent turn loop. Tool-level errors
//! have their own type ([`ToolError`](crate::tools::ToolError)) because the loop
//! feeds them back to the model instead of failing the run.

use thiserror::Error;

/// Agent execution error.
///
/// Tool failures become error-flagged tool results inside the loop, so this
/// error surfaces only when the LLM call itself fails.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM request build or API error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
