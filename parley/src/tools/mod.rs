//! Tool abstraction: named, described callables the LLM can invoke.
//!
//! The agent loop depends on [`ToolRegistry`] instead of concrete tools;
//! the registry stores [`Tool`] implementations by name. The two built-in
//! tools are deterministic lookups: [`WeatherTool`] (simulated weather by
//! city) and [`TimeTool`] (simulated local time by timezone code, from an
//! injectable [`Clock`]).

mod clock;
mod registry;
mod time;
mod weather;

pub use clock::{Clock, FixedClock, SystemClock};
pub use registry::ToolRegistry;
pub use time::{time_report, TimeTool, TOOL_GET_TIME};
pub use weather::{weather_report, WeatherTool, TOOL_GET_WEATHER};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool specification sent to the LLM: name, description, argument schema.
///
/// `description` and the per-parameter descriptions inside `input_schema` are
/// metadata the model uses to decide when and how to call the tool; they are
/// not behavior contracts of the tool itself.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    /// Tool name (what the model puts in a tool call).
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

/// Result of a single tool call: plain text the model parses as natural language.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Result text.
    pub text: String,
}

/// Errors from looking up or calling a tool.
///
/// **Interaction**: Returned by `ToolRegistry::call`; the agent loop maps these
/// to error-flagged tool results fed back to the model, never a run abort.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
}

/// A single tool the LLM can call.
///
/// Each tool has a unique name, a spec (description + JSON schema), and the
/// call logic. Register tools in a [`ToolRegistry`] and hand the registry's
/// [`list`](ToolRegistry::list) to the LLM client so the model and the
/// executor agree on the tool set.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name of this tool.
    fn name(&self) -> &str;

    /// Specification for this tool (name, description, argument schema).
    fn spec(&self) -> ToolSpec;

    /// Executes the tool with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// `ToolError::InvalidInput` when a required argument is missing or has
    /// the wrong type. The built-in tools have no other failure mode: any
    /// well-formed input produces a deterministic response.
    async fn call(&self, args: Value) -> Result<ToolOutput, ToolError>;
}

/// Extracts a required string argument from a JSON object.
///
/// Shared by the built-in tools; the error text names the parameter so the
/// model can correct its call.
pub(crate) fn require_str_arg(args: &Value, key: &str) -> Result<String, ToolError> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ToolError::InvalidInput(format!("missing string parameter '{}'", key)))
}
