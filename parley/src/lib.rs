//! # Parley
//!
//! Minimal tool-calling agents in Rust: a thin agent layer around an
//! OpenAI-compatible LLM API plus two deterministic demonstration tools
//! (simulated weather by city, simulated local time by timezone code).
//!
//! ## Design principles
//!
//! - **One turn loop**: a single [`Agent`] runner drives think → act → observe;
//!   no graph engine, no streaming, no persistence.
//! - **Tools at a trait seam**: [`Tool`] + [`ToolRegistry`]; the model and the
//!   executor share the same [`ToolSpec`] list.
//! - **Deterministic core**: the built-in tools are total functions over their
//!   input; the only ambient dependency (the wall clock) hides behind the
//!   injectable [`Clock`] trait.
//! - **Forgiving loop**: tool failures are fed back to the model as
//!   error-flagged results; only LLM failures abort a run.
//!
//! ## Main modules
//!
//! - [`agent`]: [`Agent`] — the turn loop, multi-turn threading via
//!   [`Agent::send`], [`MAX_AGENT_TURNS`].
//! - [`concurrent`]: [`Specialist`], [`run_concurrent`] — fan-out/fan-in of
//!   independently-prompted single-shot agents.
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOpenAI`], [`LlmUsage`].
//! - [`tools`]: [`Tool`], [`ToolRegistry`], [`WeatherTool`], [`TimeTool`],
//!   [`Clock`] / [`SystemClock`] / [`FixedClock`].
//! - [`message`]: [`Message`] (System / User / Assistant).
//! - [`state`]: [`AgentState`], [`ToolCall`], [`ToolResult`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use parley::{Agent, ChatOpenAI, TimeTool, ToolRegistry, WeatherTool};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), parley::AgentError> {
//! let mut tools = ToolRegistry::new();
//! tools.register(Box::new(WeatherTool::new()));
//! tools.register(Box::new(TimeTool::new()));
//! let tools = Arc::new(tools);
//!
//! let llm = Arc::new(ChatOpenAI::new("gpt-4o-mini").with_tools(tools.list()));
//! let agent = Agent::new("assistant", "You are a helpful assistant.", llm, tools);
//!
//! let state = agent.run("What's the weather in Seattle?").await?;
//! println!("{}", state.last_assistant_reply().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod concurrent;
pub mod error;
pub mod llm;
pub mod message;
pub mod state;
pub mod tools;

pub use agent::{Agent, MAX_AGENT_TURNS};
pub use concurrent::{run_concurrent, ConcurrentOutcome, Specialist, SpecialistRun};
pub use error::AgentError;
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, LlmUsage, MockLlm};
pub use message::Message;
pub use state::{AgentState, ToolCall, ToolResult};
pub use tools::{
    time_report, weather_report, Clock, FixedClock, SystemClock, TimeTool, Tool, ToolError,
    ToolOutput, ToolRegistry, ToolSpec, WeatherTool, TOOL_GET_TIME, TOOL_GET_WEATHER,
};

/// When running `cargo test -p parley`, initializes tracing from `RUST_LOG` so
/// that unit tests in `src/**` can print logs with `--nocapture`.
#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
