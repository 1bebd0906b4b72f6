//! Concurrent fan-out/fan-in over independently-prompted specialists.
//!
//! One input is dispatched to several single-shot agents in parallel; each
//! specialist has its own instructions but shares the LLM client. The outcome
//! keeps per-specialist timing, usage, and failure flags, and can render a
//! combined report. One specialist failing does not fail the others.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{info, warn};

use crate::agent::Agent;
use crate::llm::{LlmClient, LlmUsage};
use crate::tools::ToolRegistry;

/// One independently-prompted worker in a fan-out.
#[derive(Debug, Clone)]
pub struct Specialist {
    /// Display name, used as the section header in the combined report.
    pub name: String,
    /// System instructions for this specialist's agent.
    pub instructions: String,
}

impl Specialist {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }
}

/// Result of one specialist's run.
#[derive(Debug, Clone)]
pub struct SpecialistRun {
    /// Specialist name (copied from the [`Specialist`]).
    pub name: String,
    /// Final reply, or the error text when `is_error`.
    pub reply: String,
    /// Wall-clock time for this specialist's run.
    pub elapsed_ms: u64,
    /// Token usage for this run, when the provider reports it.
    pub usage: Option<LlmUsage>,
    /// True when the run failed; `reply` then carries the error description.
    pub is_error: bool,
}

/// Fan-in of all specialist runs, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ConcurrentOutcome {
    pub runs: Vec<SpecialistRun>,
}

impl ConcurrentOutcome {
    /// Renders all replies as one markdown document, one section per specialist.
    pub fn combined(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str("## ");
            out.push_str(&run.name);
            out.push('\n');
            out.push_str(&run.reply);
            out.push_str("\n\n");
        }
        out
    }

    /// Sums usage across runs; `None` when no run reported usage.
    pub fn total_usage(&self) -> Option<LlmUsage> {
        let mut total: Option<LlmUsage> = None;
        for run in &self.runs {
            if let Some(u) = &run.usage {
                total.get_or_insert_with(Default::default).accumulate(u);
            }
        }
        total
    }

    /// True when at least one specialist failed.
    pub fn has_errors(&self) -> bool {
        self.runs.iter().any(|r| r.is_error)
    }
}

/// Runs every specialist over the same input concurrently and collects the
/// results in declaration order.
///
/// Each specialist becomes a tool-less single-shot [`Agent`] sharing `llm`.
/// Failures are captured per specialist; the fan-in itself never fails.
pub async fn run_concurrent(
    llm: Arc<dyn LlmClient>,
    specialists: &[Specialist],
    input: &str,
) -> ConcurrentOutcome {
    let no_tools = Arc::new(ToolRegistry::new());
    let futures = specialists.iter().map(|spec| {
        let agent = Agent::new(
            spec.name.clone(),
            spec.instructions.clone(),
            llm.clone(),
            no_tools.clone(),
        );
        let name = spec.name.clone();
        async move {
            let started = Instant::now();
            let result = agent.run(input).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;
            match result {
                Ok(state) => {
                    info!(specialist = %name, elapsed_ms, "specialist done");
                    SpecialistRun {
                        name,
                        reply: state.last_assistant_reply().unwrap_or_default(),
                        elapsed_ms,
                        usage: state.total_usage,
                        is_error: false,
                    }
                }
                Err(e) => {
                    warn!(specialist = %name, elapsed_ms, error = %e, "specialist failed");
                    SpecialistRun {
                        name,
                        reply: e.to_string(),
                        elapsed_ms,
                        usage: None,
                        is_error: true,
                    }
                }
            }
        }
    });
    ConcurrentOutcome {
        runs: join_all(futures).await,
    }
}
