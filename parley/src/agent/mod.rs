//! Single-agent turn loop: think → act → observe, collapsed into one runner.
//!
//! One turn: invoke the LLM, append the assistant message, execute any tool
//! calls through the registry, fold each result back into the transcript, and
//! repeat until the model answers without tool calls or the max-turns cutoff
//! hits. Tool failures become error-flagged tool results fed back to the
//! model; only LLM failures abort the run.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::{AgentState, ToolCall, ToolResult};
use crate::tools::ToolRegistry;

/// Maximum number of tool rounds per run before forcing an end.
pub const MAX_AGENT_TURNS: u32 = 10;

/// One configured agent: instructions, an LLM client, and a tool registry.
///
/// Stateless across runs; conversation state lives in [`AgentState`], which
/// the caller threads through [`Agent::send`] for multi-turn conversations.
pub struct Agent {
    name: String,
    instructions: String,
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
    max_turns: u32,
}

impl Agent {
    /// Creates an agent with the default max-turns cutoff.
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        llm: Arc<dyn LlmClient>,
        tools: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            llm,
            tools,
            max_turns: MAX_AGENT_TURNS,
        }
    }

    /// Overrides the tool-round cutoff.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Agent name, used in logs and in fan-out results.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seeds a fresh conversation: system instructions plus the first user message.
    pub fn initial_state(&self, user_message: &str) -> AgentState {
        AgentState {
            messages: vec![
                Message::system(&self.instructions),
                Message::user(user_message),
            ],
            ..Default::default()
        }
    }

    /// Runs a fresh conversation from one user message.
    pub async fn run(&self, user_message: &str) -> Result<AgentState, AgentError> {
        self.run_loop(self.initial_state(user_message)).await
    }

    /// Continues an existing conversation with another user message.
    ///
    /// Per-round fields are reset; the transcript and accumulated usage carry over.
    pub async fn send(
        &self,
        mut state: AgentState,
        user_message: &str,
    ) -> Result<AgentState, AgentError> {
        state.messages.push(Message::user(user_message));
        state.tool_calls.clear();
        state.tool_results.clear();
        state.turn_count = 0;
        self.run_loop(state).await
    }

    async fn run_loop(&self, mut state: AgentState) -> Result<AgentState, AgentError> {
        loop {
            let response = self.llm.invoke(&state.messages).await?;
            if let Some(usage) = &response.usage {
                state
                    .total_usage
                    .get_or_insert_with(Default::default)
                    .accumulate(usage);
            }
            state.messages.push(Message::assistant(response.content));
            state.tool_calls = response.tool_calls;

            if state.tool_calls.is_empty() {
                break;
            }

            state.tool_results = self.execute_tool_calls(&state.tool_calls).await;
            for tr in &state.tool_results {
                let name = tr
                    .name
                    .as_deref()
                    .or(tr.call_id.as_deref())
                    .unwrap_or("tool");
                state
                    .messages
                    .push(Message::user(format!("Tool {} returned: {}", name, tr.content)));
            }
            state.tool_calls.clear();
            state.tool_results.clear();

            state.turn_count = state.turn_count.saturating_add(1);
            if state.turn_count >= self.max_turns {
                warn!(agent = %self.name, turns = state.turn_count, "max tool turns reached, ending run");
                break;
            }
        }
        Ok(state)
    }

    async fn execute_tool_calls(&self, tool_calls: &[ToolCall]) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(tool_calls.len());
        for tc in tool_calls {
            let args = parse_tool_arguments(&tc.arguments);
            debug!(agent = %self.name, tool = %tc.name, "calling tool");
            match self.tools.call(&tc.name, args).await {
                Ok(output) => results.push(ToolResult {
                    call_id: tc.id.clone(),
                    name: Some(tc.name.clone()),
                    content: output.text,
                    is_error: false,
                }),
                Err(e) => {
                    warn!(agent = %self.name, tool = %tc.name, error = %e, "tool call failed");
                    results.push(ToolResult {
                        call_id: tc.id.clone(),
                        name: Some(tc.name.clone()),
                        content: format!("Tool error: {}", e),
                        is_error: true,
                    });
                }
            }
        }
        results
    }
}

/// Parses a tool-call arguments string leniently: empty or invalid JSON
/// becomes an empty object, so a malformed model call surfaces as a missing-
/// parameter tool error instead of a run abort.
fn parse_tool_arguments(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Object(Default::default());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Default::default()))
}
