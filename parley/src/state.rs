//! Agent state and tool-call types for the turn loop.
//!
//! `AgentState` holds the conversation plus per-round tool_calls and
//! tool_results; the agent loop reads and writes these fields each round.
//! `ToolCall` and `ToolResult` align with the OpenAI tools/call shapes.

use serde::{Deserialize, Serialize};

use crate::llm::LlmUsage;
use crate::message::Message;

/// A single tool invocation produced by the LLM and consumed by the agent loop.
///
/// `arguments` is the raw JSON string as returned by the model; the loop parses
/// it leniently before dispatching to the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as registered in the [`ToolRegistry`](crate::tools::ToolRegistry).
    pub name: String,
    /// Arguments as a JSON string; parsed when the tool is called.
    pub arguments: String,
    /// Optional id to correlate with [`ToolResult::call_id`].
    pub id: Option<String>,
}

/// Result of executing one tool call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResult {
    /// Id of the tool call this result belongs to, when the call carried one.
    pub call_id: Option<String>,
    /// Tool name; alternative to call_id for matching.
    pub name: Option<String>,
    /// Result text (or error text when `is_error`).
    pub content: String,
    /// True when the tool failed and `content` is the error description.
    pub is_error: bool,
}

/// State threaded through an agent run: transcript plus per-round tool data.
///
/// The loop writes `tool_calls` from the LLM response, fills `tool_results`
/// from the registry, folds results back into `messages`, then clears both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentState {
    /// Conversation history (System, User, Assistant).
    pub messages: Vec<Message>,
    /// Current round tool calls from the LLM.
    pub tool_calls: Vec<ToolCall>,
    /// Current round tool execution results.
    pub tool_results: Vec<ToolResult>,
    /// Number of tool rounds completed; used to enforce the max-turns cutoff.
    #[serde(default)]
    pub turn_count: u32,
    /// Accumulated token usage over the whole run, when the provider reports it.
    #[serde(default)]
    pub total_usage: Option<LlmUsage>,
}

impl AgentState {
    /// Returns the content of the chronologically last Assistant message, if any.
    ///
    /// Callers (CLI, serve) use this to get the final reply without scanning
    /// `messages`. An assistant turn that only carried tool calls yields
    /// `Some("")`; `None` means no Assistant message at all.
    pub fn last_assistant_reply(&self) -> Option<String> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.clone()),
            _ => None,
        })
    }
}
