//! LLM client abstraction for the agent turn loop.
//!
//! The loop depends on a callable that returns assistant text and optional
//! tool_calls; this module defines the trait, a scripted mock, and an
//! OpenAI-compatible client.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::state::ToolCall;

/// Token usage for one LLM call (prompt + completion).
///
/// **Interaction**: Optional part of `LlmResponse`; the agent loop accumulates
/// it into `AgentState::total_usage` and serve echoes it as telemetry.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    /// Tokens in the prompt (input).
    pub prompt_tokens: u32,
    /// Tokens in the completion (output).
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

impl LlmUsage {
    /// Adds another usage record into this one, field by field.
    pub fn accumulate(&mut self, other: &LlmUsage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// Response from one LLM completion: assistant text and optional tool calls.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; the agent loop writes
/// `content` into a new assistant message and dispatches `tool_calls`.
#[derive(Clone, Debug, Default)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
    /// Tool calls from this turn; empty means the turn is a final answer.
    pub tool_calls: Vec<ToolCall>,
    /// Token usage for this call, when the provider reports it.
    pub usage: Option<LlmUsage>,
}

/// LLM client: given messages, returns assistant text and optional tool_calls.
///
/// Implementations: [`MockLlm`] (scripted responses for tests),
/// [`ChatOpenAI`] (OpenAI-compatible Chat Completions API).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion: read messages, return assistant content and
    /// optional tool_calls.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_accumulate_sums_fields() {
        let mut total = LlmUsage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        };
        total.accumulate(&LlmUsage {
            prompt_tokens: 3,
            completion_tokens: 2,
            total_tokens: 5,
        });
        assert_eq!(total.prompt_tokens, 13);
        assert_eq!(total.completion_tokens, 7);
        assert_eq!(total.total_tokens, 20);
    }

    #[test]
    fn usage_accumulate_from_default_copies() {
        let mut total = LlmUsage::default();
        total.accumulate(&LlmUsage {
            prompt_tokens: 1,
            completion_tokens: 1,
            total_tokens: 2,
        });
        assert_eq!(total.total_tokens, 2);
    }
}
