//! Mock LLM for tests and examples.
//!
//! Returns a scripted sequence of responses; when the script is exhausted the
//! last response repeats, so a shared mock can serve any number of calls
//! (e.g. the four concurrent specialists in serve tests).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;

/// Mock LLM: scripted responses consumed in order, last one repeating.
///
/// **Interaction**: Implements [`LlmClient`]; used by the agent loop in tests
/// and by serve integration tests in place of a real API.
pub struct MockLlm {
    script: Vec<LlmResponse>,
    next: AtomicUsize,
}

impl MockLlm {
    /// Creates a mock that always returns the same assistant text, no tool calls.
    pub fn reply(content: impl Into<String>) -> Self {
        Self::script(vec![LlmResponse {
            content: content.into(),
            tool_calls: vec![],
            usage: None,
        }])
    }

    /// Creates a mock from an explicit response script.
    ///
    /// Responses are consumed in order; once exhausted, the last entry repeats.
    /// An empty script yields empty responses.
    pub fn script(script: Vec<LlmResponse>) -> Self {
        Self {
            script,
            next: AtomicUsize::new(0),
        }
    }

    /// Creates a stateful mock for one tool round: first call returns the given
    /// tool call, second returns a final answer without tool calls.
    pub fn tool_call_then_answer(
        name: impl Into<String>,
        arguments: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self::script(vec![
            LlmResponse {
                content: String::new(),
                tool_calls: vec![ToolCall {
                    name: name.into(),
                    arguments: arguments.into(),
                    id: Some("call-1".to_string()),
                }],
                usage: None,
            },
            LlmResponse {
                content: answer.into(),
                tool_calls: vec![],
                usage: None,
            },
        ])
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        if self.script.is_empty() {
            return Ok(LlmResponse::default());
        }
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        let i = i.min(self.script.len() - 1);
        Ok(self.script[i].clone())
    }
}
