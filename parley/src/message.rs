//! Conversation message types.
//!
//! Message roles: System (instructions, first in the list), User, Assistant.
//! `AgentState::messages` threads these through turns; tool output re-enters the
//! conversation as a User message appended by the agent loop.

/// A single message in an agent conversation.
///
/// Tool results are not a separate role here: the agent loop folds them back
/// into the transcript as User messages, so an `LlmClient` only ever sees the
/// three roles below.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Agent instructions; placed first in the message list.
    System(String),
    /// End-user input, or a tool observation fed back to the model.
    User(String),
    /// Model reply.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Role name for display and logging ("system" / "user" / "assistant").
    pub fn role(&self) -> &'static str {
        match self {
            Self::System(_) => "system",
            Self::User(_) => "user",
            Self::Assistant(_) => "assistant",
        }
    }

    /// The text content, independent of role.
    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) | Self::Assistant(s) => s,
        }
    }
}
