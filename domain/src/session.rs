use serde::{Deserialize, Serialize};
use shared::telemetry::Telemetry;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only conversation for one run. The system message set at
/// construction stays at index 0.
pub struct ConversationSession {
    messages: Vec<Message>,
    turns: usize,
    started: Telemetry,
}

impl ConversationSession {
    pub fn new(system_text: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_text)],
            turns: 0,
            started: Telemetry::new(),
        }
    }

    pub fn append_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn append_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
        self.turns += 1;
    }

    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.len()
    }

    /// Completed turns (assistant replies).
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            interactions: self.turns,
            messages: self.len(),
            duration_secs: self.started.elapsed().as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub interactions: usize,
    pub messages: usize,
    pub duration_secs: u64,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total interactions: {}, message count: {}, session length: {}m {}s",
            self.interactions,
            self.messages,
            self.duration_secs / 60,
            self.duration_secs % 60
        )
    }
}
