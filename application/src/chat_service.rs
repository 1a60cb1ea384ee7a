use domain::completion::CompletionClient;
use domain::session::{ConversationSession, Message, SessionSummary};
use shared::error::ApiError;
use tracing::{info, warn};

/// Keyword that ends the conversation (compared case-insensitively).
pub const EXIT_KEYWORD: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Reply(String),
    Skipped,
    Exit,
}

pub fn is_exit_keyword(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_KEYWORD)
}

/// Drives one conversation: owns the session and forwards turns to the
/// completion client.
pub struct ChatService<C> {
    client: C,
    session: ConversationSession,
    state: LoopState,
}

impl<C: CompletionClient> ChatService<C> {
    pub fn new(client: C, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            session: ConversationSession::new(system_prompt),
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn history(&self) -> &[Message] {
        self.session.history()
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summary()
    }

    /// Stop the conversation without a keyword, e.g. when input runs out.
    pub fn end(&mut self) {
        if self.state == LoopState::Running {
            info!(turns = self.session.turn_count(), "input closed; ending the conversation");
            self.state = LoopState::Terminated;
        }
    }

    /// Handle one line of operator input.
    ///
    /// The user message and the reply are committed together, so a failed
    /// request leaves the history untouched and the loop still running.
    pub async fn handle_line(&mut self, input: &str) -> Result<TurnOutcome, ApiError> {
        if self.state == LoopState::Terminated {
            return Ok(TurnOutcome::Exit);
        }
        if is_exit_keyword(input) {
            info!(turns = self.session.turn_count(), "operator ended the conversation");
            self.state = LoopState::Terminated;
            return Ok(TurnOutcome::Exit);
        }
        let text = input.trim();
        if text.is_empty() {
            return Ok(TurnOutcome::Skipped);
        }

        let mut outgoing = self.session.history().to_vec();
        outgoing.push(Message::user(text));

        match self.client.complete(&outgoing).await {
            Ok(reply) => {
                self.session.append_user(text);
                self.session.append_assistant(reply.clone());
                info!(turn = self.session.turn_count(), "turn completed");
                Ok(TurnOutcome::Reply(reply))
            }
            Err(err) => {
                warn!(error = %err, "turn failed; history unchanged");
                Err(err)
            }
        }
    }
}
