use crate::session::Message;
use shared::error::ApiError;

/// Boundary to the hosted chat-completion model.
///
/// `history` is the full ordered conversation, system message first. The
/// returned text is the assistant reply for the last user message.
pub trait CompletionClient {
    fn complete(
        &self,
        history: &[Message],
    ) -> impl std::future::Future<Output = Result<String, ApiError>> + Send;
}
