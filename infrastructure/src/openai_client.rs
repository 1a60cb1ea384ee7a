use crate::config::AgentConfig;
use domain::completion::CompletionClient;
use domain::session::Message;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use shared::error::ApiError;
use shared::telemetry::Telemetry;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Chat-completions client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Arc<Client>,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            client: Arc::new(Client::new()),
            endpoint: format!("{}/chat/completions", config.base_url),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, history: &[Message]) -> Result<String, ApiError> {
        let telemetry = Telemetry::new();
        let request = ChatRequest {
            model: &self.model,
            messages: history,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let elapsed_ms = telemetry.elapsed_ms() as u64;
        debug!(
            status = status.as_u16(),
            messages = history.len(),
            elapsed_ms,
            "completion request finished"
        );

        if !status.is_success() {
            let err = error_for_status(status, &body);
            warn!(error = %err, "completion request failed");
            return Err(err);
        }

        parse_reply(&body)
    }
}

fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth {
            status: status.as_u16(),
            message,
        },
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

fn parse_reply(body: &str) -> Result<String, ApiError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Malformed("response contained no choices".into()))?
        .message
        .content
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Malformed("assistant message had no content".into()))?;

    Ok(content)
}
