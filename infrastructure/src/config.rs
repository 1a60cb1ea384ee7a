use dotenvy::dotenv;
use shared::error::{AgentError, AgentResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CUSTOMER_DATA_PATH: &str = "data/customer_data.csv";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/app.log";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Everything the agent reads from the environment, resolved once at startup.
#[derive(Clone)]
pub struct AgentConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub base_url: String,
    pub customer_data_path: PathBuf,
    pub customer_id: Option<String>,
    pub log_file_path: PathBuf,
}

impl AgentConfig {
    /// Load from `.env` (if present) and the process environment.
    pub fn load() -> AgentResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AgentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("OPENAI_API_KEY").ok_or_else(|| {
            AgentError::Config("OPENAI_API_KEY is not set (add it to the environment or .env)".into())
        })?;

        let temperature = match get("OPENAI_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f32>()
                .ok()
                .filter(|t| (0.0..=2.0).contains(t))
                .ok_or_else(|| {
                    AgentError::Config(format!(
                        "OPENAI_TEMPERATURE must be a number between 0 and 2, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_TEMPERATURE,
        };

        let max_tokens = match get("OPENAI_MAX_TOKENS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                AgentError::Config(format!(
                    "OPENAI_MAX_TOKENS must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            api_key,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            max_tokens,
            base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            customer_data_path: get("CUSTOMER_DATA_PATH")
                .unwrap_or_else(|| DEFAULT_CUSTOMER_DATA_PATH.to_string())
                .into(),
            customer_id: get("CUSTOMER_ID"),
            log_file_path: get("LOG_FILE_PATH")
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string())
                .into(),
        })
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("customer_data_path", &self.customer_data_path)
            .field("customer_id", &self.customer_id)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}
