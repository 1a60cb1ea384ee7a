use thiserror::Error;

/// Errors surfaced by the agent. `Config` and `Data` are fatal at startup,
/// `Api` is reported for the current turn and the loop goes on.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Customer data error: {0}")]
    Data(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failure of a single chat-completion request.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Completion API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed completion response: {0}")]
    Malformed(String),
}

pub type AgentResult<T> = std::result::Result<T, AgentError>;
