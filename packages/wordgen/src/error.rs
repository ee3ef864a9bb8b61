use thiserror::Error;

/// Why a provider reply could not be turned into a [`WordRecord`](crate::WordRecord).
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to parse provider text as JSON: {source}")]
    ParseFailure {
        /// The cleaned text that failed to parse.
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid quiz: {0}")]
    InvalidQuiz(String),
}

#[derive(Debug, Error)]
pub enum WordGenError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("provider request failed: {0}")]
    ProviderRequest(#[from] reqwest::Error),

    #[error("provider API error (status {status}): {message}")]
    ProviderApi { status: u16, message: String },

    #[error("failed to decode provider response: {0}")]
    ProviderResponseParse(String),

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("malformed provider response: {0}")]
    Malformed(#[from] ValidationError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse failure classes the HTTP layer and logs report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StartupConfigurationMissing,
    UpstreamUnavailable,
    MalformedUpstreamResponse,
    InternalError,
}

impl WordGenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordGenError::Config(_) => ErrorKind::StartupConfigurationMissing,
            WordGenError::ProviderRequest(_)
            | WordGenError::ProviderApi { .. }
            | WordGenError::ProviderResponseParse(_)
            | WordGenError::EmptyResponse => ErrorKind::UpstreamUnavailable,
            WordGenError::Malformed(_) => ErrorKind::MalformedUpstreamResponse,
            WordGenError::Internal(_) => ErrorKind::InternalError,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordGenError>;
