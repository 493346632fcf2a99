use thiserror::Error;

/// Failures of a single completion request against the hosted provider.
///
/// There is no transient/permanent split: nothing in the service retries.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider rejected the API key: {0}")]
    Unauthorized(String),

    #[error("provider rate limit reached: {0}")]
    RateLimited(String),

    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
