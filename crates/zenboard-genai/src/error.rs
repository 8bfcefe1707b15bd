//! Internal error types for Gemini operations.
//!
//! These errors are internal to `zenboard-genai` and are mapped to
//! [`RemoteServiceError`] at the boundary.

use thiserror::Error;
use zenboard_core::RemoteServiceError;

/// Result type alias for Gemini operations.
pub type GenAiResult<T> = Result<T, GenAiError>;

/// Errors related to Gemini API operations.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// No API key configured; no request was sent.
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// API request failed with an HTTP error status.
    #[error("Gemini API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message from the body, if any
        message: String,
    },

    /// The prompt was blocked before generation.
    #[error("Gemini blocked the prompt: {reason}")]
    Blocked { reason: String },

    /// The response had no candidates.
    #[error("Gemini response contained no candidates")]
    NoCandidates,

    /// A speech response had no inline audio.
    #[error("Gemini response contained no audio")]
    MissingAudio,

    /// Inline audio was not valid base64.
    #[error("Invalid audio encoding: {0}")]
    InvalidAudio(#[from] base64::DecodeError),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Convert internal `GenAiError` to the core port error.
pub fn map_error(err: GenAiError) -> RemoteServiceError {
    match err {
        GenAiError::MissingApiKey => RemoteServiceError::NotConfigured,
        GenAiError::ApiRequestFailed { status, message } => {
            RemoteServiceError::Rejected { status, message }
        }
        GenAiError::Network(e) if e.is_timeout() => RemoteServiceError::Timeout,
        GenAiError::Network(e) if e.is_decode() => {
            RemoteServiceError::InvalidResponse(e.to_string())
        }
        GenAiError::Network(e) => RemoteServiceError::Unavailable(e.to_string()),
        other @ (GenAiError::Blocked { .. }
        | GenAiError::NoCandidates
        | GenAiError::MissingAudio
        | GenAiError::InvalidAudio(_)) => RemoteServiceError::InvalidResponse(other.to_string()),
    }
}
