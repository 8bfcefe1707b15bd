//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or audio-device types in any signature
//! - Adapters convert their own errors into [`RemoteServiceError`] at the
//!   crate boundary

pub mod narration;
pub mod text_generation;

use thiserror::Error;

pub use narration::{NARRATION_CHANNELS, NARRATION_SAMPLE_RATE, NarrationAudio, NarrationProvider};
pub use text_generation::TextGenerator;

/// Errors surfaced by remote generation services.
///
/// All variants are non-fatal for the application: the coach and simulator
/// substitute fallback copy, and exercises continue without narration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteServiceError {
    /// No credentials were configured for the service.
    #[error("Remote service is not configured (missing API key)")]
    NotConfigured,

    /// The request never produced an HTTP response.
    #[error("Remote service unreachable: {0}")]
    Unavailable(String),

    /// The request did not finish in time.
    #[error("Remote service timed out")]
    Timeout,

    /// The service rejected the request.
    #[error("Remote service returned status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response arrived but did not contain what was asked for.
    #[error("Unexpected response from remote service: {0}")]
    InvalidResponse(String),
}
