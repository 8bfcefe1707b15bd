//! Gemini adapter for ZenBoard.
//!
//! [`GeminiClient`] speaks the `generateContent` REST endpoint and implements
//! the core [`TextGenerator`](zenboard_core::TextGenerator) and
//! [`NarrationProvider`](zenboard_core::NarrationProvider) ports. Errors are
//! mapped to [`RemoteServiceError`](zenboard_core::RemoteServiceError) at the
//! port boundary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod models;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::GeminiClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, GeminiConfig};

// Errors
pub use error::{GenAiError, GenAiResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;
