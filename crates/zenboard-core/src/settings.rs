//! Settings domain types and validation.
//!
//! This module contains the core settings types used across the application.
//! These are pure domain types with no infrastructure dependencies; the CLI
//! fills them from the environment.

use serde::{Deserialize, Serialize};

/// Default model for coach and simulator replies.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for phase narration.
pub const DEFAULT_NARRATION_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default prebuilt narration voice.
pub const DEFAULT_NARRATION_VOICE: &str = "Kore";

/// Default timeout for a single remote request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application settings structure.
///
/// Optional fields fall back to the defaults above.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// API key for the generative-language service. `None` disables remote
    /// features.
    pub api_key: Option<String>,

    /// Model used by the coach and the simulator.
    pub text_model: Option<String>,

    /// Model used for phase narration.
    pub narration_model: Option<String>,

    /// Prebuilt voice name for narration.
    pub narration_voice: Option<String>,

    /// Whether exercises request spoken narration.
    pub narration_enabled: Option<bool>,

    /// Timeout for one remote request, in seconds (1-300).
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            api_key: None,
            text_model: None,
            narration_model: None,
            narration_voice: None,
            narration_enabled: Some(true),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    #[must_use]
    pub fn effective_text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    #[must_use]
    pub fn effective_narration_model(&self) -> &str {
        self.narration_model
            .as_deref()
            .unwrap_or(DEFAULT_NARRATION_MODEL)
    }

    #[must_use]
    pub fn effective_narration_voice(&self) -> &str {
        self.narration_voice
            .as_deref()
            .unwrap_or(DEFAULT_NARRATION_VOICE)
    }

    /// Narration runs only when enabled and a key is present.
    #[must_use]
    pub fn narration_active(&self) -> bool {
        self.narration_enabled.unwrap_or(true) && self.has_api_key()
    }

    #[must_use]
    pub const fn effective_request_timeout_secs(&self) -> u64 {
        match self.request_timeout_secs {
            Some(secs) => secs,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("API key cannot be blank")]
    BlankApiKey,

    #[error("Model name cannot be empty")]
    EmptyModelName,

    #[error("Voice name cannot be empty")]
    EmptyVoiceName,

    #[error("Request timeout must be between 1 and 300 seconds, got {0}")]
    InvalidTimeout(u64),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    // A present-but-blank key is almost always a broken .env line
    if settings.api_key.as_ref().is_some_and(|k| k.trim().is_empty()) {
        return Err(SettingsError::BlankApiKey);
    }

    if [&settings.text_model, &settings.narration_model]
        .into_iter()
        .flatten()
        .any(|m| m.trim().is_empty())
    {
        return Err(SettingsError::EmptyModelName);
    }

    if settings
        .narration_voice
        .as_ref()
        .is_some_and(|v| v.trim().is_empty())
    {
        return Err(SettingsError::EmptyVoiceName);
    }

    if let Some(secs) = settings.request_timeout_secs {
        if !(1..=300).contains(&secs) {
            return Err(SettingsError::InvalidTimeout(secs));
        }
    }

    Ok(())
}
