//! Public configuration for the Gemini client.

use std::time::Duration;

use zenboard_core::{
    DEFAULT_NARRATION_MODEL, DEFAULT_NARRATION_VOICE, DEFAULT_TEXT_MODEL, Settings,
};

/// Default API root for `generateContent`.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use zenboard_genai::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new()
///     .with_api_key("secret")
///     .with_voice("Puck")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API root, without a trailing `/models`.
    pub(crate) base_url: String,
    /// API key; requests fail fast without one.
    pub(crate) api_key: Option<String>,
    /// Model for chat and one-shot text.
    pub(crate) text_model: String,
    /// Model for speech synthesis.
    pub(crate) narration_model: String,
    /// Prebuilt voice for speech synthesis.
    pub(crate) voice: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            narration_model: DEFAULT_NARRATION_MODEL.to_string(),
            voice: DEFAULT_NARRATION_VOICE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("zenboard-genai/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GeminiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from application settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_optional_api_key(settings.api_key.clone())
            .with_text_model(settings.effective_text_model())
            .with_narration_model(settings.effective_narration_model())
            .with_voice(settings.effective_narration_voice())
            .with_timeout(Duration::from_secs(
                settings.effective_request_timeout_secs(),
            ))
    }

    /// Set the API root. Tests point this at a mock server.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key. Blank keys count as missing.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    #[must_use]
    pub fn with_narration_model(mut self, model: impl Into<String>) -> Self {
        self.narration_model = model.into();
        self
    }

    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether requests can be made at all.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.text_model, "gemini-3-flash-preview");
        assert_eq!(config.narration_model, "gemini-2.5-flash-preview-tts");
        assert_eq!(config.voice, "Kore");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.has_api_key());
        assert!(config.user_agent.contains("zenboard-genai"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeminiConfig::new()
            .with_base_url("http://127.0.0.1:9999/")
            .with_api_key("secret")
            .with_text_model("text-m")
            .with_narration_model("tts-m")
            .with_voice("Puck")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.endpoint("text-m"),
            "http://127.0.0.1:9999/models/text-m:generateContent"
        );
        assert_eq!(config.voice, "Puck");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = GeminiConfig::new().with_optional_api_key(Some("  ".into()));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            api_key: Some("k".into()),
            narration_voice: Some("Charon".into()),
            request_timeout_secs: Some(12),
            ..Settings::with_defaults()
        };
        let config = GeminiConfig::from_settings(&settings);
        assert!(config.has_api_key());
        assert_eq!(config.voice, "Charon");
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(12));
    }
}
