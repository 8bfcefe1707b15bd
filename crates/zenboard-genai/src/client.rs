//! Gemini client for chat, one-shot text and speech synthesis.
//!
//! Each operation is exactly one `generateContent` request. There is no
//! retry: callers degrade to fallback copy or silence on failure.

use zenboard_core::ChatMessage;

use crate::config::GeminiConfig;
use crate::error::{GenAiError, GenAiResult};
use crate::models::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    SpeechConfig,
};
use crate::parsing::{extract_audio, extract_text};

/// Longest error body echoed back in an error message.
const MAX_ERROR_BODY: usize = 300;

/// Client for the Gemini `generateContent` endpoint.
///
/// Implements [`zenboard_core::TextGenerator`] and
/// [`zenboard_core::NarrationProvider`].
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> GenAiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    /// Continue a conversation under `system_prompt`.
    pub async fn chat_text(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> GenAiResult<String> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::text(system_prompt)),
            contents: history.iter().map(Content::from_message).collect(),
            generation_config: None,
        };
        let response = self.send(&self.config.text_model, &request).await?;
        extract_text(&response)
    }

    /// One-shot completion at `temperature`.
    pub async fn generate_text(&self, prompt: &str, temperature: f32) -> GenAiResult<String> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::text(prompt)],
            generation_config: Some(GenerationConfig {
                temperature: Some(temperature),
                ..GenerationConfig::default()
            }),
        };
        let response = self.send(&self.config.text_model, &request).await?;
        extract_text(&response)
    }

    /// Synthesize `script` with the configured voice; returns raw PCM bytes.
    pub async fn synthesize(&self, script: &str) -> GenAiResult<Vec<u8>> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::text(script)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO"]),
                speech_config: Some(SpeechConfig::prebuilt(&self.config.voice)),
                ..GenerationConfig::default()
            }),
        };
        let response = self.send(&self.config.narration_model, &request).await?;
        extract_audio(&response)
    }

    async fn send(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> GenAiResult<GenerateContentResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenAiError::MissingApiKey)?;

        let url = self.config.endpoint(model);
        tracing::debug!(model, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::warn!(model, status = status.as_u16(), %message, "Gemini request failed");
            return Err(GenAiError::ApiRequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Pull the message out of a Gemini error envelope, or cap the raw body.
fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
