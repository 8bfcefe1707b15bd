//! Port trait implementations for `GeminiClient`.
//!
//! Internal errors are converted to [`RemoteServiceError`] here and nowhere
//! else.

use async_trait::async_trait;
use zenboard_core::{
    ChatMessage, NarrationAudio, NarrationProvider, RemoteServiceError, TextGenerator,
};

use crate::client::GeminiClient;
use crate::error::map_error;

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, RemoteServiceError> {
        self.chat_text(system_prompt, history)
            .await
            .map_err(map_error)
    }

    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, RemoteServiceError> {
        self.generate_text(prompt, temperature)
            .await
            .map_err(map_error)
    }
}

#[async_trait]
impl NarrationProvider for GeminiClient {
    async fn narrate(&self, script: &str) -> Result<NarrationAudio, RemoteServiceError> {
        let pcm = self.synthesize(script).await.map_err(map_error)?;
        tracing::debug!(bytes = pcm.len(), "Narration received");
        Ok(NarrationAudio::pcm16_mono(pcm))
    }
}
