//! Text generation port used by the coach and the simulator.

use async_trait::async_trait;

use super::RemoteServiceError;
use crate::domain::ChatMessage;

/// Port for a remote generative-language service.
///
/// Both calls are single request/response exchanges. An empty string is a
/// valid (if unhelpful) reply; callers decide what to show instead.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Continue a conversation under a fixed persona.
    ///
    /// `history` is ordered oldest first and ends with the latest user turn.
    async fn chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, RemoteServiceError>;

    /// One-shot completion of `prompt` at the given sampling temperature.
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, RemoteServiceError>;
}
