//! Narration port: text script in, spoken audio out.
//!
//! # Design Rules
//!
//! - The payload is raw PCM bytes; decoding into samples happens in the
//!   playback adapter, never here.
//! - Implementations make exactly one remote call per `narrate` and do not
//!   retry.

use async_trait::async_trait;

use super::RemoteServiceError;

/// Sample rate of narration audio (Hz).
pub const NARRATION_SAMPLE_RATE: u32 = 24_000;

/// Channel count of narration audio.
pub const NARRATION_CHANNELS: u16 = 1;

/// One synthesized narration clip: 16-bit little-endian mono PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationAudio {
    pub pcm: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl NarrationAudio {
    /// Wrap raw PCM bytes in the fixed narration format.
    #[must_use]
    pub const fn pcm16_mono(pcm: Vec<u8>) -> Self {
        Self {
            pcm,
            sample_rate: NARRATION_SAMPLE_RATE,
            channels: NARRATION_CHANNELS,
        }
    }

    /// Playback length, assuming two bytes per sample.
    #[must_use]
    pub fn duration(&self) -> std::time::Duration {
        let frames = self.pcm.len() as u64 / 2 / u64::from(self.channels.max(1));
        std::time::Duration::from_millis(frames * 1000 / u64::from(self.sample_rate.max(1)))
    }
}

/// Port for a remote text-to-speech service.
///
/// Implemented by `GeminiClient` in `zenboard-genai`; consumed by the
/// exercise controller in `zenboard-voice`.
#[async_trait]
pub trait NarrationProvider: Send + Sync {
    /// Synthesize `script` into a single audio clip.
    async fn narrate(&self, script: &str) -> Result<NarrationAudio, RemoteServiceError>;
}
