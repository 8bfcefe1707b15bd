//! Speech output seam between the controller and the audio device.

use std::sync::{Mutex, MutexGuard, PoisonError};

use zenboard_core::NarrationAudio;

use crate::audio_thread::AudioThreadHandle;
use crate::error::VoiceError;
use crate::pcm::decode_pcm16_le;

/// Where narration clips are played.
///
/// Calls are synchronous so the controller can stop audio inside the same
/// critical section that invalidates a phase. At most one clip is active.
/// `play` and `stop` run under the controller's lock and must not wait on
/// the device; `prepare` is called without it and may block.
pub trait SpeechOutput: Send + Sync {
    /// Make sure the device exists and is running. Called from `start()`.
    fn prepare(&self) -> Result<(), VoiceError>;

    /// Stop the current clip and play `audio`.
    fn play(&self, audio: &NarrationAudio) -> Result<(), VoiceError>;

    /// Stop the current clip. Idempotent.
    fn stop(&self);

    /// Release the device.
    fn shutdown(&self) {}
}

/// Speech output on the default audio device.
///
/// The device (and its thread) is created on first [`prepare`](SpeechOutput::prepare)
/// or [`play`](SpeechOutput::play) and released by
/// [`shutdown`](SpeechOutput::shutdown) or drop.
#[derive(Default)]
pub struct SpeechPlayback {
    audio: Mutex<Option<AudioThreadHandle>>,
}

impl SpeechPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<AudioThreadHandle>> {
        self.audio.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_device(slot: &mut Option<AudioThreadHandle>) -> Result<&AudioThreadHandle, VoiceError> {
        if slot.is_none() {
            *slot = Some(AudioThreadHandle::spawn()?);
        }
        slot.as_ref().ok_or(VoiceError::AudioThreadDied)
    }
}

impl SpeechOutput for SpeechPlayback {
    fn prepare(&self) -> Result<(), VoiceError> {
        let mut slot = self.lock();
        Self::ensure_device(&mut slot).map(|_| ())
    }

    fn play(&self, audio: &NarrationAudio) -> Result<(), VoiceError> {
        let mut slot = self.lock();
        let device = Self::ensure_device(&mut slot)?;
        device.stop();

        let samples = decode_pcm16_le(&audio.pcm)?;
        device.play(samples, audio.sample_rate, audio.channels)
    }

    fn stop(&self) {
        if let Some(device) = self.lock().as_ref() {
            device.stop();
        }
    }

    fn shutdown(&self) {
        // Dropping the handle joins the audio thread.
        if self.lock().take().is_some() {
            tracing::debug!("Speech playback shut down");
        }
    }
}

/// Output that discards audio, for muted runs and hosts without a device.
///
/// Payloads are still decoded so malformed audio is reported the same way.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentOutput;

impl SpeechOutput for SilentOutput {
    fn prepare(&self) -> Result<(), VoiceError> {
        Ok(())
    }

    fn play(&self, audio: &NarrationAudio) -> Result<(), VoiceError> {
        decode_pcm16_le(&audio.pcm).map(|_| ())
    }

    fn stop(&self) {}
}
