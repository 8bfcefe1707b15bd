//! Audio playback via `rodio`.
//!
//! Owns the output stream and at most one sink. Lives on the audio thread
//! (see [`crate::audio_thread`]) because `OutputStream` is `!Send` on some
//! platforms.

use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::error::VoiceError;

/// Narration playback on the default output device.
pub struct AudioPlayback {
    /// rodio output stream (must be kept alive).
    _stream: OutputStream,

    /// Handle used to create sinks.
    stream_handle: OutputStreamHandle,

    /// Sink of the clip currently playing (if any).
    sink: Option<Sink>,
}

impl AudioPlayback {
    /// Open the default output device.
    pub fn new() -> Result<Self, VoiceError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| VoiceError::OutputStreamError(e.to_string()))?;

        tracing::info!("Audio playback initialized on default output device");

        Ok(Self {
            _stream: stream,
            stream_handle,
            sink: None,
        })
    }

    /// Replace whatever is playing with `samples`.
    pub fn play(
        &mut self,
        samples: Vec<f32>,
        sample_rate: u32,
        channels: u16,
    ) -> Result<(), VoiceError> {
        self.stop();

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| VoiceError::OutputStreamError(e.to_string()))?;

        let frames = samples.len() / usize::from(channels.max(1));
        sink.append(rodio::buffer::SamplesBuffer::new(
            channels,
            sample_rate,
            samples,
        ));
        self.sink = Some(sink);

        tracing::debug!(sample_rate, frames, "Audio playback started");
        Ok(())
    }

    /// Stop the current clip. No-op when nothing is playing.
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            tracing::debug!("Audio playback stopped");
        }
    }
}
