//! Guided exercise runtime for ZenBoard.
//!
//! - [`controller`]: the exercise state machine, countdown and stale
//!   narration handling.
//! - [`output`]: the [`SpeechOutput`] seam plus the device-backed and
//!   silent implementations.
//! - [`pcm`]: decoding of narration payloads.
//! - `audio_thread` / `playback`: the `rodio` device, confined to its own
//!   OS thread.

#![deny(unused_crate_dependencies)]

mod audio_thread;
pub mod controller;
pub mod error;
pub mod output;
pub mod pcm;
mod playback;

// Re-export key types for convenience
pub use controller::{ExerciseController, ExerciseControllerConfig, ExerciseEvent};
pub use error::{ExerciseError, VoiceError};
pub use output::{SilentOutput, SpeechOutput, SpeechPlayback};
pub use pcm::decode_pcm16_le;

// Only the integration tests implement the async narration port.
#[cfg(test)]
use async_trait as _;
