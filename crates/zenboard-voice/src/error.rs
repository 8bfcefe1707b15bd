//! Voice and exercise error types.

use zenboard_core::{ExerciseState, TimelineError};

/// Errors from decoding or playing narration audio.
///
/// None of these stop an exercise; the controller logs them and keeps
/// counting down.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    /// Payload is not valid 16-bit PCM.
    #[error("Malformed audio payload: {0}")]
    MalformedAudio(String),

    /// Failed to open the audio output stream.
    #[error("Failed to open audio output stream: {0}")]
    OutputStreamError(String),

    /// Failed to start the audio thread.
    #[error("Failed to spawn audio thread: {0}")]
    AudioThreadSpawn(String),

    /// The audio thread is no longer answering.
    #[error("Audio thread is not running")]
    AudioThreadDied,
}

/// Errors from the exercise controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseError {
    /// The exercise definition cannot be run.
    #[error("Invalid exercise: {0}")]
    InvalidTimeline(#[from] TimelineError),

    /// The requested control is not valid in the current state.
    #[error("Cannot {action} an exercise that is {state}")]
    InvalidTransition {
        action: &'static str,
        state: ExerciseState,
    },

    /// `start` was called outside a tokio runtime.
    #[error("Exercise controller needs a running tokio runtime")]
    NoRuntime,
}
