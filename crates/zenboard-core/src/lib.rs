//! Core domain, ports and services for ZenBoard.
//!
//! - [`domain`]: exercise phases and timelines, the exercise catalog, coach
//!   chat messages and simulator scenarios.
//! - [`ports`]: traits for the remote narration and text-generation services.
//! - [`services`]: the coach session and the scenario simulator.
//! - [`settings`]: configuration with defaults and validation.
//!
//! Nothing here touches the network or an audio device.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    Caption, ChatMessage, CycleLimit, ExerciseDefinition, ExerciseKind, ExerciseSnapshot,
    ExerciseState, MessageRole, Phase, PhaseCue, PhaseName, SCENARIOS, SELF_TALK_LINES, Scenario,
    Step, StrategyResponse, Timeline, TimelineError, find_scenario,
};
pub use ports::{
    NARRATION_CHANNELS, NARRATION_SAMPLE_RATE, NarrationAudio, NarrationProvider,
    RemoteServiceError, TextGenerator,
};
pub use services::{CoachError, CoachSession, SimulatorService};
pub use settings::{
    DEFAULT_NARRATION_MODEL, DEFAULT_NARRATION_VOICE, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_TEXT_MODEL, Settings, SettingsError, validate_settings,
};
