//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod coach;
mod simulator;

use thiserror::Error;

pub use coach::{
    COACH_GREETING, COACH_SYSTEM_PROMPT, CONNECTION_FALLBACK, CoachSession, EMPTY_REPLY_FALLBACK,
};
pub use simulator::{
    EMPTY_FEEDBACK_FALLBACK, FAILED_FEEDBACK_FALLBACK, FEEDBACK_TEMPERATURE, SimulatorService,
    feedback_prompt,
};

/// Validation errors from the coach and simulator.
///
/// Remote failures are not represented here; they degrade to fallback copy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoachError {
    #[error("Message cannot be empty")]
    EmptyInput,

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}
