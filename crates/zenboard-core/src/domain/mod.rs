//! Domain types for zenboard.
//!
//! Pure data and logic with no infrastructure dependencies: exercise
//! timelines, the coach conversation and simulator scenarios.

pub mod chat;
pub mod exercise;
pub mod scenario;

pub use chat::{ChatMessage, MessageRole};
pub use exercise::{
    Caption, CycleLimit, ExerciseDefinition, ExerciseKind, ExerciseSnapshot, ExerciseState, Phase,
    PhaseCue, PhaseName, SELF_TALK_LINES, Step, Timeline, TimelineError,
};
pub use scenario::{SCENARIOS, Scenario, StrategyResponse, find_scenario};
