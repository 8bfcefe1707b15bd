//! Observable state of one exercise run.

use serde::{Deserialize, Serialize};

use super::phase::PhaseName;

/// Lifecycle of an exercise run.
///
/// ```text
///   Idle → Running → Finished
///                  ↘ Cancelled
/// ```
///
/// `Finished` and `Cancelled` are terminal for a run; returning to the
/// dashboard resets the controller to `Idle` with a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

impl ExerciseState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ExerciseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point-in-time view of a run, pushed to (or polled by) the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSnapshot {
    pub state: ExerciseState,
    /// Active phase, `None` unless running.
    pub phase: Option<PhaseName>,
    /// Heading of the active phase.
    pub heading: Option<String>,
    /// Caption drawn on entry into the active phase.
    pub caption: Option<String>,
    pub remaining_seconds: u32,
    /// 1-based cycle number (0 while idle).
    pub cycle: u32,
    /// Total cycles, `None` for an unbounded exercise.
    pub total_cycles: Option<u32>,
    /// A narration request for the active phase is still in flight.
    pub is_narration_loading: bool,
}

impl ExerciseSnapshot {
    /// Snapshot of a run that has not started.
    #[must_use]
    pub const fn idle(total_cycles: Option<u32>) -> Self {
        Self {
            state: ExerciseState::Idle,
            phase: None,
            heading: None,
            caption: None,
            remaining_seconds: 0,
            cycle: 0,
            total_cycles,
            is_narration_loading: false,
        }
    }
}
