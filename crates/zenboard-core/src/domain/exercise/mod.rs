//! Guided exercise domain: phases, timelines, the built-in catalog and the
//! observable run state.

pub mod catalog;
pub mod phase;
pub mod run;
pub mod timeline;

pub use catalog::{ExerciseDefinition, ExerciseKind, SELF_TALK_LINES};
pub use phase::{Caption, Phase, PhaseCue, PhaseName};
pub use run::{ExerciseSnapshot, ExerciseState};
pub use timeline::{CycleLimit, Step, Timeline, TimelineError};
