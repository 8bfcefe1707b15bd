//! Built-in guided exercises.
//!
//! | Exercise           | Phases (seconds)              | Cycles    |
//! |--------------------|-------------------------------|-----------|
//! | Box breathing      | Inhale 4, Hold 4, Exhale 4    | unbounded |
//! | Physiological sigh | Inhale 4, Top-up 1, Exhale 8  | 2         |
//! | Clear the noise    | Notice 4, Park 4, Refocus 5   | 1         |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::phase::{Caption, Phase, PhaseCue, PhaseName};
use super::timeline::{CycleLimit, Timeline, TimelineError};

/// Self-talk lines offered during the Refocus phase of "Clear the noise".
pub const SELF_TALK_LINES: [&str; 6] = [
    "I only need to solve this question.",
    "Slow is steady.",
    "I\u{2019}ve handled harder moments.",
    "One step at a time.",
    "Stay on this page. Nothing else matters.",
    "I am prepared for this moment.",
];

/// Identifier of a built-in exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseKind {
    BoxBreathing,
    PhysiologicalSigh,
    ClearTheNoise,
}

impl ExerciseKind {
    pub const ALL: [Self; 3] = [
        Self::BoxBreathing,
        Self::PhysiologicalSigh,
        Self::ClearTheNoise,
    ];

    /// Short id used on the command line.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::BoxBreathing => "box",
            Self::PhysiologicalSigh => "sigh",
            Self::ClearTheNoise => "noise",
        }
    }

    /// Full definition of this exercise.
    #[must_use]
    pub fn definition(&self) -> ExerciseDefinition {
        match self {
            Self::BoxBreathing => box_breathing(),
            Self::PhysiologicalSigh => physiological_sigh(),
            Self::ClearTheNoise => clear_the_noise(),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "box" | "box-breathing" => Ok(Self::BoxBreathing),
            "sigh" | "physiological-sigh" => Ok(Self::PhysiologicalSigh),
            "noise" | "clear-the-noise" => Ok(Self::ClearTheNoise),
            other => Err(format!(
                "unknown exercise '{other}' (expected one of: box, sigh, noise)"
            )),
        }
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A complete exercise: copy for the shell plus the phases to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    pub kind: ExerciseKind,
    pub title: String,
    /// Badge shown above the title.
    pub tagline: String,
    /// Explanation shown before the run starts.
    pub intro: String,
    /// Copy shown once the run finishes.
    pub completion: String,
    pub phases: Vec<Phase>,
    pub cycles: CycleLimit,
}

impl ExerciseDefinition {
    /// Override the cycle count. Unbounded exercises stay unbounded.
    #[must_use]
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        if matches!(self.cycles, CycleLimit::Finite(_)) {
            self.cycles = CycleLimit::Finite(cycles);
        }
        self
    }

    /// Build the timeline that drives this exercise.
    pub fn timeline(&self) -> Result<Timeline, TimelineError> {
        Timeline::new(self.phases.clone(), self.cycles)
    }
}

fn box_breathing() -> ExerciseDefinition {
    ExerciseDefinition {
        kind: ExerciseKind::BoxBreathing,
        title: "Box Breathing".to_string(),
        tagline: "Breathing Tool".to_string(),
        intro: "Use this 4-4-4 technique to lower your heart rate instantly whenever you feel overwhelmed."
            .to_string(),
        completion: "Nice work. Your breathing is steady again.".to_string(),
        phases: vec![
            Phase::new(PhaseName::Inhale, 4, "Inhale")
                .with_narration("Breathe in slowly for four."),
            Phase::new(PhaseName::Hold, 4, "Hold").with_narration("Hold gently."),
            Phase::new(PhaseName::Exhale, 4, "Exhale").with_narration("And breathe out."),
        ],
        cycles: CycleLimit::Unbounded,
    }
}

fn physiological_sigh() -> ExerciseDefinition {
    ExerciseDefinition {
        kind: ExerciseKind::PhysiologicalSigh,
        title: "The Rapid Biological Reset".to_string(),
        tagline: "Neuroscience Tool".to_string(),
        intro: "The Physiological Sigh is a real-time tool to lower your heart rate. \
                By adding a second \"sniff\" at the top of your breath, you re-inflate tiny air \
                sacs in your lungs, allowing you to offload maximum CO2 on the exhale. \
                It's a biological \"off-switch\" for stress."
            .to_string(),
        completion: "Your body is settling. You\u{2019}re in control.".to_string(),
        phases: vec![
            Phase::new(PhaseName::Inhale, 4, "Inhale slowly through your nose")
                .with_narration("Inhale slowly through your nose."),
            Phase::new(PhaseName::TopUp, 1, "Quick second inhale to top up")
                .with_narration("Top up."),
            Phase::new(PhaseName::Exhale, 8, "Long, slow exhale through the mouth")
                .with_narration("Now a long, slow exhale through the mouth."),
        ],
        cycles: CycleLimit::Finite(2),
    }
}

fn clear_the_noise() -> ExerciseDefinition {
    ExerciseDefinition {
        kind: ExerciseKind::ClearTheNoise,
        title: "Clear the Noise".to_string(),
        tagline: "Mental Reset".to_string(),
        intro: "When your mind starts wandering to \"what if\" fears during an exam, clear the \
                noise: acknowledge the thought, park it for after the bell, then repeat a simple \
                anchor line to get back to work."
            .to_string(),
        completion: "Focus Locked. You're back in the room. Go for the next mark.".to_string(),
        phases: vec![
            Phase::new(PhaseName::Notice, 4, "Notice the thought")
                .with_caption(Caption::Fixed(
                    "Don't judge it. Just see it as noise.".to_string(),
                ))
                .with_narration("Notice the thought. Don't judge it. Just see it as noise."),
            Phase::new(PhaseName::Park, 4, "Park it for later")
                .with_caption(Caption::Fixed(
                    "Mentally file it away. You can deal with it after the exam.".to_string(),
                ))
                .with_narration("Park it for later. You can deal with it after the exam."),
            Phase::new(PhaseName::Refocus, 5, "Focus on this")
                .with_caption(Caption::OneOf(
                    SELF_TALK_LINES.iter().map(ToString::to_string).collect(),
                ))
                .with_narration("Now bring your focus back to the page in front of you.")
                .with_cue(PhaseCue::DrawAffirmation),
        ],
        cycles: CycleLimit::Finite(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_exercise_builds_a_valid_timeline() {
        for kind in ExerciseKind::ALL {
            let def = kind.definition();
            assert_eq!(def.kind, kind);
            assert!(def.timeline().is_ok(), "{kind} should build");
        }
    }

    #[test]
    fn sigh_runs_two_thirteen_second_cycles() {
        let timeline = ExerciseKind::PhysiologicalSigh
            .definition()
            .timeline()
            .unwrap();
        assert_eq!(timeline.total_seconds(), Some(26));
    }

    #[test]
    fn box_breathing_loops_forever() {
        let def = ExerciseKind::BoxBreathing.definition().with_cycles(3);
        assert_eq!(def.cycles, CycleLimit::Unbounded);
    }

    #[test]
    fn cycle_override_applies_to_finite_exercises() {
        let def = ExerciseKind::ClearTheNoise.definition().with_cycles(2);
        assert_eq!(def.cycles, CycleLimit::Finite(2));
        assert_eq!(def.timeline().unwrap().total_seconds(), Some(26));
    }

    #[test]
    fn refocus_draws_from_self_talk_lines() {
        let def = ExerciseKind::ClearTheNoise.definition();
        let refocus = def
            .phases
            .iter()
            .find(|p| p.name == PhaseName::Refocus)
            .unwrap();
        assert_eq!(refocus.on_enter, Some(PhaseCue::DrawAffirmation));
        let picked = refocus.caption.pick().unwrap();
        assert!(SELF_TALK_LINES.contains(&picked));
    }

    #[test]
    fn every_phase_is_narrated() {
        for kind in ExerciseKind::ALL {
            for phase in kind.definition().phases {
                assert!(phase.narration_script.is_some(), "{kind}/{}", phase.name);
            }
        }
    }

    #[test]
    fn kind_parses_from_slug_and_long_name() {
        assert_eq!("box".parse::<ExerciseKind>(), Ok(ExerciseKind::BoxBreathing));
        assert_eq!("Physiological-Sigh".parse::<ExerciseKind>(), Ok(ExerciseKind::PhysiologicalSigh));
        assert_eq!("noise".parse::<ExerciseKind>(), Ok(ExerciseKind::ClearTheNoise));
        assert!("yoga".parse::<ExerciseKind>().is_err());
    }
}
