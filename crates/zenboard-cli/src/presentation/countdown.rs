//! Live countdown for a guided exercise, drawn with indicatif.
//!
//! One progress bar per phase: its length is the phase duration and each
//! controller tick moves it one second forward.

use indicatif::{ProgressBar, ProgressStyle};
use zenboard_core::{CycleLimit, ExerciseState};
use zenboard_voice::ExerciseEvent;

use super::tables::cycle_label;

/// How a run ended, as seen by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    Cancelled,
}

/// Renders [`ExerciseEvent`]s as a per-phase progress bar.
pub struct CountdownDisplay {
    cycles: CycleLimit,
    hidden: bool,
    bar: Option<ProgressBar>,
    duration: u32,
    caption: String,
    narrating: bool,
}

impl CountdownDisplay {
    pub fn new(cycles: CycleLimit) -> Self {
        Self {
            cycles,
            hidden: false,
            bar: None,
            duration: 0,
            caption: String::new(),
            narrating: false,
        }
    }

    /// A display that tracks progress without drawing anything.
    pub fn hidden(cycles: CycleLimit) -> Self {
        let mut display = Self::new(cycles);
        display.hidden = true;
        display
    }

    fn phase_bar(&self, length: u64) -> ProgressBar {
        if self.hidden {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(length);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:>14.bold} [{bar:30.cyan/blue}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Apply one event. Returns the outcome once the run has ended.
    pub fn handle(&mut self, event: &ExerciseEvent) -> Option<RunOutcome> {
        match event {
            ExerciseEvent::PhaseEntered {
                heading,
                caption,
                cycle,
                duration_seconds,
                ..
            } => {
                self.finish_phase();
                let bar = self.phase_bar(u64::from(*duration_seconds));
                bar.set_prefix(cycle_label(*cycle, self.cycles));
                self.duration = *duration_seconds;
                self.caption = if caption == heading {
                    heading.clone()
                } else {
                    format!("{heading}: {caption}")
                };
                self.narrating = false;
                self.bar = Some(bar);
                self.refresh_message();
            }
            ExerciseEvent::Tick { remaining_seconds } => {
                if let Some(bar) = &self.bar {
                    bar.set_position(u64::from(self.duration.saturating_sub(*remaining_seconds)));
                }
            }
            ExerciseEvent::NarrationLoading { loading, .. } => {
                self.narrating = *loading;
                self.refresh_message();
            }
            ExerciseEvent::AffirmationDrawn(line) => {
                tracing::debug!(%line, "Self-talk line drawn");
            }
            ExerciseEvent::NarrationStarted(phase) => {
                tracing::debug!(%phase, "Narration playing");
            }
            ExerciseEvent::StateChanged(ExerciseState::Finished) => {
                self.finish_phase();
                return Some(RunOutcome::Finished);
            }
            ExerciseEvent::StateChanged(ExerciseState::Cancelled) => {
                if let Some(bar) = self.bar.take() {
                    bar.abandon();
                }
                return Some(RunOutcome::Cancelled);
            }
            ExerciseEvent::StateChanged(_) => {}
        }
        None
    }

    /// Seconds shown as elapsed in the current phase.
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Caption line of the current phase.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    fn refresh_message(&self) {
        if let Some(bar) = &self.bar {
            if self.narrating {
                bar.set_message(format!("{}  (voice loading...)", self.caption));
            } else {
                bar.set_message(self.caption.clone());
            }
        }
    }

    fn finish_phase(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.set_message(self.caption.clone());
            bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenboard_core::PhaseName;

    fn entered(name: PhaseName, heading: &str, caption: &str, duration: u32) -> ExerciseEvent {
        ExerciseEvent::PhaseEntered {
            name,
            heading: heading.into(),
            caption: caption.into(),
            cycle: 1,
            duration_seconds: duration,
        }
    }

    #[test]
    fn ticks_advance_the_phase_bar() {
        let mut display = CountdownDisplay::hidden(CycleLimit::Unbounded);
        assert_eq!(display.position(), None);

        display.handle(&entered(PhaseName::Inhale, "Inhale", "Inhale", 4));
        assert_eq!(display.position(), Some(0));

        display.handle(&ExerciseEvent::Tick { remaining_seconds: 3 });
        display.handle(&ExerciseEvent::Tick { remaining_seconds: 2 });
        assert_eq!(display.position(), Some(2));

        display.handle(&entered(PhaseName::Hold, "Hold", "Hold", 4));
        assert_eq!(display.position(), Some(0));
    }

    #[test]
    fn caption_joins_heading_when_different() {
        let mut display = CountdownDisplay::hidden(CycleLimit::Finite(1));
        display.handle(&entered(PhaseName::Refocus, "Refocus", "I am prepared.", 5));
        assert_eq!(display.caption(), "Refocus: I am prepared.");

        display.handle(&entered(PhaseName::Inhale, "Inhale", "Inhale", 4));
        assert_eq!(display.caption(), "Inhale");
    }

    #[test]
    fn terminal_states_end_the_display() {
        let mut display = CountdownDisplay::hidden(CycleLimit::Finite(1));
        assert_eq!(
            display.handle(&ExerciseEvent::StateChanged(ExerciseState::Running)),
            None
        );
        display.handle(&entered(PhaseName::Notice, "Notice", "Notice", 4));
        assert_eq!(
            display.handle(&ExerciseEvent::StateChanged(ExerciseState::Cancelled)),
            Some(RunOutcome::Cancelled)
        );
        assert_eq!(display.position(), None);

        assert_eq!(
            display.handle(&ExerciseEvent::StateChanged(ExerciseState::Finished)),
            Some(RunOutcome::Finished)
        );
    }
}
