//! Phase timeline: an ordered, optionally looping sequence of phases.
//!
//! ```text
//!   start() → phase[0] → phase[1] → … → phase[n-1] ─┬─ cycles left → phase[0]
//!                                                   └─ done        → Finished
//! ```
//!
//! The timeline knows nothing about wall-clock time: the controller calls
//! [`Timeline::advance`] whenever the active phase's countdown expires.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::phase::Phase;

/// How many times the phase list is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleLimit {
    /// Stop after this many passes through the phase list.
    Finite(u32),
    /// Loop until the run is stopped externally.
    Unbounded,
}

impl CycleLimit {
    /// The cycle count as a number, if finite.
    #[must_use]
    pub const fn as_finite(&self) -> Option<u32> {
        match self {
            Self::Finite(n) => Some(*n),
            Self::Unbounded => None,
        }
    }
}

/// Errors raised while building a timeline. These are setup bugs, not
/// runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("An exercise needs at least one phase")]
    NoPhases,

    #[error("Phase {index} ({name}) has a zero-second duration")]
    ZeroDuration { index: usize, name: String },

    #[error("Cycle limit must be at least 1")]
    ZeroCycles,
}

/// Result of advancing the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    /// A new phase became active.
    Phase(&'a Phase),
    /// No phases or cycles remain.
    Finished,
}

/// Ordered sequence of phases with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    phases: Vec<Phase>,
    current_index: usize,
    cycle_count: u32,
    max_cycles: CycleLimit,
}

impl Timeline {
    /// Build a timeline, rejecting empty phase lists, zero-length phases and a
    /// zero cycle limit.
    pub fn new(phases: Vec<Phase>, max_cycles: CycleLimit) -> Result<Self, TimelineError> {
        if phases.is_empty() {
            return Err(TimelineError::NoPhases);
        }
        if let Some((index, phase)) = phases
            .iter()
            .enumerate()
            .find(|(_, p)| p.duration_seconds == 0)
        {
            return Err(TimelineError::ZeroDuration {
                index,
                name: phase.name.to_string(),
            });
        }
        if max_cycles == CycleLimit::Finite(0) {
            return Err(TimelineError::ZeroCycles);
        }

        Ok(Self {
            phases,
            current_index: 0,
            cycle_count: 0,
            max_cycles,
        })
    }

    /// Rewind to the first phase of the first cycle and return it.
    pub fn start(&mut self) -> &Phase {
        self.current_index = 0;
        self.cycle_count = 1;
        &self.phases[0]
    }

    /// Move past the current phase.
    pub fn advance(&mut self) -> Step<'_> {
        if self.current_index + 1 < self.phases.len() {
            self.current_index += 1;
            return Step::Phase(&self.phases[self.current_index]);
        }

        let more_cycles = match self.max_cycles {
            CycleLimit::Finite(max) => self.cycle_count < max,
            CycleLimit::Unbounded => true,
        };

        if more_cycles {
            self.current_index = 0;
            self.cycle_count = self.cycle_count.saturating_add(1);
            Step::Phase(&self.phases[0])
        } else {
            Step::Finished
        }
    }

    /// The phase under the cursor.
    #[must_use]
    pub fn current(&self) -> &Phase {
        &self.phases[self.current_index]
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number of the cycle in progress (0 before `start`).
    #[must_use]
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    #[must_use]
    pub const fn max_cycles(&self) -> CycleLimit {
        self.max_cycles
    }

    /// Seconds in one pass through the phase list.
    #[must_use]
    pub fn cycle_seconds(&self) -> u64 {
        self.phases
            .iter()
            .map(|p| u64::from(p.duration_seconds))
            .sum()
    }

    /// Seconds for the whole run, or `None` when the timeline loops forever.
    #[must_use]
    pub fn total_seconds(&self) -> Option<u64> {
        self.max_cycles
            .as_finite()
            .map(|cycles| self.cycle_seconds() * u64::from(cycles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::phase::PhaseName;

    fn phases(durations: &[(PhaseName, u32)]) -> Vec<Phase> {
        durations
            .iter()
            .map(|(name, secs)| Phase::new(*name, *secs, name.as_str()))
            .collect()
    }

    #[test]
    fn empty_timeline_is_rejected() {
        assert_eq!(
            Timeline::new(Vec::new(), CycleLimit::Finite(1)).unwrap_err(),
            TimelineError::NoPhases
        );
    }

    #[test]
    fn zero_duration_phase_is_rejected() {
        let err = Timeline::new(
            phases(&[(PhaseName::Inhale, 4), (PhaseName::Hold, 0)]),
            CycleLimit::Unbounded,
        )
        .unwrap_err();
        assert_eq!(
            err,
            TimelineError::ZeroDuration {
                index: 1,
                name: "Hold".to_string()
            }
        );
    }

    #[test]
    fn zero_cycles_is_rejected() {
        let err = Timeline::new(phases(&[(PhaseName::Inhale, 4)]), CycleLimit::Finite(0))
            .unwrap_err();
        assert_eq!(err, TimelineError::ZeroCycles);
    }

    #[test]
    fn single_cycle_walks_phases_then_finishes() {
        let mut timeline = Timeline::new(
            phases(&[
                (PhaseName::Notice, 4),
                (PhaseName::Park, 4),
                (PhaseName::Refocus, 4),
            ]),
            CycleLimit::Finite(1),
        )
        .unwrap();

        assert_eq!(timeline.start().name, PhaseName::Notice);
        assert!(matches!(timeline.advance(), Step::Phase(p) if p.name == PhaseName::Park));
        assert!(matches!(timeline.advance(), Step::Phase(p) if p.name == PhaseName::Refocus));
        assert_eq!(timeline.advance(), Step::Finished);
        assert_eq!(timeline.cycle_count(), 1);
    }

    #[test]
    fn finite_cycles_wrap_then_finish() {
        let mut timeline = Timeline::new(
            phases(&[(PhaseName::Inhale, 4), (PhaseName::Exhale, 8)]),
            CycleLimit::Finite(2),
        )
        .unwrap();

        timeline.start();
        assert!(matches!(timeline.advance(), Step::Phase(p) if p.name == PhaseName::Exhale));
        assert!(matches!(timeline.advance(), Step::Phase(p) if p.name == PhaseName::Inhale));
        assert_eq!(timeline.cycle_count(), 2);
        assert_eq!(timeline.current_index(), 0);
        assert!(matches!(timeline.advance(), Step::Phase(p) if p.name == PhaseName::Exhale));
        assert_eq!(timeline.advance(), Step::Finished);
    }

    #[test]
    fn unbounded_timeline_keeps_looping() {
        let mut timeline =
            Timeline::new(phases(&[(PhaseName::Inhale, 4)]), CycleLimit::Unbounded).unwrap();
        timeline.start();
        for expected_cycle in 2..50 {
            assert!(matches!(timeline.advance(), Step::Phase(_)));
            assert_eq!(timeline.cycle_count(), expected_cycle);
        }
        assert_eq!(timeline.total_seconds(), None);
    }

    #[test]
    fn start_rewinds_cursor_and_cycle() {
        let mut timeline = Timeline::new(
            phases(&[(PhaseName::Inhale, 4), (PhaseName::Exhale, 4)]),
            CycleLimit::Finite(3),
        )
        .unwrap();
        timeline.start();
        timeline.advance();
        timeline.advance();
        assert_eq!(timeline.cycle_count(), 2);

        assert_eq!(timeline.start().name, PhaseName::Inhale);
        assert_eq!(timeline.current_index(), 0);
        assert_eq!(timeline.cycle_count(), 1);
    }

    #[test]
    fn total_seconds_is_cycle_length_times_cycles() {
        let timeline = Timeline::new(
            phases(&[
                (PhaseName::Inhale, 4),
                (PhaseName::TopUp, 1),
                (PhaseName::Exhale, 8),
            ]),
            CycleLimit::Finite(2),
        )
        .unwrap();
        assert_eq!(timeline.cycle_seconds(), 13);
        assert_eq!(timeline.total_seconds(), Some(26));
    }
}
