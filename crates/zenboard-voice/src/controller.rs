//! Guided exercise controller.
//!
//! Drives a [`Timeline`] with a one-second countdown, requests narration for
//! each scripted phase and hands the audio to a [`SpeechOutput`].
//!
//! # State machine
//!
//! ```text
//!   Idle ──start()──▶ Running ──timeline done──▶ Finished
//!    ▲                   │
//!    │                   └──cancel()──▶ Cancelled
//!    └──────────────reset()──────────────┘
//! ```
//!
//! # Stale narration
//!
//! Every phase entry, cancel and finish bumps a generation counter. A
//! narration request carries the run id and generation it was issued under;
//! when it resolves, it only plays if both still match and the run is still
//! `Running`. The check and the call to `play` happen under the same lock as
//! the bump, so a late response can never start audio for a phase that has
//! already ended.
//!
//! The request task itself is aborted when its phase ends, so a slow
//! narration service never accumulates superseded requests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use zenboard_core::{
    ExerciseDefinition, ExerciseSnapshot, ExerciseState, NarrationAudio, NarrationProvider, Phase,
    PhaseCue, PhaseName, RemoteServiceError, Step, Timeline,
};

use crate::error::ExerciseError;
use crate::output::SpeechOutput;

/// Events emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseEvent {
    /// Run state changed.
    StateChanged(ExerciseState),

    /// A phase became active.
    PhaseEntered {
        name: PhaseName,
        heading: String,
        caption: String,
        cycle: u32,
        duration_seconds: u32,
    },

    /// One second elapsed in the active phase.
    Tick { remaining_seconds: u32 },

    /// A self-talk line was drawn on phase entry.
    AffirmationDrawn(String),

    /// A narration request for the active phase started or settled.
    NarrationLoading { phase: PhaseName, loading: bool },

    /// Narration audio started playing.
    NarrationStarted(PhaseName),
}

/// Configuration for the exercise controller.
#[derive(Debug, Clone)]
pub struct ExerciseControllerConfig {
    /// Countdown period. One second outside tests.
    pub tick_interval: Duration,
}

impl Default for ExerciseControllerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Identifies the phase entry a narration request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NarrationTicket {
    run_id: u64,
    generation: u64,
    phase: PhaseName,
}

/// Mutable state of the current run.
struct RunState {
    run_id: u64,
    state: ExerciseState,
    timeline: Timeline,
    remaining_seconds: u32,
    generation: u64,
    caption: Option<String>,
    pending_narration: Option<NarrationTicket>,
    narration_task: Option<JoinHandle<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl RunState {
    fn fresh(run_id: u64, timeline: Timeline) -> Self {
        Self {
            run_id,
            state: ExerciseState::Idle,
            timeline,
            remaining_seconds: 0,
            generation: 0,
            caption: None,
            pending_narration: None,
            narration_task: None,
            ticker: None,
        }
    }

    fn is_current(&self, ticket: NarrationTicket) -> bool {
        self.state == ExerciseState::Running
            && self.run_id == ticket.run_id
            && self.generation == ticket.generation
    }

    /// Drop the in-flight narration request, if any.
    fn abort_narration(&mut self) {
        self.pending_narration = None;
        if let Some(task) = self.narration_task.take() {
            task.abort();
        }
    }
}

struct Shared {
    definition: ExerciseDefinition,
    /// Pristine timeline, cloned for each run.
    template: Timeline,
    narrator: Option<Arc<dyn NarrationProvider>>,
    speech: Arc<dyn SpeechOutput>,
    config: ExerciseControllerConfig,
    event_tx: mpsc::UnboundedSender<ExerciseEvent>,
    run: Mutex<RunState>,
}

/// Runs one exercise definition, any number of times.
///
/// Cheap to clone; clones control the same run.
#[derive(Clone)]
pub struct ExerciseController {
    shared: Arc<Shared>,
}

impl ExerciseController {
    /// Create a controller with the default one-second tick.
    ///
    /// Returns the controller and a receiver for [`ExerciseEvent`]s. Pass
    /// `None` as `narrator` to run without narration.
    pub fn new(
        definition: ExerciseDefinition,
        narrator: Option<Arc<dyn NarrationProvider>>,
        speech: Arc<dyn SpeechOutput>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ExerciseEvent>), ExerciseError> {
        Self::with_config(
            definition,
            narrator,
            speech,
            ExerciseControllerConfig::default(),
        )
    }

    /// Create a controller with explicit configuration.
    pub fn with_config(
        definition: ExerciseDefinition,
        narrator: Option<Arc<dyn NarrationProvider>>,
        speech: Arc<dyn SpeechOutput>,
        config: ExerciseControllerConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ExerciseEvent>), ExerciseError> {
        let template = definition.timeline()?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let shared = Arc::new(Shared {
            run: Mutex::new(RunState::fresh(1, template.clone())),
            definition,
            template,
            narrator,
            speech,
            config,
            event_tx,
        });

        Ok((Self { shared }, event_rx))
    }

    /// The exercise being run.
    pub fn definition(&self) -> &ExerciseDefinition {
        &self.shared.definition
    }

    /// Current run state.
    pub fn state(&self) -> ExerciseState {
        self.shared.lock().state
    }

    /// Point-in-time view of the run.
    pub fn snapshot(&self) -> ExerciseSnapshot {
        let run = self.shared.lock();
        let total_cycles = run.timeline.max_cycles().as_finite();
        if run.state == ExerciseState::Idle {
            return ExerciseSnapshot::idle(total_cycles);
        }

        let running = run.state == ExerciseState::Running;
        let phase = running.then(|| run.timeline.current());
        ExerciseSnapshot {
            state: run.state,
            phase: phase.map(|p| p.name),
            heading: phase.map(|p| p.heading.clone()),
            caption: if running { run.caption.clone() } else { None },
            remaining_seconds: if running { run.remaining_seconds } else { 0 },
            cycle: run.timeline.cycle_count(),
            total_cycles,
            is_narration_loading: running && run.pending_narration.is_some(),
        }
    }

    /// Begin the run. Valid only from `Idle`.
    ///
    /// Prepares the speech output as part of the same call; a device failure
    /// is logged and the exercise runs without audio.
    pub fn start(&self) -> Result<(), ExerciseError> {
        let runtime = Handle::try_current().map_err(|_| ExerciseError::NoRuntime)?;
        let shared = &self.shared;
        Self::require_idle(&shared.lock())?;

        // Opening the device can take a while; keep the run unlocked and,
        // on a multi-threaded runtime, the worker free meanwhile.
        let prepared = if runtime.runtime_flavor() == RuntimeFlavor::MultiThread {
            tokio::task::block_in_place(|| shared.speech.prepare())
        } else {
            shared.speech.prepare()
        };
        if let Err(e) = prepared {
            tracing::warn!(error = %e, "Speech output unavailable, continuing without audio");
        }

        let mut run = shared.lock();
        Self::require_idle(&run)?;

        tracing::info!(
            exercise = %shared.definition.kind,
            run_id = run.run_id,
            "Starting exercise"
        );
        shared.set_state(&mut run, ExerciseState::Running);

        let first = run.timeline.start().clone();
        shared.enter_phase(&mut run, &first, &runtime);

        let ticker = Shared::spawn_ticker(shared, run.run_id, &runtime);
        run.ticker = Some(ticker);
        Ok(())
    }

    fn require_idle(run: &RunState) -> Result<(), ExerciseError> {
        if run.state == ExerciseState::Idle {
            Ok(())
        } else {
            Err(ExerciseError::InvalidTransition {
                action: "start",
                state: run.state,
            })
        }
    }

    /// Stop the run early. Valid only from `Running`.
    ///
    /// The countdown, the audio and any in-flight narration are all
    /// invalidated before this returns.
    pub fn cancel(&self) -> Result<(), ExerciseError> {
        let mut run = self.shared.lock();
        if run.state != ExerciseState::Running {
            return Err(ExerciseError::InvalidTransition {
                action: "cancel",
                state: run.state,
            });
        }

        tracing::info!(run_id = run.run_id, "Exercise cancelled");
        self.shared.halt(&mut run, ExerciseState::Cancelled);
        Ok(())
    }

    /// Return to `Idle` with a fresh run.
    ///
    /// A running exercise is halted first. Counters, the timeline and the
    /// generation all start over under a new run id.
    pub fn reset(&self) {
        let mut run = self.shared.lock();
        if run.state == ExerciseState::Running {
            self.shared.halt(&mut run, ExerciseState::Cancelled);
        }

        let next_id = run.run_id + 1;
        *run = RunState::fresh(next_id, self.shared.template.clone());
        tracing::debug!(run_id = next_id, "Exercise reset");
        self.shared.emit(ExerciseEvent::StateChanged(ExerciseState::Idle));
    }

    /// Release the audio device. Call when the exercise UI exits.
    pub fn shutdown(&self) {
        {
            let mut run = self.shared.lock();
            if run.state == ExerciseState::Running {
                self.shared.halt(&mut run, ExerciseState::Cancelled);
            }
        }
        self.shared.speech.shutdown();
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.run.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_ticker(self: &Arc<Self>, run_id: u64, runtime: &Handle) -> JoinHandle<()> {
        let weak: Weak<Self> = Arc::downgrade(self);
        let period = self.config.tick_interval;
        let task_runtime = runtime.clone();

        runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let Some(shared) = weak.upgrade() else { break };
                if !shared.tick(run_id, &task_runtime) {
                    break;
                }
            }
        })
    }

    /// One countdown step. Returns whether the ticker should keep going.
    fn tick(self: &Arc<Self>, run_id: u64, runtime: &Handle) -> bool {
        let mut run = self.lock();
        if run.run_id != run_id || run.state != ExerciseState::Running {
            return false;
        }

        run.remaining_seconds = run.remaining_seconds.saturating_sub(1);
        self.emit(ExerciseEvent::Tick {
            remaining_seconds: run.remaining_seconds,
        });
        if run.remaining_seconds > 0 {
            return true;
        }

        let next = match run.timeline.advance() {
            Step::Phase(phase) => Some(phase.clone()),
            Step::Finished => None,
        };

        match next {
            Some(phase) => {
                self.enter_phase(&mut run, &phase, runtime);
                true
            }
            None => {
                tracing::info!(run_id, "Exercise finished");
                self.halt(&mut run, ExerciseState::Finished);
                false
            }
        }
    }

    /// Activate `phase`: invalidate the previous one, reset the countdown,
    /// request narration and run the entry cue.
    fn enter_phase(self: &Arc<Self>, run: &mut RunState, phase: &Phase, runtime: &Handle) {
        run.generation += 1;
        self.speech.stop();

        run.remaining_seconds = phase.duration_seconds;
        let caption = phase.caption.pick().unwrap_or(phase.heading.as_str()).to_string();
        run.caption = Some(caption.clone());

        tracing::debug!(
            phase = %phase.name,
            cycle = run.timeline.cycle_count(),
            generation = run.generation,
            "Phase entered"
        );
        self.emit(ExerciseEvent::PhaseEntered {
            name: phase.name,
            heading: phase.heading.clone(),
            caption: caption.clone(),
            cycle: run.timeline.cycle_count(),
            duration_seconds: phase.duration_seconds,
        });

        if phase.on_enter == Some(PhaseCue::DrawAffirmation) {
            self.emit(ExerciseEvent::AffirmationDrawn(caption));
        }

        run.abort_narration();
        let (Some(script), Some(narrator)) = (&phase.narration_script, &self.narrator) else {
            return;
        };

        let ticket = NarrationTicket {
            run_id: run.run_id,
            generation: run.generation,
            phase: phase.name,
        };
        run.pending_narration = Some(ticket);
        self.emit(ExerciseEvent::NarrationLoading {
            phase: phase.name,
            loading: true,
        });

        let weak = Arc::downgrade(self);
        let narrator = Arc::clone(narrator);
        let script = script.clone();
        let task = runtime.spawn(async move {
            let result = narrator.narrate(&script).await;
            if let Some(shared) = weak.upgrade() {
                shared.resolve_narration(ticket, result);
            }
        });
        run.narration_task = Some(task);
    }

    /// Play a narration response if it still belongs to the active phase.
    fn resolve_narration(
        &self,
        ticket: NarrationTicket,
        result: Result<NarrationAudio, RemoteServiceError>,
    ) {
        let mut run = self.lock();
        if !run.is_current(ticket) {
            tracing::debug!(
                phase = %ticket.phase,
                generation = ticket.generation,
                current = run.generation,
                "Discarding stale narration"
            );
            return;
        }

        run.pending_narration = None;
        run.narration_task = None;
        self.emit(ExerciseEvent::NarrationLoading {
            phase: ticket.phase,
            loading: false,
        });

        match result {
            Ok(audio) => match self.speech.play(&audio) {
                Ok(()) => {
                    tracing::debug!(
                        phase = %ticket.phase,
                        length_ms = audio.duration().as_millis(),
                        "Narration playing"
                    );
                    self.emit(ExerciseEvent::NarrationStarted(ticket.phase));
                }
                Err(e) => tracing::warn!(phase = %ticket.phase, error = %e, "Narration playback failed"),
            },
            Err(e) => {
                tracing::warn!(phase = %ticket.phase, error = %e, "Narration request failed");
            }
        }
    }

    /// End the run: stop the countdown and audio and invalidate narration.
    fn halt(&self, run: &mut RunState, terminal: ExerciseState) {
        if let Some(ticker) = run.ticker.take() {
            ticker.abort();
        }
        self.speech.stop();
        run.generation += 1;
        run.abort_narration();
        run.remaining_seconds = 0;
        self.set_state(run, terminal);
    }

    fn set_state(&self, run: &mut RunState, new_state: ExerciseState) {
        if run.state != new_state {
            tracing::debug!(old = %run.state, new = %new_state, "Exercise state transition");
            run.state = new_state;
            self.emit(ExerciseEvent::StateChanged(new_state));
        }
    }

    /// Emit an event (best-effort; a dropped receiver is not an error).
    fn emit(&self, event: ExerciseEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::trace!("Exercise event receiver dropped");
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let run = self.run.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(ticker) = run.ticker.take() {
            ticker.abort();
        }
        run.abort_narration();
        self.speech.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SilentOutput;
    use zenboard_core::ExerciseKind;

    fn controller(kind: ExerciseKind) -> (ExerciseController, mpsc::UnboundedReceiver<ExerciseEvent>) {
        ExerciseController::new(kind.definition(), None, Arc::new(SilentOutput)).unwrap()
    }

    #[test]
    fn starts_idle() {
        let (ctrl, _rx) = controller(ExerciseKind::PhysiologicalSigh);
        let snap = ctrl.snapshot();
        assert_eq!(snap.state, ExerciseState::Idle);
        assert_eq!(snap.total_cycles, Some(2));
        assert!(snap.phase.is_none());
    }

    #[test]
    fn start_outside_runtime_is_an_error() {
        let (ctrl, _rx) = controller(ExerciseKind::BoxBreathing);
        assert_eq!(ctrl.start(), Err(ExerciseError::NoRuntime));
        assert_eq!(ctrl.state(), ExerciseState::Idle);
    }

    #[test]
    fn cancel_requires_running() {
        let (ctrl, _rx) = controller(ExerciseKind::BoxBreathing);
        assert_eq!(
            ctrl.cancel(),
            Err(ExerciseError::InvalidTransition {
                action: "cancel",
                state: ExerciseState::Idle
            })
        );
    }

    #[test]
    fn zero_cycle_override_is_rejected() {
        let definition = ExerciseKind::ClearTheNoise.definition().with_cycles(0);
        let result = ExerciseController::new(definition, None, Arc::new(SilentOutput));
        assert!(matches!(result, Err(ExerciseError::InvalidTimeline(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn start_enters_first_phase() {
        let (ctrl, mut rx) = controller(ExerciseKind::BoxBreathing);
        ctrl.start().unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            ExerciseEvent::StateChanged(ExerciseState::Running)
        );
        assert!(matches!(
            rx.try_recv().unwrap(),
            ExerciseEvent::PhaseEntered { name: PhaseName::Inhale, cycle: 1, duration_seconds: 4, .. }
        ));

        let snap = ctrl.snapshot();
        assert_eq!(snap.phase, Some(PhaseName::Inhale));
        assert_eq!(snap.remaining_seconds, 4);
        assert!(!snap.is_narration_loading);

        assert_eq!(
            ctrl.start(),
            Err(ExerciseError::InvalidTransition {
                action: "start",
                state: ExerciseState::Running
            })
        );
    }
}
