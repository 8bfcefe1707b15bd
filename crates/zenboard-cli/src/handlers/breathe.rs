//! `zenboard breathe` - run a guided exercise with a live countdown.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use zenboard_core::{CycleLimit, ExerciseKind};
use zenboard_voice::{
    ExerciseController, ExerciseEvent, SilentOutput, SpeechOutput, SpeechPlayback,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{CountdownDisplay, RunOutcome, phase_pattern};

/// Arguments for the breathe command.
#[derive(Debug, Clone)]
pub struct BreatheArgs {
    pub exercise: ExerciseKind,
    pub cycles: Option<u32>,
    pub mute: bool,
}

/// Execute the breathe command.
///
/// Runs until the exercise finishes or the user presses Ctrl+C.
pub async fn execute(ctx: &CliContext, args: BreatheArgs) -> Result<(), CliError> {
    let mut definition = args.exercise.definition();
    if let Some(cycles) = args.cycles {
        if definition.cycles == CycleLimit::Unbounded {
            println!("{} loops until you stop it; ignoring --cycles.", definition.title);
        }
        definition = definition.with_cycles(cycles);
    }

    let narrator = ctx.narrator(args.mute);
    let speech: Arc<dyn SpeechOutput> = if narrator.is_some() {
        Arc::new(SpeechPlayback::new())
    } else {
        Arc::new(SilentOutput)
    };

    println!("{}  \u{b7}  {}", definition.tagline, definition.title);
    println!("{}", definition.intro);
    println!("{}", phase_pattern(&definition));
    println!("Press Ctrl+C to stop.\n");

    let cycles = definition.cycles;
    let completion = definition.completion.clone();
    let (controller, mut events) = ExerciseController::new(definition, narrator, speech)?;
    let mut display = CountdownDisplay::new(cycles);

    let outcome = drive(&controller, &mut events, &mut display, ctrl_c()).await;
    controller.shutdown();

    match outcome? {
        RunOutcome::Finished => println!("\n{completion}"),
        RunOutcome::Cancelled => println!("\nStopped. Come back whenever you need a reset."),
    }
    Ok(())
}

/// Start `controller` and render its events until the run ends.
///
/// `interrupt` cancels the run when it resolves.
pub async fn drive<F>(
    controller: &ExerciseController,
    events: &mut UnboundedReceiver<ExerciseEvent>,
    display: &mut CountdownDisplay,
    interrupt: F,
) -> Result<RunOutcome, CliError>
where
    F: Future<Output = ()>,
{
    controller.start()?;
    tokio::pin!(interrupt);
    let mut interrupted = false;

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    return Err(CliError::Core("exercise controller stopped unexpectedly".into()));
                };
                if let Some(outcome) = display.handle(&event) {
                    return Ok(outcome);
                }
            }
            () = &mut interrupt, if !interrupted => {
                interrupted = true;
                if let Err(e) = controller.cancel() {
                    tracing::debug!(error = %e, "Interrupt arrived after the run ended");
                }
            }
        }
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
}
