//! Main commands enum.

use clap::Subcommand;
use zenboard_core::ExerciseKind;

/// Available `zenboard` commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the guided exercises
    Exercises,

    /// Run a guided exercise with a live countdown (Ctrl+C stops it)
    Breathe {
        /// Exercise to run: box, sigh or noise
        exercise: ExerciseKind,
        /// Override the number of cycles (finite exercises only)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        cycles: Option<u32>,
        /// Run without spoken narration
        #[arg(short, long)]
        mute: bool,
    },

    /// List the exam-panic scenarios
    Scenarios,

    /// Practise a scenario and get feedback on your plan
    Simulate {
        /// Scenario id (see `zenboard scenarios`)
        scenario: String,
        /// What you would do; prompted for when omitted
        #[arg(short, long)]
        response: Option<String>,
        /// Quick-pick strategy, may be repeated
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Chat with the study coach
    Coach,
}
