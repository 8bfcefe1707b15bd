//! Main CLI parser and top-level argument handling.
//!
//! Global options double as the configuration layer: each one can also be
//! supplied through an environment variable (or a `.env` file).

use clap::Parser;

use crate::commands::Commands;

/// Calm-down tools for exam season, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "zenboard")]
#[command(about = "Guided breathing, exam-panic drills and a study coach")]
#[command(version)]
pub struct Cli {
    /// Gemini API key. Without one, remote features fall back to offline copy
    #[arg(long = "api-key", env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for the coach and simulator
    #[arg(long = "text-model", env = "ZENBOARD_TEXT_MODEL", global = true)]
    pub text_model: Option<String>,

    /// Model used for spoken narration
    #[arg(long = "narration-model", env = "ZENBOARD_NARRATION_MODEL", global = true)]
    pub narration_model: Option<String>,

    /// Prebuilt narration voice
    #[arg(long = "voice", env = "ZENBOARD_VOICE", global = true)]
    pub voice: Option<String>,

    /// Request timeout for remote calls, in seconds
    #[arg(long = "timeout", env = "ZENBOARD_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use zenboard_core::ExerciseKind;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "zenboard",
            "--verbose",
            "--voice",
            "Puck",
            "--timeout",
            "10",
            "exercises",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.voice.as_deref(), Some("Puck"));
        assert_eq!(cli.timeout_secs, Some(10));
        assert!(matches!(cli.command, Some(Commands::Exercises)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["zenboard", "coach", "--text-model", "gemini-test", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.text_model.as_deref(), Some("gemini-test"));
    }

    #[test]
    fn test_breathe_args() {
        let cli = Cli::parse_from(["zenboard", "breathe", "sigh", "--cycles", "3", "--mute"]);
        match cli.command {
            Some(Commands::Breathe {
                exercise,
                cycles,
                mute,
            }) => {
                assert_eq!(exercise, ExerciseKind::PhysiologicalSigh);
                assert_eq!(cycles, Some(3));
                assert!(mute);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_breathe_rejects_unknown_exercise() {
        let err = Cli::try_parse_from(["zenboard", "breathe", "yoga"]).unwrap_err();
        assert!(err.to_string().contains("unknown exercise"));
    }

    #[test]
    fn test_breathe_rejects_zero_cycles() {
        assert!(Cli::try_parse_from(["zenboard", "breathe", "noise", "--cycles", "0"]).is_err());
    }

    #[test]
    fn test_simulate_collects_tags() {
        let cli = Cli::parse_from([
            "zenboard",
            "simulate",
            "stuck",
            "--tag",
            "skip the question",
            "--tag",
            "deep breaths",
        ]);
        match cli.command {
            Some(Commands::Simulate {
                scenario,
                response,
                tags,
            }) => {
                assert_eq!(scenario, "stuck");
                assert_eq!(response, None);
                assert_eq!(tags, vec!["skip the question", "deep breaths"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["zenboard"]);
        assert!(cli.command.is_none());
    }
}
