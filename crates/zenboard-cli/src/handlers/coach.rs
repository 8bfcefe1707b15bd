//! `zenboard coach` - interactive chat with the study coach.

use zenboard_core::{CoachError, CoachSession};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{MarkdownPrinter, thinking_spinner};
use crate::utils::input::{LinePrompt, is_exit_command};

/// Execute the coach command.
///
/// Reads lines until Ctrl+D, Ctrl+C or `/quit`.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let mut session = CoachSession::new(ctx.text_generator());
    let printer = MarkdownPrinter::new();

    if let Some(greeting) = session.messages().first() {
        printer.print(&greeting.text);
    }
    println!("(type /quit to leave)\n");

    let mut prompt = LinePrompt::new()?;
    while let Some(line) = prompt.read_line("you > ")? {
        if line.is_empty() {
            continue;
        }
        if is_exit_command(&line) {
            break;
        }

        let spinner = thinking_spinner("Coach is typing...");
        let reply = session.send(&line).await;
        spinner.finish_and_clear();

        match reply {
            Ok(message) => {
                println!();
                printer.print(&message.text);
            }
            Err(CoachError::EmptyInput) => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(turns = session.turns(), "Coach session ended");
    println!("Good luck. You've got this.");
    Ok(())
}
