//! `zenboard simulate` - practise a scenario and get coach feedback.

use zenboard_core::{SCENARIOS, SimulatorService, StrategyResponse, find_scenario};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{MarkdownPrinter, thinking_spinner};
use crate::utils::input::prompt_string;

/// Arguments for the simulate command.
#[derive(Debug, Clone)]
pub struct SimulateArgs {
    pub scenario: String,
    pub response: Option<String>,
    pub tags: Vec<String>,
}

/// Execute the simulate command.
///
/// Prompts for a response when neither `--response` nor `--tag` was given.
pub async fn execute(ctx: &CliContext, args: SimulateArgs) -> Result<(), CliError> {
    let SimulateArgs {
        scenario,
        response,
        tags,
    } = args;

    let scenario = find_scenario(&scenario).ok_or_else(|| {
        let ids: Vec<&str> = SCENARIOS.iter().map(|s| s.id).collect();
        CliError::Arguments(format!(
            "unknown scenario '{scenario}' (expected one of: {})",
            ids.join(", ")
        ))
    })?;

    println!("{} {}", scenario.icon, scenario.title);
    println!("{}\n", scenario.description);

    let text = match response {
        Some(text) => text,
        None if !tags.is_empty() => String::new(),
        None => match prompt_string("What would you do? > ")? {
            Some(line) => line,
            None => return Ok(()),
        },
    };
    let strategy = StrategyResponse::new(text, tags);

    let service = SimulatorService::new(ctx.text_generator());
    let spinner = thinking_spinner("Coach is reading your plan...");
    let feedback = service.feedback(scenario.id, &strategy).await;
    spinner.finish_and_clear();

    MarkdownPrinter::new().print(&feedback?);
    Ok(())
}
