//! Exam scenario simulator - short coaching feedback on a student's plan.

use std::sync::Arc;

use tracing::{debug, warn};

use super::CoachError;
use crate::domain::scenario::{Scenario, StrategyResponse, find_scenario};
use crate::ports::TextGenerator;

/// Sampling temperature for simulator feedback.
pub const FEEDBACK_TEMPERATURE: f32 = 0.7;

/// Feedback used when the service answers with nothing.
pub const EMPTY_FEEDBACK_FALLBACK: &str = "That's a good step. Remember to keep breathing.";

/// Feedback used when the service cannot be reached.
pub const FAILED_FEEDBACK_FALLBACK: &str =
    "Great thinking. Practical tip: Focus on one step at a time.";

/// Build the one-shot prompt for a scenario and the student's strategy.
#[must_use]
pub fn feedback_prompt(scenario: &Scenario, response: &StrategyResponse) -> String {
    format!(
        "Scenario: {}\nThe student says: \"{}\"\n\nProvide a helpful, real-world piece of advice on how to handle this exact situation during an exam.\nLimit to 3 short sentences. Be practical and calming.",
        scenario.description,
        response.describe()
    )
}

/// Service producing feedback for simulator scenarios.
pub struct SimulatorService {
    generator: Arc<dyn TextGenerator>,
}

impl SimulatorService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask for feedback on how the student would handle `scenario_id`.
    ///
    /// # Errors
    ///
    /// Unknown scenario ids and blank responses are validation errors. Remote
    /// failures are absorbed into fallback copy.
    pub async fn feedback(
        &self,
        scenario_id: &str,
        response: &StrategyResponse,
    ) -> Result<String, CoachError> {
        let scenario = find_scenario(scenario_id)
            .ok_or_else(|| CoachError::UnknownScenario(scenario_id.to_string()))?;
        if response.is_blank() {
            return Err(CoachError::EmptyInput);
        }

        debug!(scenario = scenario.id, tags = response.tags.len(), "Requesting simulator feedback");

        let prompt = feedback_prompt(scenario, response);
        match self.generator.generate(&prompt, FEEDBACK_TEMPERATURE).await {
            Ok(text) if text.trim().is_empty() => Ok(EMPTY_FEEDBACK_FALLBACK.to_string()),
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(scenario = scenario.id, error = %e, "Simulator feedback failed, using fallback");
                Ok(FAILED_FEEDBACK_FALLBACK.to_string())
            }
        }
    }
}
