//! Exam panic scenarios used by the simulator.

use serde::{Deserialize, Serialize};

/// A scripted exam-hall situation the student practises responding to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The fixed scenario set.
pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        id: "jitter",
        title: "Pre-Exam Jitters",
        description: "You are sitting at your desk, and the invigilator is about to distribute the question papers. Your heart is racing.",
        icon: "\u{23f3}",
    },
    Scenario {
        id: "blackout",
        title: "The Blackout",
        description: "You open the paper, see the first three questions, and realize you don't know the answer to any of them immediately.",
        icon: "\u{1f635}",
    },
    Scenario {
        id: "stuck",
        title: "Tough Question Trap",
        description: "You've spent 15 minutes on a math problem and you're still not getting the answer. You feel panic rising.",
        icon: "\u{1f9e9}",
    },
    Scenario {
        id: "timer",
        title: "Running Out of Time",
        description: "The final bell rings in 15 minutes, but you still have two long-answer questions worth 10 marks left.",
        icon: "\u{23f1}\u{fe0f}",
    },
];

/// Look up a scenario by id (case-insensitive).
#[must_use]
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

/// What the student says they would do in a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResponse {
    /// Free-text answer.
    pub text: String,
    /// Quick-pick strategy tags (e.g. "deep breaths", "skip the question").
    pub tags: Vec<String>,
}

impl StrategyResponse {
    #[must_use]
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Whether the student has said nothing usable.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.tags.iter().all(|t| t.trim().is_empty())
    }

    /// Render the response as a single sentence for the prompt.
    #[must_use]
    pub fn describe(&self) -> String {
        let text = self.text.trim();
        let tags: Vec<&str> = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();

        match (text.is_empty(), tags.is_empty()) {
            (false, true) => text.to_string(),
            (true, false) => format!("I would: {}", tags.join(", ")),
            (false, false) => format!("{text} (strategies: {})", tags.join(", ")),
            (true, true) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_ids_are_unique() {
        let mut ids: Vec<_> = SCENARIOS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SCENARIOS.len());
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_scenario("BLACKOUT").unwrap().title, "The Blackout");
        assert!(find_scenario("fire-drill").is_none());
    }

    #[test]
    fn blank_response_detection() {
        assert!(StrategyResponse::default().is_blank());
        assert!(StrategyResponse::new("   ", vec![" ".to_string()]).is_blank());
        assert!(!StrategyResponse::new("", vec!["skip it".to_string()]).is_blank());
    }

    #[test]
    fn describe_combines_text_and_tags() {
        let only_text = StrategyResponse::new("Take three breaths", Vec::new());
        assert_eq!(only_text.describe(), "Take three breaths");

        let only_tags =
            StrategyResponse::new("", vec!["breathe".to_string(), "skip".to_string()]);
        assert_eq!(only_tags.describe(), "I would: breathe, skip");

        let both = StrategyResponse::new("Move on", vec!["breathe".to_string()]);
        assert_eq!(both.describe(), "Move on (strategies: breathe)");
    }
}
