//! Phase domain types.
//!
//! A [`Phase`] is one named, timed step of a guided exercise (Inhale, Hold,
//! Park, ...). Phases are immutable once built; the exercise catalog declares
//! them as static ordered lists.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Name of a phase within a guided exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhaseName {
    Inhale,
    Hold,
    Exhale,
    TopUp,
    Notice,
    Park,
    Refocus,
}

impl PhaseName {
    /// Short label shown next to the countdown.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
            Self::TopUp => "Top-up",
            Self::Notice => "Notice",
            Self::Park => "Park",
            Self::Refocus => "Refocus",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Side effect the controller performs when a phase is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhaseCue {
    /// Draw a fresh line from the phase's caption variants.
    DrawAffirmation,
}

/// Caption displayed under the heading while a phase is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "text")]
pub enum Caption {
    /// The same text on every entry.
    Fixed(String),
    /// One of several equivalent lines, picked uniformly on each entry.
    OneOf(Vec<String>),
}

impl Caption {
    /// Pick the caption text for one entry into the phase.
    ///
    /// Randomness is unconstrained: callers may only rely on the result being
    /// one of the declared lines.
    #[must_use]
    pub fn pick(&self) -> Option<&str> {
        match self {
            Self::Fixed(text) => Some(text.as_str()),
            Self::OneOf(lines) => lines
                .choose(&mut rand::thread_rng())
                .map(String::as_str),
        }
    }
}

/// A named, timed step of a guided exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Which step this is.
    pub name: PhaseName,

    /// How long the phase lasts, in whole seconds (always > 0 once validated).
    pub duration_seconds: u32,

    /// Heading shown while the phase is active.
    pub heading: String,

    /// Supporting caption.
    pub caption: Caption,

    /// Script sent to the narration service on entry, if any.
    pub narration_script: Option<String>,

    /// Extra effect to run on entry.
    pub on_enter: Option<PhaseCue>,
}

impl Phase {
    /// Create a phase whose heading doubles as its caption.
    #[must_use]
    pub fn new(name: PhaseName, duration_seconds: u32, heading: impl Into<String>) -> Self {
        let heading = heading.into();
        Self {
            name,
            duration_seconds,
            caption: Caption::Fixed(heading.clone()),
            heading,
            narration_script: None,
            on_enter: None,
        }
    }

    /// Replace the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }

    /// Attach a narration script.
    #[must_use]
    pub fn with_narration(mut self, script: impl Into<String>) -> Self {
        self.narration_script = Some(script.into());
        self
    }

    /// Attach an on-enter cue.
    #[must_use]
    pub const fn with_cue(mut self, cue: PhaseCue) -> Self {
        self.on_enter = Some(cue);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_caption_always_returns_its_text() {
        let caption = Caption::Fixed("Breathe".to_string());
        assert_eq!(caption.pick(), Some("Breathe"));
    }

    #[test]
    fn one_of_caption_picks_a_declared_line() {
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let caption = Caption::OneOf(lines.clone());
        for _ in 0..50 {
            let picked = caption.pick().unwrap();
            assert!(lines.iter().any(|l| l == picked));
        }
    }

    #[test]
    fn empty_one_of_caption_yields_nothing() {
        assert_eq!(Caption::OneOf(Vec::new()).pick(), None);
    }

    #[test]
    fn phase_builder_sets_optional_fields() {
        let phase = Phase::new(PhaseName::Refocus, 5, "Focus on this")
            .with_narration("Say it to yourself")
            .with_cue(PhaseCue::DrawAffirmation);
        assert_eq!(phase.caption, Caption::Fixed("Focus on this".to_string()));
        assert_eq!(phase.narration_script.as_deref(), Some("Say it to yourself"));
        assert_eq!(phase.on_enter, Some(PhaseCue::DrawAffirmation));
    }

    #[test]
    fn phase_name_serializes_camel_case() {
        let json = serde_json::to_string(&PhaseName::TopUp).unwrap();
        assert_eq!(json, "\"topUp\"");
        assert_eq!(PhaseName::TopUp.to_string(), "Top-up");
    }
}
