//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are instantiated
//! for the CLI:
//! - Settings resolved from flags and environment
//! - The Gemini client (via zenboard-genai), shared by every port
//!
//! Command handlers receive the composed [`CliContext`] and ask it for the
//! ports they need.

use std::sync::Arc;

use zenboard_core::{NarrationProvider, Settings, TextGenerator, validate_settings};
use zenboard_genai::{GeminiClient, GeminiConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Legacy name for the API key, accepted when `GEMINI_API_KEY` is unset.
pub const API_KEY_ALIAS: &str = "API_KEY";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Resolve settings from parsed arguments, falling back to `API_KEY`.
    pub fn from_cli(cli: &Cli) -> Self {
        let alias = std::env::var(API_KEY_ALIAS).ok();
        Self::from_parts(cli, alias)
    }

    fn from_parts(cli: &Cli, key_alias: Option<String>) -> Self {
        Self {
            settings: Settings {
                api_key: cli.api_key.clone().or(key_alias),
                text_model: cli.text_model.clone(),
                narration_model: cli.narration_model.clone(),
                narration_voice: cli.voice.clone(),
                narration_enabled: None,
                request_timeout_secs: cli.timeout_secs,
            },
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    settings: Settings,
    gemini: Arc<GeminiClient>,
}

impl CliContext {
    /// Text port for the coach and simulator.
    pub fn text_generator(&self) -> Arc<dyn TextGenerator> {
        self.gemini.clone()
    }

    /// Narration port, or `None` when muted or narration is unavailable.
    pub fn narrator(&self, mute: bool) -> Option<Arc<dyn NarrationProvider>> {
        if mute || !self.settings.narration_active() {
            return None;
        }
        let narrator: Arc<dyn NarrationProvider> = self.gemini.clone();
        Some(narrator)
    }
}

/// Validate settings and build the adapters.
///
/// A missing API key is not an error: the client refuses remote calls and
/// the services fall back to their offline copy.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let CliConfig { settings } = config;
    validate_settings(&settings)?;

    if !settings.has_api_key() {
        tracing::warn!("No GEMINI_API_KEY set; narration is off and the coach replies offline");
    }

    let gemini = GeminiClient::new(GeminiConfig::from_settings(&settings))?;
    tracing::debug!(
        text_model = settings.effective_text_model(),
        narration_model = settings.effective_narration_model(),
        voice = settings.effective_narration_voice(),
        "CLI context ready"
    );

    Ok(CliContext {
        settings,
        gemini: Arc::new(gemini),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["zenboard"];
        argv.extend_from_slice(args);
        argv.push("exercises");
        Cli::parse_from(argv)
    }

    #[test]
    fn flag_key_wins_over_alias() {
        let config = CliConfig::from_parts(&cli(&["--api-key", "flag"]), Some("alias".into()));
        assert_eq!(config.settings.api_key.as_deref(), Some("flag"));
    }

    #[test]
    fn alias_fills_missing_key() {
        let mut parsed = cli(&[]);
        parsed.api_key = None;
        let config = CliConfig::from_parts(&parsed, Some("alias".into()));
        assert_eq!(config.settings.api_key.as_deref(), Some("alias"));
    }

    #[test]
    fn blank_key_fails_bootstrap() {
        let config = CliConfig::from_parts(&cli(&["--api-key", "  "]), None);
        let err = bootstrap(config).err().unwrap();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn narrator_needs_key_and_sound() {
        let mut parsed = cli(&[]);
        parsed.api_key = None;
        let offline = bootstrap(CliConfig::from_parts(&parsed, None)).unwrap();
        assert!(offline.narrator(false).is_none());

        let online = bootstrap(CliConfig::from_parts(&cli(&["--api-key", "k"]), None)).unwrap();
        assert!(online.narrator(false).is_some());
        assert!(online.narrator(true).is_none());
    }

    #[test]
    fn overrides_reach_settings() {
        let config = CliConfig::from_parts(
            &cli(&["--voice", "Puck", "--text-model", "m", "--timeout", "5"]),
            None,
        );
        assert_eq!(config.settings.effective_narration_voice(), "Puck");
        assert_eq!(config.settings.effective_text_model(), "m");
        assert_eq!(config.settings.effective_request_timeout_secs(), 5);
    }
}
