//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Handlers own the control flow; these helpers only draw

pub mod countdown;
pub mod markdown;
pub mod spinner;
pub mod tables;

// Re-export commonly used items
pub use countdown::{CountdownDisplay, RunOutcome};
pub use markdown::{MarkdownPrinter, render_markdown};
pub use spinner::thinking_spinner;
pub use tables::{cycle_label, phase_pattern, print_separator, truncate_string};
