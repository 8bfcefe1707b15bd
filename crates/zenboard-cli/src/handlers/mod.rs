//! Command handlers for the CLI.
//!
//! Each handler is a thin adapter: it takes parsed arguments and the
//! [`CliContext`](crate::bootstrap::CliContext), calls into the core, voice
//! or simulator services, and formats the result for the terminal.

pub mod breathe;
pub mod coach;
pub mod exercises;
pub mod scenarios;
pub mod simulate;
