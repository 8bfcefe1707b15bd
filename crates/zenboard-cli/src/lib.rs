//! `zenboard` command-line front end.
//!
//! The binary in `main.rs` parses arguments, builds a [`CliContext`] and
//! hands each subcommand to a thin handler. Everything interesting lives in
//! `zenboard-core`, `zenboard-voice` and `zenboard-genai`; this crate only
//! wires them together and draws the terminal output.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by the binary target only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
