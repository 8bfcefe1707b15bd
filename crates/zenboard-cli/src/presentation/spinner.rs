//! Spinner shown while waiting on the coach.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a ticking spinner with `message`. Call `finish_and_clear` when done.
pub fn thinking_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
