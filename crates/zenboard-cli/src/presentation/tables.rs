//! Table formatting utilities for CLI output.

use zenboard_core::{CycleLimit, ExerciseDefinition};

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use zenboard_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Phase rhythm of an exercise, e.g. `Inhale 4s · Hold 4s · Exhale 4s`.
pub fn phase_pattern(definition: &ExerciseDefinition) -> String {
    definition
        .phases
        .iter()
        .map(|p| format!("{} {}s", p.heading, p.duration_seconds))
        .collect::<Vec<_>>()
        .join(" \u{b7} ")
}

/// "Cycle 2 of 3", or just "Cycle 5" when the exercise loops until stopped.
pub fn cycle_label(cycle: u32, limit: CycleLimit) -> String {
    match limit {
        CycleLimit::Finite(total) => format!("Cycle {cycle} of {total}"),
        CycleLimit::Unbounded => format!("Cycle {cycle}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenboard_core::ExerciseKind;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_string("\u{23f3} timer", 20), "\u{23f3} timer");
        assert_eq!(truncate_string("\u{1f635}\u{1f635}\u{1f635}\u{1f635}\u{1f635}", 4), "\u{1f635}...");
    }

    #[test]
    fn box_pattern() {
        let definition = ExerciseKind::BoxBreathing.definition();
        assert_eq!(
            phase_pattern(&definition),
            "Inhale 4s \u{b7} Hold 4s \u{b7} Exhale 4s"
        );
    }

    #[test]
    fn cycle_labels() {
        assert_eq!(cycle_label(1, CycleLimit::Finite(2)), "Cycle 1 of 2");
        assert_eq!(cycle_label(7, CycleLimit::Unbounded), "Cycle 7");
    }
}
