//! `zenboard exercises` - list the guided exercises.

use zenboard_core::{CycleLimit, ExerciseDefinition, ExerciseKind};

use crate::presentation::{phase_pattern, print_separator};

fn cycles_column(definition: &ExerciseDefinition) -> String {
    match definition.cycles {
        CycleLimit::Finite(1) => "1 round".to_string(),
        CycleLimit::Finite(n) => format!("{n} rounds"),
        CycleLimit::Unbounded => "until stopped".to_string(),
    }
}

/// Execute the exercises command.
pub fn execute() {
    println!("{:<6} {:<20} {:<40} {}", "ID", "EXERCISE", "RHYTHM", "LENGTH");
    print_separator(84);
    for kind in ExerciseKind::ALL {
        let definition = kind.definition();
        println!(
            "{:<6} {:<20} {:<40} {}",
            kind.slug(),
            definition.title,
            phase_pattern(&definition),
            cycles_column(&definition)
        );
    }
    println!();
    println!("Run one with: zenboard breathe <id>");
}
