//! `zenboard scenarios` - list the simulator scenarios.

use zenboard_core::SCENARIOS;

use crate::presentation::{print_separator, truncate_string};

/// Execute the scenarios command.
pub fn execute() {
    println!("{:<10} SCENARIO", "ID");
    print_separator(80);
    for scenario in &SCENARIOS {
        println!("{:<10} {} {}", scenario.id, scenario.icon, scenario.title);
        println!("{:<10} {}", "", truncate_string(scenario.description, 68));
    }
    println!();
    println!("Practise one with: zenboard simulate <id>");
}
