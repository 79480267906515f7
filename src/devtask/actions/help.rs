//! The usage document.
//!
//! Generated from the registry so that every command `devtask` accepts is
//! listed, grouped as in [`TaskGroup::all`].

use crate::registry::{Task, TaskGroup};
use crate::steps::Step;
use once_cell::sync::Lazy;

const EXAMPLES: &[(&str, &str)] = &[
    ("devtask setup", "install dependencies"),
    ("devtask start", "start LocalStack"),
    ("devtask init", "create the stream"),
    ("devtask producer", "send 100 transactions"),
    ("devtask read-stream", "look at what arrived"),
];

/// Version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
pub fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: Lazy<String> = Lazy::new(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    });

    &VERSION_STRING
}

pub fn render() -> String {
    let name_width = Task::ALL.iter().map(|t| t.name().len()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("devtask {}\n", version()));
    output.push_str("Task runner for the fraud-detection streaming workspace\n");
    output.push('\n');
    output.push_str("Usage: devtask [COMMAND]\n");

    for group in TaskGroup::all() {
        output.push('\n');
        output.push_str(group.heading());
        output.push('\n');
        for task in Task::ALL.iter().filter(|t| t.group() == *group) {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                task.name(),
                task.summary(),
                width = name_width
            ));
        }
    }

    let example_width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
    output.push_str("\nExamples:\n");
    for (cmd, note) in EXAMPLES {
        output.push_str(&format!("  {:<width$}  # {}\n", cmd, note, width = example_width));
    }

    output.push_str("\nCommand names are case-insensitive. With no command, this help is shown.\n");
    output
}

pub fn steps() -> Vec<Step> {
    vec![Step::print("Showing help", render())]
}
