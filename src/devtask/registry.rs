//! # Command Registry
//!
//! The closed set of commands `devtask` understands. Each command is one
//! variant of [`Task`]; its action is bound in [`crate::actions::action_for`],
//! so adding a variant without an action is a compile error.
//!
//! Lookup is a case-folded exact match against [`Task::name`]. There is no
//! prefix matching and no aliasing. An empty input resolves to [`Task::Help`].
//! Anything else is a [`Resolution::NotFound`], which callers report rather
//! than treat as an error.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Help,
    Setup,
    Start,
    Stop,
    Init,
    Producer,
    ProducerDemo,
    Test,
    TestCov,
    Lint,
    Format,
    VerifyStream,
    ReadStream,
    Clean,
}

/// Groups used to lay out the help document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskGroup {
    Environment,
    Producer,
    Quality,
    Stream,
    Misc,
}

impl TaskGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            TaskGroup::Environment => "Environment:",
            TaskGroup::Producer => "Producer:",
            TaskGroup::Quality => "Testing & Quality:",
            TaskGroup::Stream => "Stream Inspection:",
            TaskGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [TaskGroup] {
        &[
            TaskGroup::Environment,
            TaskGroup::Producer,
            TaskGroup::Quality,
            TaskGroup::Stream,
            TaskGroup::Misc,
        ]
    }
}

impl Task {
    /// Every registered task, in help order.
    pub const ALL: [Task; 14] = [
        Task::Setup,
        Task::Start,
        Task::Stop,
        Task::Init,
        Task::Producer,
        Task::ProducerDemo,
        Task::Test,
        Task::TestCov,
        Task::Lint,
        Task::Format,
        Task::VerifyStream,
        Task::ReadStream,
        Task::Clean,
        Task::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Task::Help => "help",
            Task::Setup => "setup",
            Task::Start => "start",
            Task::Stop => "stop",
            Task::Init => "init",
            Task::Producer => "producer",
            Task::ProducerDemo => "producer-demo",
            Task::Test => "test",
            Task::TestCov => "test-cov",
            Task::Lint => "lint",
            Task::Format => "format",
            Task::VerifyStream => "verify-stream",
            Task::ReadStream => "read-stream",
            Task::Clean => "clean",
        }
    }

    /// One-line description shown in the help document.
    pub fn summary(&self) -> &'static str {
        match self {
            Task::Help => "Show this help message",
            Task::Setup => "Install Python dependencies",
            Task::Start => "Start the local AWS emulation stack (LocalStack)",
            Task::Stop => "Stop the local AWS emulation stack",
            Task::Init => "Create the Kinesis stream and S3 bucket in LocalStack",
            Task::Producer => "Run the producer with 100 transactions",
            Task::ProducerDemo => "Run the producer with 1000 transactions",
            Task::Test => "Run the test suite",
            Task::TestCov => "Run the test suite with coverage reports",
            Task::Lint => "Type-check, lint and check formatting",
            Task::Format => "Format code with black and isort",
            Task::VerifyStream => "Describe the Kinesis stream in LocalStack",
            Task::ReadStream => "Read the first records from the Kinesis stream",
            Task::Clean => "Remove caches and coverage artifacts",
        }
    }

    pub fn group(&self) -> TaskGroup {
        match self {
            Task::Setup | Task::Start | Task::Stop | Task::Init => TaskGroup::Environment,
            Task::Producer | Task::ProducerDemo => TaskGroup::Producer,
            Task::Test | Task::TestCov | Task::Lint | Task::Format => TaskGroup::Quality,
            Task::VerifyStream | Task::ReadStream => TaskGroup::Stream,
            Task::Clean | Task::Help => TaskGroup::Misc,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of looking up user input in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Task(Task),
    /// The input, verbatim.
    NotFound(String),
}

/// Resolves a command name. Matching ignores letter case; the empty string is `help`.
pub fn resolve(input: &str) -> Resolution {
    if input.is_empty() {
        return Resolution::Task(Task::Help);
    }

    let normalized = input.to_lowercase();
    Task::ALL
        .iter()
        .find(|task| task.name() == normalized)
        .map(|task| Resolution::Task(*task))
        .unwrap_or_else(|| Resolution::NotFound(input.to_string()))
}

/// Resolves the optional positional argument, defaulting to `help`.
pub fn resolve_arg(input: Option<&str>) -> Resolution {
    resolve(input.unwrap_or_default())
}
