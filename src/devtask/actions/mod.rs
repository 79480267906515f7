//! # Actions
//!
//! Binds each [`Task`] to the ordered [`Step`]s it runs. Builders take the
//! [`TaskConfig`] so program names, directories and stream coordinates come
//! from one place; nothing here touches the filesystem or spawns a process.
//!
//! One module per area:
//!
//! - [`environment`]: `setup`, `start`, `stop`, `init`
//! - [`producer`]: `producer`, `producer-demo`
//! - [`quality`]: `test`, `test-cov`, `lint`, `format`
//! - [`stream`]: `verify-stream`, `read-stream`
//! - [`clean`]: `clean` and the in-process removal it performs
//! - [`help`]: the usage document

use crate::config::TaskConfig;
use crate::registry::Task;
use crate::steps::{Action, Step};

pub mod clean;
pub mod environment;
pub mod help;
pub mod producer;
pub mod quality;
pub mod stream;

/// Builds the action bound to `task`.
pub fn action_for(task: Task, config: &TaskConfig) -> Action {
    let steps: Vec<Step> = match task {
        Task::Help => help::steps(),
        Task::Setup => environment::setup(config),
        Task::Start => environment::start(config),
        Task::Stop => environment::stop(config),
        Task::Init => environment::init(config),
        Task::Producer => producer::steps(config, config.producer),
        Task::ProducerDemo => producer::steps(config, config.demo_producer()),
        Task::Test => quality::test(config),
        Task::TestCov => quality::test_with_coverage(config),
        Task::Lint => quality::lint(config),
        Task::Format => quality::format(config),
        Task::VerifyStream => stream::verify(config),
        Task::ReadStream => stream::read(config),
        Task::Clean => clean::steps(),
    };
    Action::new(task, steps)
}
