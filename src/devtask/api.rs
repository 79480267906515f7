//! # API Facade
//!
//! [`DevTask`] is the single entry point the CLI talks to. It resolves the
//! user's input against the registry, builds the bound action from the
//! configuration, and hands it to the [`Executor`].
//!
//! Resolution never reads `devtask.json`. The configuration is loaded the
//! first time a resolved task needs it, so `help` and unknown commands work
//! even when the file is malformed.
//!
//! Generic over [`ProcessRunner`]:
//! - Production: `DevTask<SystemRunner>`
//! - Testing: `DevTask<RecordingRunner>`

use crate::actions::action_for;
use crate::config::{FailurePolicy, TaskConfig};
use crate::error::Result;
use crate::executor::{ActionReport, Executor};
use crate::registry::{resolve_arg, Resolution, Task};
use crate::report::{CmdMessage, Reporter};
use crate::runner::ProcessRunner;
use crate::steps::Action;
use once_cell::unsync::OnceCell;
use std::path::PathBuf;

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Completed(ActionReport),
    /// No task has this name; holds the input verbatim.
    UnknownCommand(String),
}

pub struct DevTask<R: ProcessRunner> {
    runner: R,
    config: OnceCell<TaskConfig>,
    root: PathBuf,
}

impl<R: ProcessRunner> DevTask<R> {
    pub fn new(runner: R, config: TaskConfig, root: PathBuf) -> Self {
        Self {
            runner,
            config: OnceCell::with_value(config),
            root,
        }
    }

    /// Like [`DevTask::new`], but reads `devtask.json` from `root` only once a
    /// task needs it.
    pub fn open(runner: R, root: PathBuf) -> Self {
        Self {
            runner,
            config: OnceCell::new(),
            root,
        }
    }

    /// The action `input` would run, without running it.
    pub fn plan(&self, input: Option<&str>) -> Result<Option<Action>> {
        match resolve_arg(input) {
            Resolution::Task(task) => Ok(Some(self.bind(task)?.0)),
            Resolution::NotFound(_) => Ok(None),
        }
    }

    /// Help depends on the registry alone, so it is bound without configuration.
    fn bind(&self, task: Task) -> Result<(Action, FailurePolicy)> {
        if task == Task::Help {
            return Ok((
                action_for(task, &TaskConfig::default()),
                FailurePolicy::default(),
            ));
        }
        let config = self.load_config()?;
        Ok((action_for(task, config), config.failure_policy))
    }

    fn load_config(&self) -> Result<&TaskConfig> {
        self.config.get_or_try_init(|| TaskConfig::load(&self.root))
    }

    /// Resolves `input` (defaulting to `help`) and runs the bound action.
    pub fn dispatch<P: Reporter>(
        &mut self,
        input: Option<&str>,
        reporter: &mut P,
    ) -> Result<Dispatch> {
        let task = match resolve_arg(input) {
            Resolution::Task(task) => task,
            Resolution::NotFound(input) => {
                tracing::debug!(%input, "unknown command");
                reporter.report(CmdMessage::error(format!("Unknown command: {}", input)));
                reporter.report(CmdMessage::info(
                    "Run 'devtask help' to see the available commands.",
                ));
                return Ok(Dispatch::UnknownCommand(input));
            }
        };

        tracing::debug!(%task, root = %self.root.display(), "dispatching");
        let (action, policy) = self.bind(task)?;
        let report = Executor::new(&mut self.runner, &self.root, policy).execute(&action, reporter)?;
        Ok(Dispatch::Completed(report))
    }

    /// The configuration, if it has been loaded.
    pub fn config(&self) -> Option<&TaskConfig> {
        self.config.get()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
