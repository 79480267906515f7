//! # Action Executor
//!
//! Runs the steps of one [`Action`] in order, each to completion before the
//! next starts. A status line is reported before every step and a completion
//! line after the last one. [`StepKind::Print`] steps are the exception: the
//! text they print is their own status, so they get neither.
//!
//! What happens when a step fails depends on the [`FailurePolicy`]:
//!
//! - `Continue`: the failure is reported as a warning and recorded in the
//!   [`ActionReport`]; later steps still run.
//! - `Abort`: the error is returned immediately and later steps are skipped.
//!
//! A step fails when its program cannot be launched, exits unsuccessfully,
//! or needs a captured value that an earlier step did not produce.

use crate::actions::clean;
use crate::config::FailurePolicy;
use crate::error::{Result, TaskError};
use crate::registry::Task;
use crate::report::{CmdMessage, Reporter};
use crate::runner::ProcessRunner;
use crate::steps::{Action, Invocation, Step, StepKind};
use std::path::Path;

/// A step that failed while the action kept going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub task: Task,
    pub steps_run: usize,
    pub failures: Vec<StepFailure>,
}

impl ActionReport {
    fn new(task: Task) -> Self {
        Self {
            task,
            steps_run: 0,
            failures: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Executor<'a, R: ProcessRunner> {
    runner: &'a mut R,
    root: &'a Path,
    policy: FailurePolicy,
    captured: Option<String>,
}

impl<'a, R: ProcessRunner> Executor<'a, R> {
    pub fn new(runner: &'a mut R, root: &'a Path, policy: FailurePolicy) -> Self {
        Self {
            runner,
            root,
            policy,
            captured: None,
        }
    }

    pub fn execute<P: Reporter>(
        &mut self,
        action: &Action,
        reporter: &mut P,
    ) -> Result<ActionReport> {
        let mut report = ActionReport::new(action.task);
        self.captured = None;

        for step in &action.steps {
            let silent = matches!(step.kind, StepKind::Print(_));
            if !silent {
                reporter.report(CmdMessage::info(format!("==> {}...", step.description)));
            }

            let outcome = self.run_step(step, reporter);
            report.steps_run += 1;

            if let Err(err) = outcome {
                tracing::debug!(step = %step.description, error = %err, "step failed");
                match self.policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Continue => {
                        reporter.report(CmdMessage::warning(format!(
                            "{} failed: {}",
                            step.description, err
                        )));
                        report.failures.push(StepFailure {
                            step: step.description.clone(),
                            error: err.to_string(),
                        });
                    }
                }
            }
        }

        if action.steps.iter().any(|s| !matches!(s.kind, StepKind::Print(_))) {
            reporter.report(completion_message(&report));
        }
        Ok(report)
    }

    fn run_step<P: Reporter>(&mut self, step: &Step, reporter: &mut P) -> Result<()> {
        match &step.kind {
            StepKind::Run {
                invocation,
                capture_output,
            } => self.run_invocation(invocation, *capture_output),
            StepKind::Pause(duration) => {
                self.runner.pause(*duration);
                Ok(())
            }
            StepKind::Print(text) => {
                reporter.report(CmdMessage::plain(text.clone()));
                Ok(())
            }
            StepKind::Remove(targets) => {
                let removed = clean::remove_targets(self.root, targets)?;
                if removed.is_empty() {
                    reporter.report(CmdMessage::info("Nothing to clean."));
                }
                for path in removed {
                    let shown = path.strip_prefix(self.root).unwrap_or(path.as_path());
                    reporter.report(CmdMessage::info(format!("Removed {}", shown.display())));
                }
                Ok(())
            }
        }
    }

    fn run_invocation(&mut self, invocation: &Invocation, capture_output: bool) -> Result<()> {
        let command = invocation
            .resolve(self.captured.as_deref())
            .ok_or_else(|| TaskError::MissingCapture(invocation.display()))?;

        let status = if capture_output {
            self.captured = None;
            let captured = self.runner.capture(&command, self.root)?;
            let value = captured.stdout.trim();
            if captured.status.success && !value.is_empty() {
                self.captured = Some(value.to_string());
            }
            captured.status
        } else {
            self.runner.run(&command, self.root)?
        };

        if status.success {
            Ok(())
        } else {
            Err(TaskError::StepFailed {
                command: command.to_string(),
                status: status.to_string(),
            })
        }
    }
}

fn completion_message(report: &ActionReport) -> CmdMessage {
    match report.failures.len() {
        0 => CmdMessage::success(format!("✓ {} complete", report.task)),
        1 => CmdMessage::warning(format!("{} finished with 1 failed step", report.task)),
        n => CmdMessage::warning(format!("{} finished with {} failed steps", report.task, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::action_for;
    use crate::config::TaskConfig;
    use crate::report::MessageLevel;
    use crate::runner::recording::{Recorded, RecordingRunner};
    use crate::steps::CommandLine;
    use std::time::Duration;

    fn execute(
        runner: &mut RecordingRunner,
        task: Task,
        policy: FailurePolicy,
    ) -> (Result<ActionReport>, Vec<CmdMessage>) {
        let dir = tempfile::tempdir().unwrap();
        let action = action_for(task, &TaskConfig::default());
        let mut messages: Vec<CmdMessage> = Vec::new();
        let result = Executor::new(runner, dir.path(), policy).execute(&action, &mut messages);
        (result, messages)
    }

    #[test]
    fn test_steps_run_in_order_exactly_once() {
        let mut runner = RecordingRunner::new();
        let (result, _) = execute(&mut runner, Task::Lint, FailurePolicy::Continue);

        assert!(result.unwrap().succeeded());
        assert_eq!(
            runner.command_lines(),
            vec![
                "mypy producer/",
                "flake8 producer/ tests/ --max-line-length=100 --statistics",
                "black --check producer/ tests/",
            ]
        );
    }

    #[test]
    fn test_status_before_each_step_and_completion_after() {
        let mut runner = RecordingRunner::new();
        let (_, messages) = execute(&mut runner, Task::Format, FailurePolicy::Continue);

        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "==> Formatting code (black)...",
                "==> Sorting imports (isort)...",
                "✓ format complete",
            ]
        );
        assert_eq!(messages[2].level, MessageLevel::Success);
    }

    #[test]
    fn test_lint_attempts_all_checks_when_one_fails() {
        let mut runner = RecordingRunner::new().fail_program("flake8", 1);
        let (result, messages) = execute(&mut runner, Task::Lint, FailurePolicy::Continue);

        let report = result.unwrap();
        assert_eq!(report.steps_run, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].step, "Running style checks (flake8)");
        assert_eq!(runner.command_lines().len(), 3);
        assert!(messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("exit code 1")));
        assert_eq!(
            messages.last().unwrap().content,
            "lint finished with 1 failed step"
        );
    }

    #[test]
    fn test_abort_policy_stops_at_first_failure() {
        let mut runner = RecordingRunner::new().fail_program("mypy", 2);
        let (result, _) = execute(&mut runner, Task::Lint, FailurePolicy::Abort);

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            TaskError::StepFailed { ref command, .. } if command == "mypy producer/"
        ));
        assert_eq!(err.to_string(), "'mypy producer/' failed (exit code 2)");
        assert_eq!(runner.command_lines(), vec!["mypy producer/"]);
    }

    #[test]
    fn test_missing_program_is_a_step_failure() {
        let mut runner = RecordingRunner::new().missing_program("docker-compose");
        let (result, _) = execute(&mut runner, Task::Start, FailurePolicy::Continue);

        let report = result.unwrap();
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].error.contains("docker-compose"));
        // The pause still happens.
        assert_eq!(
            runner.calls.last(),
            Some(&Recorded::Pause(Duration::from_secs(10)))
        );
    }

    #[test]
    fn test_read_stream_passes_captured_iterator() {
        let mut runner = RecordingRunner::new().with_capture_stdout("  ITERATOR-123\n");
        let (result, _) = execute(&mut runner, Task::ReadStream, FailurePolicy::Continue);

        assert!(result.unwrap().succeeded());
        assert!(matches!(runner.calls[0], Recorded::Capture(_)));
        match &runner.calls[1] {
            Recorded::Run(CommandLine { program, args }) => {
                assert_eq!(program, "aws");
                assert!(args.windows(2).any(|w| w == ["--shard-iterator", "ITERATOR-123"]));
                assert!(args.windows(2).any(|w| w == ["--limit", "5"]));
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_read_stream_without_iterator_skips_get_records() {
        let mut runner = RecordingRunner::new();
        let (result, _) = execute(&mut runner, Task::ReadStream, FailurePolicy::Continue);

        let report = result.unwrap();
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].error.contains("No output captured"));
        assert_eq!(runner.calls.len(), 1);
    }

    #[test]
    fn test_help_prints_without_status_lines() {
        let mut runner = RecordingRunner::new();
        let (result, messages) = execute(&mut runner, Task::Help, FailurePolicy::Continue);

        assert!(result.unwrap().succeeded());
        assert!(runner.calls.is_empty());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, MessageLevel::Plain);
        assert!(messages[0].content.contains("Usage: devtask"));
    }

    #[test]
    fn test_clean_reports_removed_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("htmlcov")).unwrap();

        let mut runner = RecordingRunner::new();
        let action = action_for(Task::Clean, &TaskConfig::default());
        let mut messages: Vec<CmdMessage> = Vec::new();
        let report = Executor::new(&mut runner, dir.path(), FailurePolicy::Continue)
            .execute(&action, &mut messages)
            .unwrap();

        assert!(report.succeeded());
        assert!(runner.calls.is_empty());
        assert!(messages.iter().any(|m| m.content == "Removed htmlcov"));
        assert!(!dir.path().join("htmlcov").exists());
    }
}
