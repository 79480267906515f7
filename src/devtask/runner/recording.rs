use super::{Captured, ProcessRunner, RunStatus};
use crate::error::{Result, TaskError};
use crate::steps::CommandLine;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// One thing the executor asked the runner to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Run(CommandLine),
    Capture(CommandLine),
    Pause(Duration),
}

/// Test double that records calls instead of spawning processes.
///
/// Every program succeeds unless told otherwise with [`fail_program`] or
/// [`missing_program`]. Captures return the configured stdout (empty by default).
///
/// [`fail_program`]: RecordingRunner::fail_program
/// [`missing_program`]: RecordingRunner::missing_program
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<Recorded>,
    failures: HashMap<String, i32>,
    missing: Vec<String>,
    capture_stdout: String,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_program(mut self, program: &str, code: i32) -> Self {
        self.failures.insert(program.to_string(), code);
        self
    }

    pub fn missing_program(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn with_capture_stdout(mut self, stdout: &str) -> Self {
        self.capture_stdout = stdout.to_string();
        self
    }

    /// Command lines of run and capture calls, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Recorded::Run(line) | Recorded::Capture(line) => Some(line.to_string()),
                Recorded::Pause(_) => None,
            })
            .collect()
    }

    fn status_for(&self, command: &CommandLine) -> Result<RunStatus> {
        if self.missing.contains(&command.program) {
            return Err(TaskError::Spawn {
                program: command.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(match self.failures.get(&command.program) {
            Some(code) => RunStatus::failed(*code),
            None => RunStatus::ok(),
        })
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&mut self, command: &CommandLine, _dir: &Path) -> Result<RunStatus> {
        self.calls.push(Recorded::Run(command.clone()));
        self.status_for(command)
    }

    fn capture(&mut self, command: &CommandLine, _dir: &Path) -> Result<Captured> {
        self.calls.push(Recorded::Capture(command.clone()));
        let status = self.status_for(command)?;
        let stdout = if status.success {
            self.capture_stdout.clone()
        } else {
            String::new()
        };
        Ok(Captured { status, stdout })
    }

    fn pause(&mut self, duration: Duration) {
        self.calls.push(Recorded::Pause(duration));
    }
}
