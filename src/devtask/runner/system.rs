use super::{Captured, ProcessRunner, RunStatus};
use crate::error::{Result, TaskError};
use crate::steps::CommandLine;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

/// Runs commands as child processes of `devtask`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(command: &CommandLine, dir: &Path) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).current_dir(dir);
        cmd
    }

    fn spawn_error(command: &CommandLine, source: std::io::Error) -> TaskError {
        TaskError::Spawn {
            program: command.program.clone(),
            source,
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &CommandLine, dir: &Path) -> Result<RunStatus> {
        tracing::debug!(%command, dir = %dir.display(), "spawning");

        let status = Self::command(command, dir)
            .status()
            .map_err(|e| Self::spawn_error(command, e))?;

        tracing::debug!(%command, code = ?status.code(), "exited");
        Ok(status.into())
    }

    fn capture(&mut self, command: &CommandLine, dir: &Path) -> Result<Captured> {
        tracing::debug!(%command, dir = %dir.display(), "spawning with captured stdout");

        let output = Self::command(command, dir)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;

        tracing::debug!(%command, code = ?output.status.code(), bytes = output.stdout.len(), "exited");
        Ok(Captured {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn pause(&mut self, duration: Duration) {
        tracing::debug!(secs = duration.as_secs_f64(), "pausing");
        std::thread::sleep(duration);
    }
}
