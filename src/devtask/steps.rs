//! Step and action types.
//!
//! An [`Action`] is an ordered list of [`Step`]s. Most steps run one external
//! program; the rest are in-process operations (a pause, printing a document,
//! removing files). Arguments are fixed when the action is built, except for
//! [`Arg::Captured`], which is filled in at run time with the output of the
//! most recent capturing step.

use crate::registry::Task;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Literal(String),
    /// Trimmed stdout of the last step run with `capture_output`.
    Captured,
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Literal(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Literal(value)
    }
}

/// A program and its arguments, possibly still holding a capture placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<Arg>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn captured_arg(mut self) -> Self {
        self.args.push(Arg::Captured);
        self
    }

    pub fn needs_capture(&self) -> bool {
        self.args.iter().any(|a| matches!(a, Arg::Captured))
    }

    /// Substitutes the captured value. Returns `None` if a placeholder has nothing to take.
    pub fn resolve(&self, captured: Option<&str>) -> Option<CommandLine> {
        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            match arg {
                Arg::Literal(s) => args.push(s.clone()),
                Arg::Captured => args.push(captured?.to_string()),
            }
        }
        Some(CommandLine {
            program: self.program.clone(),
            args,
        })
    }

    /// The invocation as text, with `<captured>` standing in for placeholders.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            match arg {
                Arg::Literal(s) => out.push_str(s),
                Arg::Captured => out.push_str("<captured>"),
            }
        }
        out
    }
}

/// A fully resolved command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Something the `clean` action removes when it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanTarget {
    /// A file or directory relative to the workspace root.
    Path(PathBuf),
    /// Every directory with this name, at any depth.
    DirNamed(String),
    /// Every file with this extension (no dot), at any depth.
    FileExtension(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Run {
        invocation: Invocation,
        capture_output: bool,
    },
    Pause(Duration),
    Print(String),
    Remove(Vec<CleanTarget>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub kind: StepKind,
}

impl Step {
    pub fn run(description: impl Into<String>, invocation: Invocation) -> Self {
        Self {
            description: description.into(),
            kind: StepKind::Run {
                invocation,
                capture_output: false,
            },
        }
    }

    pub fn capture(description: impl Into<String>, invocation: Invocation) -> Self {
        Self {
            description: description.into(),
            kind: StepKind::Run {
                invocation,
                capture_output: true,
            },
        }
    }

    pub fn pause(description: impl Into<String>, duration: Duration) -> Self {
        Self {
            description: description.into(),
            kind: StepKind::Pause(duration),
        }
    }

    pub fn print(description: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            kind: StepKind::Print(text.into()),
        }
    }

    pub fn remove(description: impl Into<String>, targets: Vec<CleanTarget>) -> Self {
        Self {
            description: description.into(),
            kind: StepKind::Remove(targets),
        }
    }

    pub fn invocation(&self) -> Option<&Invocation> {
        match &self.kind {
            StepKind::Run { invocation, .. } => Some(invocation),
            _ => None,
        }
    }
}

/// The ordered steps bound to one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub task: Task,
    pub steps: Vec<Step>,
}

impl Action {
    pub fn new(task: Task, steps: Vec<Step>) -> Self {
        Self { task, steps }
    }

    pub fn invocations(&self) -> impl Iterator<Item = &Invocation> {
        self.steps.iter().filter_map(Step::invocation)
    }
}
