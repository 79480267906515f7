use colored::Colorize;
use devtask::report::{CmdMessage, MessageLevel, Reporter};
use std::io::{self, Write};

/// Prints each message the moment it is reported.
///
/// Stdout is flushed after every line so status lines stay in order with the
/// output of the child processes, which write to the same terminal.
pub struct TerminalReporter {
    out: io::Stdout,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn report(&mut self, message: CmdMessage) {
        let line = format_message(&message);
        let mut out = self.out.lock();
        // A closed stdout is not worth aborting the remaining steps for.
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.cyan().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
        MessageLevel::Plain => message.content.trim_end().to_string(),
    }
}
