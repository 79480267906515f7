//! Status messages and the sink they are written to.
//!
//! The executor never prints. It hands each [`CmdMessage`] to a [`Reporter`]
//! as soon as it is produced, so a terminal reporter can interleave status
//! lines with the output of the tools being run.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
    /// Verbatim text, such as the help document.
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Plain,
            content: content.into(),
        }
    }
}

pub trait Reporter {
    fn report(&mut self, message: CmdMessage);
}

/// Collects messages; used by tests and by callers that render later.
impl Reporter for Vec<CmdMessage> {
    fn report(&mut self, message: CmdMessage) {
        self.push(message);
    }
}
