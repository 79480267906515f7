use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({status})")]
    StepFailed { command: String, status: String },

    #[error("No output captured from '{0}'")]
    MissingCapture(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
