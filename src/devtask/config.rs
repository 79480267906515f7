use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "devtask.json";

pub const DEFAULT_TRANSACTIONS: u32 = 100;
pub const DEMO_TRANSACTIONS: u32 = 1000;
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// What the executor does when a step fails.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report the failure and keep running the remaining steps.
    #[default]
    Continue,
    /// Stop the action at the first failing step.
    Abort,
}

/// Program names used for each external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Programs {
    pub python: String,
    pub pip: String,
    pub compose: String,
    pub pytest: String,
    pub mypy: String,
    pub flake8: String,
    pub black: String,
    pub isort: String,
    pub aws: String,
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            pip: "pip".to_string(),
            compose: "docker-compose".to_string(),
            pytest: "pytest".to_string(),
            mypy: "mypy".to_string(),
            flake8: "flake8".to_string(),
            black: "black".to_string(),
            isort: "isort".to_string(),
            aws: "aws".to_string(),
        }
    }
}

/// Layout of the Python workspace the tasks operate on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Workspace {
    pub requirements_file: String,
    pub setup_script: String,
    pub producer_module: String,
    pub source_dir: String,
    pub test_dir: String,
    pub scripts_dir: String,
    pub coverage_package: String,
    pub max_line_length: u32,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            requirements_file: "requirements.txt".to_string(),
            setup_script: "scripts/setup_localstack.py".to_string(),
            producer_module: "producer.main".to_string(),
            source_dir: "producer/".to_string(),
            test_dir: "tests/".to_string(),
            scripts_dir: "scripts/".to_string(),
            coverage_package: "producer".to_string(),
            max_line_length: 100,
        }
    }
}

/// Coordinates of the emulated stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreamSettings {
    pub name: String,
    pub region: String,
    pub endpoint_url: String,
    pub shard_id: String,
    pub read_limit: u32,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            name: "fraud-transactions".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: "http://localhost:4566".to_string(),
            shard_id: "shardId-000000000000".to_string(),
            read_limit: 5,
        }
    }
}

/// Parameters handed to the producer module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProducerParams {
    pub num_transactions: u32,
    pub batch_size: u32,
}

/// Everything the actions need to build their steps, stored in `devtask.json`
/// at the workspace root.
///
/// The producer parameters are not read from the file: `producer` and
/// `producer-demo` always run with the compiled-in counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TaskConfig {
    pub programs: Programs,
    pub workspace: Workspace,
    pub stream: StreamSettings,

    /// Seconds to wait after bringing the local stack up
    pub startup_wait_secs: u64,

    pub failure_policy: FailurePolicy,

    #[serde(skip)]
    pub producer: ProducerParams,

    #[serde(skip)]
    pub demo_transactions: u32,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            programs: Programs::default(),
            workspace: Workspace::default(),
            stream: StreamSettings::default(),
            startup_wait_secs: 10,
            failure_policy: FailurePolicy::default(),
            producer: ProducerParams {
                num_transactions: DEFAULT_TRANSACTIONS,
                batch_size: DEFAULT_BATCH_SIZE,
            },
            demo_transactions: DEMO_TRANSACTIONS,
        }
    }
}

impl TaskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskError::Io)?;
        let config: TaskConfig = serde_json::from_str(&content).map_err(TaskError::Config)?;
        Ok(config)
    }

    pub fn startup_wait(&self) -> Duration {
        Duration::from_secs(self.startup_wait_secs)
    }

    /// Producer parameters with the demo transaction count substituted.
    pub fn demo_producer(&self) -> ProducerParams {
        ProducerParams {
            num_transactions: self.demo_transactions,
            ..self.producer
        }
    }
}
