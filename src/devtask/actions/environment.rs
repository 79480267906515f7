use crate::config::TaskConfig;
use crate::steps::{Invocation, Step};

pub fn setup(config: &TaskConfig) -> Vec<Step> {
    vec![Step::run(
        "Installing dependencies",
        Invocation::new(&config.programs.pip).args([
            "install",
            "-r",
            config.workspace.requirements_file.as_str(),
        ]),
    )]
}

/// Brings the stack up detached, then waits for LocalStack to accept requests.
pub fn start(config: &TaskConfig) -> Vec<Step> {
    vec![
        Step::run(
            "Starting LocalStack",
            Invocation::new(&config.programs.compose).args(["up", "-d"]),
        ),
        Step::pause(
            format!(
                "Waiting {}s for LocalStack to be ready",
                config.startup_wait_secs
            ),
            config.startup_wait(),
        ),
    ]
}

pub fn stop(config: &TaskConfig) -> Vec<Step> {
    vec![Step::run(
        "Stopping LocalStack",
        Invocation::new(&config.programs.compose).arg("down"),
    )]
}

pub fn init(config: &TaskConfig) -> Vec<Step> {
    vec![Step::run(
        "Initializing LocalStack resources",
        Invocation::new(&config.programs.python).arg(config.workspace.setup_script.as_str()),
    )]
}
