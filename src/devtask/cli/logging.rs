use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "DEVTASK_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Installs the stderr subscriber. Level comes from `DEVTASK_LOG`, e.g.
/// `DEVTASK_LOG=debug devtask lint` shows every spawned command.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let result = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Log system initialization failed: {e}");
    }
}
