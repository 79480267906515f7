//! # CLI Layer
//!
//! The only place that knows about terminal I/O and process exit. It:
//!
//! 1. Parses the single optional positional argument (`setup.rs`)
//! 2. Installs the diagnostic log subscriber (`logging.rs`)
//! 3. Builds the API over the current directory (`devtask.json` is read
//!    only when the resolved task needs it)
//! 4. Dispatches, printing status lines as they arrive (`print.rs`)

mod logging;
mod print;
mod setup;

use clap::Parser;
use devtask::api::DevTask;
use devtask::error::Result;
use devtask::runner::system::SystemRunner;
use print::TerminalReporter;
use setup::Cli;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut api = DevTask::open(SystemRunner::new(), root);
    let mut reporter = TerminalReporter::new();
    api.dispatch(cli.command.as_deref(), &mut reporter)?;
    Ok(())
}
