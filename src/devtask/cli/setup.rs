use clap::Parser;

/// Clap's own help and version flags are disabled: `devtask help` is the help,
/// and anything that is not a command name is reported as an unknown command.
#[derive(Parser, Debug)]
#[command(
    name = "devtask",
    bin_name = "devtask",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Task runner for the fraud-detection streaming workspace", long_about = None)]
pub struct Cli {
    /// Command to run (defaults to help)
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,
}
