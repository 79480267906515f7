//! `devtask` binary.
//!
//! Kept thin: everything user-facing lives in `cli/`, and this file only calls
//! [`cli::run`] and turns an error into exit status 1.
//!
//! Exit status is 0 for every completed dispatch, including an unknown command
//! name and actions whose steps failed under the default `continue` failure
//! policy. It is 1 only when an error escapes the dispatcher: an unreadable
//! `devtask.json`, or a failing step under the `abort` policy.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
