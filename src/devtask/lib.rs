//! # devtask
//!
//! A single entry point for the chores of the fraud-detection streaming
//! workspace: installing dependencies, running LocalStack, provisioning the
//! Kinesis stream, running the producer, tests and linters, peeking at the
//! stream, and cleaning up. Each chore is a short command name bound to a
//! fixed sequence of external programs.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses the one positional argument                       │
//! │  - Prints status lines, owns the exit code                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Resolves input against the registry                      │
//! │  - Builds the action, hands it to the executor              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry + Actions (registry.rs, actions/)                 │
//! │  - Closed `Task` enum, one action builder per task          │
//! │  - Pure: build `Step` lists from `TaskConfig`               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Executor + Runner (executor.rs, runner/)                   │
//! │  - Runs steps in order, applies the failure policy          │
//! │  - `ProcessRunner` trait: real processes or a recorder      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr directly: status
//! lines go to a [`report::Reporter`], and external programs inherit the
//! terminal so their output reaches the user untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade the CLI calls
//! - [`registry`]: command names and lookup
//! - [`actions`]: the steps bound to each command
//! - [`steps`]: step, invocation and action types
//! - [`executor`]: sequential step execution and failure policy
//! - [`runner`]: process spawning abstraction
//! - [`report`]: status messages
//! - [`config`]: `devtask.json` and built-in defaults
//! - [`error`]: error types

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod executor;
pub mod registry;
pub mod report;
pub mod runner;
pub mod steps;
