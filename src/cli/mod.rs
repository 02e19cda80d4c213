//! Command-line interface for tunegrab.
//!
//! This module provides the grab pipeline plus small diagnostic commands
//! for exercising individual collaborators (catalog lookup, tag writing,
//! tool checks).

mod commands;

pub use commands::{Cli, Commands, run_command};
