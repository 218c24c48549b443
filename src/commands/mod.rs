//! Command implementations for gobuilder.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod build;

use crate::cli::Command;
use gobuilder::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build::cmd_build(args),
    }
}
