//! Exit code constants for the gobuilder CLI.
//!
//! - 0: Success
//! - 1: Configuration error (bad config, substitutions, or unencodable output)
//! - 2: Toolchain failure (compiler missing or build failed)
//! - 3: I/O failure (config file unreadable, output channel unwritable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: malformed config, missing binary, bad substitution string.
pub const CONFIG_ERROR: i32 = 1;

/// Toolchain failure: compiler not found or exited with a non-zero status.
pub const TOOLCHAIN_FAILURE: i32 = 2;

/// I/O failure while reading the configuration or writing outputs.
pub const IO_FAILURE: i32 = 3;
