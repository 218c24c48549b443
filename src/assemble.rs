//! Argument and environment vector outputs.
//!
//! The argument vector always opens with the compiler, the `build`
//! subcommand and the reproducibility flags, in this order:
//!
//! ```text
//! <compiler> build -mod=vendor -trimpath -tags=netgo [-ldflags=<resolved>] [flags...] -o <binary> [main]
//! ```
//!
//! The environment vector is the config's `env` entries, then `GOOS`/`GOARCH`
//! when the config sets them, then the toolchain defaults when `env` is empty.

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};

/// Go subcommand.
pub const SUBCOMMAND: &str = "build";

/// Resolve dependencies from the bundled `vendor/` tree only.
pub const VENDOR_MODE_FLAG: &str = "-mod=vendor";

/// Strip local filesystem paths from the binary.
pub const TRIMPATH_FLAG: &str = "-trimpath";

/// Use the pure-Go network stack.
pub const NETGO_TAGS_FLAG: &str = "-tags=netgo";

/// Output flag, followed by the binary name.
pub const OUTPUT_FLAG: &str = "-o";

/// Environment applied when the config does not list its own.
pub const DEFAULT_ENV: &[&str] = &["GO111MODULE=on", "CGO_ENABLED=0"];

/// Result of assembling one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutputs {
    /// Full compiler invocation, program first.
    pub command: Vec<String>,
    /// Environment assignments to apply to the compiler process.
    pub env: Vec<String>,
    /// Name of the produced artifact.
    pub subject: String,
}

/// Build the argument and environment vectors for `config`.
///
/// `resolved_ldflags` is the already-evaluated ldflags template; the
/// `-ldflags=` flag is omitted when it is blank.
///
/// # Errors
///
/// Returns `BuildError::MissingBinaryName` when `config.binary` is empty.
pub fn assemble(
    config: &BuildConfig,
    compiler: &str,
    resolved_ldflags: &str,
) -> Result<BuildOutputs> {
    if config.binary.trim().is_empty() {
        return Err(BuildError::MissingBinaryName);
    }

    let mut command: Vec<String> = [
        compiler,
        SUBCOMMAND,
        VENDOR_MODE_FLAG,
        TRIMPATH_FLAG,
        NETGO_TAGS_FLAG,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let ldflags = resolved_ldflags.trim();
    if !ldflags.is_empty() {
        command.push(format!("-ldflags={}", ldflags));
    }

    for flag in &config.flags {
        if is_fixed_flag(flag) {
            continue;
        }
        command.push(flag.clone());
    }

    command.push(OUTPUT_FLAG.to_string());
    command.push(config.binary.clone());

    if let Some(main) = &config.main {
        command.push(main.clone());
    }

    Ok(BuildOutputs {
        command,
        env: build_env(config),
        subject: config.binary.clone(),
    })
}

/// Flags the fixed prefix already carries; repeating them is a no-op.
fn is_fixed_flag(flag: &str) -> bool {
    [VENDOR_MODE_FLAG, TRIMPATH_FLAG, NETGO_TAGS_FLAG].contains(&flag)
}

fn build_env(config: &BuildConfig) -> Vec<String> {
    let mut env = config.env.clone();

    if let Some(goos) = &config.goos {
        env.push(format!("GOOS={}", goos));
    }
    if let Some(goarch) = &config.goarch {
        env.push(format!("GOARCH={}", goarch));
    }

    if config.env.is_empty() {
        env.extend(DEFAULT_ENV.iter().map(|s| s.to_string()));
    }

    env
}
