//! Build pipeline: configuration in, output lines out.
//!
//! One invocation processes one configuration:
//!
//! 1. Load and validate the build config
//! 2. Parse the substitution string and resolve the ldflags template
//! 3. Assemble the argument and environment vectors
//! 4. Check both vectors can be carried by the list format
//! 5. Dry run: emit subject, command and environment.
//!    Otherwise: run the compiler, then emit the subject.
//!
//! Every fallible step runs before the output sink is opened, so a failure
//! never leaves partial output lines behind.

mod executor;
mod output;


pub use executor::{execute, resolve_compiler};
pub use output::{BINARY_NAME_KEY, COMMAND_KEY, ENV_KEY, OutputFormat, render};

use output::write_rendered;

use crate::assemble::{BuildOutputs, assemble};
use crate::config::BuildConfig;
use crate::error::{BuildError, Result};
use crate::list;
use crate::template::{self, SubstitutionSet};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One build invocation.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Path to the YAML build config.
    pub config_path: PathBuf,
    /// Raw `NAME:value, ...` substitution string.
    pub substitutions: String,
    /// Compiler name or path.
    pub compiler: String,
    /// Only emit the command instead of running it.
    pub dry: bool,
    /// Output line layout.
    pub format: OutputFormat,
}

/// Evaluate and assemble a build without any I/O.
///
/// # Errors
///
/// * `BuildError::MalformedSubstitution` - the substitution string is malformed
/// * `BuildError::MissingBinaryName` - the config has no binary name
/// * `BuildError::MalformedList` - a vector element cannot be serialized
pub fn prepare(
    config: &BuildConfig,
    raw_substitutions: &str,
    compiler: &str,
) -> Result<BuildOutputs> {
    let substitutions = SubstitutionSet::parse(raw_substitutions)?;
    debug!(names = ?substitutions.names(), "parsed substitutions");

    let ldflags = template::evaluate(&config.ldflags_template(), &substitutions);
    debug!(ldflags = %ldflags, "resolved ldflags");

    let outputs = assemble(config, compiler, &ldflags)?;
    list::ensure_encodable(COMMAND_KEY, &outputs.command)?;
    list::ensure_encodable(ENV_KEY, &outputs.env)?;

    info!(
        subject = %outputs.subject,
        command = %shell_words::join(&outputs.command),
        env = %shell_words::join(&outputs.env),
        "assembled build command"
    );
    Ok(outputs)
}

/// Run one build request and emit its outputs.
///
/// `open_sink` is called only once everything that can fail before emission
/// has succeeded.
pub fn run_build<W, F>(request: &BuildRequest, open_sink: F) -> Result<BuildOutputs>
where
    W: Write,
    F: FnOnce() -> Result<W>,
{
    let config = BuildConfig::load(&request.config_path)?;
    let compiler = compiler_for(request)?;
    let outputs = prepare(&config, &request.substitutions, &compiler)?;

    if !request.dry {
        execute(&outputs)?;
    }

    let rendered = render(&outputs, request.format, request.dry);
    write_rendered(open_sink()?, &rendered)?;
    Ok(outputs)
}

/// In a dry run a compiler missing from this host is not fatal; the bare
/// name is emitted and resolved by whoever runs the command.
fn compiler_for(request: &BuildRequest) -> Result<String> {
    match resolve_compiler(&request.compiler) {
        Ok(path) => Ok(path),
        Err(BuildError::CompilerNotFound(name)) if request.dry && !name.is_empty() => {
            warn!(compiler = %name, "compiler not found in PATH, emitting bare name");
            Ok(name)
        }
        Err(e) => Err(e),
    }
}
