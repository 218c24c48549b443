//! Compiler lookup and execution.

use crate::assemble::BuildOutputs;
use crate::error::{BuildError, Result};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Resolve the compiler to the path that will appear in the command.
///
/// A name containing a path separator is returned unchanged. A bare name is
/// looked up on `PATH`; the first executable match wins.
pub fn resolve_compiler(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(BuildError::CompilerNotFound(name.to_string()));
    }
    if Path::new(name).components().count() > 1 {
        return Ok(name.to_string());
    }

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);

    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(&file_name);
        if is_executable(&candidate) {
            debug!(compiler = %candidate.display(), "resolved compiler");
            return Ok(candidate.to_string_lossy().into_owned());
        }
    }

    Err(BuildError::CompilerNotFound(name.to_string()))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run the assembled command in the current working directory, the same
/// directory the emitted command is expected to be re-run from.
///
/// The compiler inherits the current environment overlaid with
/// `outputs.env`. Its stdout is redirected to stderr so the output channel
/// only ever carries output lines.
pub fn execute(outputs: &BuildOutputs) -> Result<()> {
    let (program, args) = outputs
        .command
        .split_first()
        .ok_or_else(|| BuildError::CompilerFailed("empty command".to_string()))?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(io::stderr()));

    for entry in &outputs.env {
        if let Some((key, value)) = entry.split_once('=') {
            command.env(key, value);
        }
    }

    let rendered = shell_words::join(&outputs.command);
    info!(command = %rendered, "running compiler");

    let status = command.status().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BuildError::CompilerNotFound(program.clone()),
        _ => BuildError::CompilerFailed(format!("failed to start '{}': {}", program, e)),
    })?;

    if !status.success() {
        return Err(BuildError::CompilerFailed(format!(
            "'{}' exited with {}",
            rendered, status
        )));
    }

    Ok(())
}
