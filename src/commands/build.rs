//! Implementation of the `gobuilder build` command.

use crate::cli::BuildArgs;
use gobuilder::error::{BuildError, Result};
use gobuilder::pipeline::{BuildRequest, OutputFormat, run_build};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Execute the `gobuilder build` command.
///
/// Outputs go to `--output-file` (or `$GITHUB_OUTPUT`) when set, otherwise to
/// stdout. The file is only opened once the build has been fully prepared.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let request = BuildRequest {
        config_path: args.config,
        substitutions: args.envs,
        compiler: args.compiler,
        dry: args.dry,
        format: effective_format(args.format, args.output_file.as_deref()),
    };

    match args.output_file.as_deref() {
        Some(path) => run_build(&request, || open_output_file(path))?,
        None => run_build(&request, || Ok(io::stdout().lock()))?,
    };

    Ok(())
}

/// Output files take `key=value` lines unless a format is forced.
fn effective_format(requested: Option<OutputFormat>, output_file: Option<&Path>) -> OutputFormat {
    match (requested, output_file) {
        (Some(format), _) => format,
        (None, Some(_)) => OutputFormat::KeyValue,
        (None, None) => OutputFormat::SetOutput,
    }
}

fn open_output_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            BuildError::io(
                format!("failed to open output file '{}'", path.display()),
                e,
            )
        })
}
