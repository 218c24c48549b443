//! Output channel rendering.
//!
//! Downstream tooling matches each output on a fixed literal prefix, so the
//! key names and line layouts here are a compatibility contract.

use crate::assemble::BuildOutputs;
use crate::error::{BuildError, Result};
use crate::list;
use clap::ValueEnum;
use std::io::Write;

/// Key carrying the artifact name.
pub const BINARY_NAME_KEY: &str = "go-binary-name";

/// Key carrying the serialized argument vector.
pub const COMMAND_KEY: &str = "go-command";

/// Key carrying the serialized environment vector.
pub const ENV_KEY: &str = "go-env";

/// Line layout of the output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `::set-output name=<key>::<value>` workflow commands on stdout.
    #[default]
    SetOutput,
    /// `<key>=<value>` lines, as appended to an output file.
    KeyValue,
}

impl OutputFormat {
    /// Format one output line, without the trailing newline.
    pub fn line(&self, key: &str, value: &str) -> String {
        match self {
            OutputFormat::SetOutput => format!("::set-output name={}::{}", key, value),
            OutputFormat::KeyValue => format!("{}={}", key, value),
        }
    }
}

/// Render the output lines for `outputs`.
///
/// The subject always comes first. `include_vectors` adds the serialized
/// command and environment.
pub fn render(outputs: &BuildOutputs, format: OutputFormat, include_vectors: bool) -> String {
    let mut text = String::new();
    push_line(&mut text, format.line(BINARY_NAME_KEY, &outputs.subject));
    if include_vectors {
        push_line(
            &mut text,
            format.line(COMMAND_KEY, &list::serialize(&outputs.command)),
        );
        push_line(&mut text, format.line(ENV_KEY, &list::serialize(&outputs.env)));
    }
    text
}

fn push_line(text: &mut String, line: String) {
    text.push_str(&line);
    text.push('\n');
}

/// Write fully rendered output to `out` in one piece.
pub fn write_rendered<W: Write>(mut out: W, rendered: &str) -> Result<()> {
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| BuildError::io("failed to write build outputs", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildOutputs {
        BuildOutputs {
            command: vec![
                "go".to_string(),
                "build".to_string(),
                "-o".to_string(),
                "app".to_string(),
            ],
            env: vec!["GOOS=linux".to_string(), "GOARCH=amd64".to_string()],
            subject: "app".to_string(),
        }
    }

    #[test]
    fn set_output_lines() {
        assert_eq!(
            render(&sample(), OutputFormat::SetOutput, true),
            "::set-output name=go-binary-name::app\n\
             ::set-output name=go-command::go,build,-o,app\n\
             ::set-output name=go-env::GOOS=linux,GOARCH=amd64\n"
        );
    }

    #[test]
    fn key_value_lines() {
        assert_eq!(
            render(&sample(), OutputFormat::KeyValue, true),
            "go-binary-name=app\n\
             go-command=go,build,-o,app\n\
             go-env=GOOS=linux,GOARCH=amd64\n"
        );
    }

    #[test]
    fn subject_only() {
        assert_eq!(
            render(&sample(), OutputFormat::KeyValue, false),
            "go-binary-name=app\n"
        );
    }

    #[test]
    fn empty_env_renders_empty_value() {
        let mut outputs = sample();
        outputs.env.clear();
        let text = render(&outputs, OutputFormat::SetOutput, true);
        assert!(text.ends_with("::set-output name=go-env::\n"), "{text}");
    }

    #[test]
    fn write_rendered_writes_everything() {
        let mut buf = Vec::new();
        write_rendered(&mut buf, "a=b\n").unwrap();
        assert_eq!(buf, b"a=b\n");
    }
}
