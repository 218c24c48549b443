//! Error types for gobuilder.
//!
//! Every failure is fatal: the pipeline step terminates with a non-zero exit
//! code and no output lines are emitted.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gobuilder operations.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Reading the configuration or writing to the output channel failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the build schema.
    #[error("failed to parse build config: {0}")]
    ConfigParse(String),

    /// The configuration parsed but holds a value the builder refuses.
    #[error("invalid build config: {0}")]
    InvalidConfig(String),

    /// The required `binary` field is absent or empty.
    #[error("build config is missing the required 'binary' field")]
    MissingBinaryName,

    /// The substitution string does not follow the `NAME:value, ...` grammar.
    #[error("malformed substitution string: {0}")]
    MalformedSubstitution(String),

    /// A vector element cannot be carried by the comma-delimited list format.
    #[error("cannot serialize {list}: {reason}")]
    MalformedList { list: String, reason: String },

    /// The compiler could not be located.
    #[error("compiler '{0}' not found")]
    CompilerNotFound(String),

    /// The compiler ran but did not succeed.
    #[error("compiler failed: {0}")]
    CompilerFailed(String),
}

impl BuildError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Io { .. } => exit_codes::IO_FAILURE,
            BuildError::ConfigParse(_)
            | BuildError::InvalidConfig(_)
            | BuildError::MissingBinaryName
            | BuildError::MalformedSubstitution(_)
            | BuildError::MalformedList { .. } => exit_codes::CONFIG_ERROR,
            BuildError::CompilerNotFound(_) | BuildError::CompilerFailed(_) => {
                exit_codes::TOOLCHAIN_FAILURE
            }
        }
    }

    /// Wrap an I/O error with a description of what was being done.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        BuildError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for gobuilder operations.
pub type Result<T> = std::result::Result<T, BuildError>;
