//! BuildConfig struct definition.

use super::types::*;
use serde::Deserialize;

/// Declarative description of a single Go build.
///
/// Read once per invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Schema version (default: 1).
    #[serde(default = "default_version")]
    pub version: u32,

    // =========================================================================
    // Target
    // =========================================================================
    /// Target operating system, exported as `GOOS` when set.
    #[serde(default)]
    pub goos: Option<String>,

    /// Target architecture, exported as `GOARCH` when set.
    #[serde(default)]
    pub goarch: Option<String>,

    /// Output filename passed to `-o`. Required.
    #[serde(default, deserialize_with = "null_as_default")]
    pub binary: String,

    /// Package to build, appended after the output flag when set.
    #[serde(default)]
    pub main: Option<String>,

    // =========================================================================
    // Compiler inputs
    // =========================================================================
    /// Extra compiler flags, in file order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<String>,

    /// Linker flag template resolved against the substitution set.
    #[serde(default)]
    pub ldflags: Option<LdflagsTemplate>,

    /// Environment assignments (`NAME=value`), in file order.
    ///
    /// When empty, the toolchain defaults `GO111MODULE=on` and
    /// `CGO_ENABLED=0` are applied instead.
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: Vec<String>,
}

impl BuildConfig {
    /// Create a config for `binary` with every optional field unset.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            version: default_version(),
            goos: None,
            goarch: None,
            binary: binary.into(),
            main: None,
            flags: Vec::new(),
            ldflags: None,
            env: Vec::new(),
        }
    }

    /// The ldflags template as a single string (empty when absent).
    pub fn ldflags_template(&self) -> String {
        self.ldflags
            .as_ref()
            .map(LdflagsTemplate::render)
            .unwrap_or_default()
    }
}
