//! Config loading and validation.

use super::model::BuildConfig;
use super::types::{ENV_ASSIGNMENT_REGEX, SUPPORTED_VERSION};
use crate::error::{BuildError, Result};
use std::path::Path;
use tracing::debug;

impl BuildConfig {
    /// Load and validate a build config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(BuildConfig)` - Successfully loaded and validated config
    /// * `Err(BuildError::Io)` - The file could not be read
    /// * `Err(BuildError::ConfigParse)` - The YAML does not match the schema
    /// * `Err(BuildError::MissingBinaryName | BuildError::InvalidConfig)` - Validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BuildError::io(format!("failed to read build config '{}'", path.display()), e)
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            binary = %config.binary,
            "loaded build config"
        );
        Ok(config)
    }

    /// Parse and validate a build config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: BuildConfig =
            serde_yaml::from_str(yaml).map_err(|e| BuildError::ConfigParse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `binary` must be present and non-empty
    /// - `version` must be the supported schema version
    /// - no string field may contain a line break
    /// - `goos`/`goarch` must be non-empty words when set
    /// - every flag must start with `-`
    /// - every `env` entry must be a `NAME=value` assignment
    pub fn validate(&self) -> Result<()> {
        if self.binary.trim().is_empty() {
            return Err(BuildError::MissingBinaryName);
        }

        if self.version != SUPPORTED_VERSION {
            return Err(BuildError::InvalidConfig(format!(
                "unsupported version {} (expected {})",
                self.version, SUPPORTED_VERSION
            )));
        }

        single_line("binary", &self.binary)?;
        if self.binary.trim() != self.binary {
            return Err(BuildError::InvalidConfig(format!(
                "binary '{}' has surrounding whitespace",
                self.binary
            )));
        }

        for (field, value) in [("goos", &self.goos), ("goarch", &self.goarch)] {
            if let Some(value) = value {
                if value.is_empty() || value.contains(char::is_whitespace) {
                    return Err(BuildError::InvalidConfig(format!(
                        "{} must be a non-empty word (found '{}')",
                        field, value
                    )));
                }
            }
        }

        if let Some(main) = &self.main {
            single_line("main", main)?;
        }

        for flag in &self.flags {
            single_line("flags", flag)?;
            if !flag.starts_with('-') {
                return Err(BuildError::InvalidConfig(format!(
                    "flag '{}' must start with '-'",
                    flag
                )));
            }
        }

        single_line("ldflags", &self.ldflags_template())?;

        for entry in &self.env {
            if !ENV_ASSIGNMENT_REGEX.is_match(entry) {
                return Err(BuildError::InvalidConfig(format!(
                    "env entry '{}' is not a NAME=value assignment",
                    entry
                )));
            }
        }

        Ok(())
    }
}

fn single_line(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(BuildError::InvalidConfig(format!(
            "{} must not contain line breaks",
            field
        )));
    }
    Ok(())
}
