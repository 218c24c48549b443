//! Configuration types and defaults for gobuilder.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::LazyLock;

/// The only configuration schema version understood by this builder.
pub const SUPPORTED_VERSION: u32 = 1;

/// `NAME=value` environment assignment.
pub(crate) static ENV_ASSIGNMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=.*$").expect("Invalid env assignment regex")
});

/// The `ldflags` template, written either as one string or as a list of
/// fragments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LdflagsTemplate {
    /// `ldflags: "VERSION_LDFLAGS -s -w"`
    Single(String),
    /// `ldflags: [VERSION_LDFLAGS, -s, -w]`
    Parts(Vec<String>),
}

impl LdflagsTemplate {
    /// The template as one string; list fragments are joined with spaces.
    pub fn render(&self) -> String {
        match self {
            LdflagsTemplate::Single(s) => s.clone(),
            LdflagsTemplate::Parts(parts) => parts
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

pub(crate) fn default_version() -> u32 {
    SUPPORTED_VERSION
}

/// Treat an explicit `null` (e.g. `env:` with no entries) like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
