//! Parsing of the pipeline-supplied substitution string.
//!
//! The wire form is a comma-separated list of `NAME:value` pairs, for
//! example `VERSION_LDFLAGS:-X main.version=1.2.3, COMMIT:abc123`. Each
//! segment is split on its first `:` so values may themselves contain colons.

use crate::error::{BuildError, Result};

/// Ordered mapping from placeholder name to replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionSet {
    entries: Vec<(String, String)>,
}

impl SubstitutionSet {
    /// Parse a `NAME:value, NAME2:value2` string.
    ///
    /// Whitespace around keys and values is trimmed. An empty (or
    /// whitespace-only) input yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::MalformedSubstitution` when a segment has no `:`,
    /// when a key is empty or contains whitespace, or when a key repeats.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut set = SubstitutionSet::default();
        if raw.trim().is_empty() {
            return Ok(set);
        }

        for segment in raw.split(',') {
            let (key, value) = segment.split_once(':').ok_or_else(|| {
                BuildError::MalformedSubstitution(format!(
                    "segment '{}' is not of the form NAME:value",
                    segment.trim()
                ))
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(BuildError::MalformedSubstitution(format!(
                    "segment '{}' has an empty name",
                    segment.trim()
                )));
            }
            if key.contains(char::is_whitespace) {
                return Err(BuildError::MalformedSubstitution(format!(
                    "name '{}' contains whitespace",
                    key
                )));
            }
            if set.get(key).is_some() {
                return Err(BuildError::MalformedSubstitution(format!(
                    "name '{}' is given more than once",
                    key
                )));
            }

            set.entries.push((key.to_string(), value.trim().to_string()));
        }

        Ok(set)
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of substitutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no substitutions were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in input order, for diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for SubstitutionSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SubstitutionSet {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_in_order() {
        let set = SubstitutionSet::parse("VERSION_LDFLAGS:bla, ELSE:else").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.names(), vec!["VERSION_LDFLAGS", "ELSE"]);
        assert_eq!(set.get("VERSION_LDFLAGS"), Some("bla"));
        assert_eq!(set.get("ELSE"), Some("else"));
    }

    #[test]
    fn trims_whitespace_around_separators() {
        let set = SubstitutionSet::parse("  A :  one  ,B:two ,   C:three").unwrap();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![("A", "one"), ("B", "two"), ("C", "three")]
        );
    }

    #[test]
    fn value_keeps_everything_after_first_colon() {
        let set = SubstitutionSet::parse("LD:-X main.url=https://example.com:8080").unwrap();
        assert_eq!(set.get("LD"), Some("-X main.url=https://example.com:8080"));
    }

    #[test]
    fn value_may_be_empty() {
        let set = SubstitutionSet::parse("EMPTY:").unwrap();
        assert_eq!(set.get("EMPTY"), Some(""));
    }

    #[test]
    fn empty_input_is_empty_set() {
        assert!(SubstitutionSet::parse("").unwrap().is_empty());
        assert!(SubstitutionSet::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let set = SubstitutionSet::parse("name:lower, NAME:upper").unwrap();
        assert_eq!(set.get("name"), Some("lower"));
        assert_eq!(set.get("NAME"), Some("upper"));
    }

    #[test]
    fn segment_without_colon_is_rejected() {
        let err = SubstitutionSet::parse("VERSION_LDFLAGS:bla, ELSE").unwrap_err();
        assert!(matches!(err, BuildError::MalformedSubstitution(_)));
        assert!(err.to_string().contains("'ELSE'"), "{err}");
    }

    #[test]
    fn trailing_comma_is_rejected() {
        let err = SubstitutionSet::parse("A:1,").unwrap_err();
        assert!(matches!(err, BuildError::MalformedSubstitution(_)));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = SubstitutionSet::parse(":value").unwrap_err();
        assert!(err.to_string().contains("empty name"), "{err}");
    }

    #[test]
    fn name_with_inner_whitespace_is_rejected() {
        let err = SubstitutionSet::parse("VERSION LDFLAGS:x").unwrap_err();
        assert!(err.to_string().contains("contains whitespace"), "{err}");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = SubstitutionSet::parse("A:1, A:2").unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn collects_from_pairs() {
        let set: SubstitutionSet = [("X", "1"), ("Y", "2")].into_iter().collect();
        assert_eq!(set.get("Y"), Some("2"));
        assert_eq!(set.get("Z"), None);
    }
}
