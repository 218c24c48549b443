//! Flat list encoding for argument and environment vectors.
//!
//! Vectors cross a process boundary as a single line on a line-oriented
//! channel, so they are encoded as one comma-delimited string with no
//! escaping. The format is consumed verbatim by downstream tooling and must
//! not change; sequences it cannot represent are refused by
//! [`ensure_encodable`] instead.

use crate::error::{BuildError, Result};

/// Element separator of the wire format.
pub const DELIMITER: char = ',';

/// Join `items` into a single delimited string.
///
/// An empty sequence yields the empty string. There is no trailing delimiter.
pub fn serialize<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Split a delimited string back into its elements.
///
/// The empty string yields an empty sequence. Surrounding whitespace is
/// trimmed from every element.
pub fn deserialize(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(DELIMITER).map(|item| item.trim().to_string()).collect()
}

/// Check that `items` survives a `serialize`/`deserialize` round trip and
/// stays on a single line.
///
/// `list` names the sequence in the error message (e.g. `go-command`).
pub fn ensure_encodable<S: AsRef<str>>(list: &str, items: &[S]) -> Result<()> {
    for item in items {
        let item = item.as_ref();
        let reason = if item.is_empty() {
            Some("empty element".to_string())
        } else if item.contains(DELIMITER) {
            Some(format!("element '{}' contains the '{}' delimiter", item, DELIMITER))
        } else if item.contains(['\n', '\r']) {
            Some(format!("element {:?} contains a line break", item))
        } else if item.trim() != item {
            Some(format!("element '{}' has surrounding whitespace", item))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(BuildError::MalformedList {
                list: list.to_string(),
                reason,
            });
        }
    }
    Ok(())
}
