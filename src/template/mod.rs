//! Placeholder substitution for the ldflags template.
//!
//! This is not a templating language. A placeholder is any
//! literal occurrence of a substitution name inside the template; it is
//! replaced by plain substring replacement with no word-boundary checks, so
//! `VERSION` also matches inside `VERSION_LDFLAGS`. Placeholders without a
//! matching substitution are left in the output untouched.
//!
//! # Example
//!
//! ```text
//! template:      "VERSION_LDFLAGS something-else"
//! substitutions: "VERSION_LDFLAGS:bla, ELSE:else"
//! result:        "bla something-else"
//! ```

mod substitutions;

pub use substitutions::SubstitutionSet;

/// Resolve every substitution name inside `template`.
///
/// Names are applied in the set's input order. An empty template yields an
/// empty string.
pub fn evaluate(template: &str, substitutions: &SubstitutionSet) -> String {
    let mut resolved = template.to_string();
    if resolved.is_empty() {
        return resolved;
    }

    for (name, value) in substitutions.iter() {
        if resolved.contains(name) {
            resolved = resolved.replace(name, value);
        }
    }

    resolved
}
