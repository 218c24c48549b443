//! gobuilder: deterministic Go build-command synthesis.
//!
//! Turns a declarative build config plus a pipeline-supplied substitution
//! string into the exact compiler argument vector and environment, and
//! serializes both for a downstream stage that re-executes them verbatim.

pub mod assemble;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod list;
pub mod pipeline;
pub mod template;
