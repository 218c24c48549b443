//! Build configuration model for gobuilder.
//!
//! This module defines `BuildConfig`, the declarative description of one Go
//! build read from a YAML file. Parsing is strict: unknown fields are
//! rejected and values that would let the configuration smuggle extra
//! arguments or output lines into the pipeline are refused during
//! validation.
//!
//! # File Format
//!
//! ```yaml
//! version: 1
//! goos: linux
//! goarch: amd64
//! binary: binary-linux-amd64
//! flags:
//!   - -trimpath
//!   - -tags=netgo
//! ldflags:
//!   - VERSION_LDFLAGS
//!   - something-else
//! env:
//!   - GO111MODULE=on
//!   - CGO_ENABLED=0
//! ```

mod model;
mod operations;
pub mod types;


pub use model::BuildConfig;
pub use types::LdflagsTemplate;
