//! tetrad CLI - the invocation wrapper around `tetrad-matrix`.
//!
//! Loads a release configuration (`tetrad.toml` or the `tetrad` field of
//! `package.json`), derives the build matrix and writes it as JSON for the
//! external bundler to consume.
//!
//! - [`cli`] - argument definitions
//! - `commands` - `generate`, `check` and `targets`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
