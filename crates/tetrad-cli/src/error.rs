//! Error handling for the tetrad CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! final error into a miette report with a hint where one helps.

use std::path::PathBuf;

use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] tetrad_config::ConfigError),

    /// A package could not produce its targets
    #[error("Matrix error: {0}")]
    Matrix(#[from] tetrad_matrix::Error),

    /// Config file passed with --config does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

impl CliError {
    /// Suggested fix shown under the error, if any.
    pub fn hint(&self) -> Option<String> {
        use tetrad_config::ConfigError;

        match self {
            CliError::Config(ConfigError::NotFound) => Some(
                "Create a tetrad.toml, add a 'tetrad' field to package.json, or pass --config <path>"
                    .to_string(),
            ),
            CliError::Config(ConfigError::InvalidValue { hint, .. })
            | CliError::Config(ConfigError::SchemaValidation { hint, .. }) => hint.clone(),
            CliError::Config(ConfigError::EntryNotFound { .. }) => Some(
                "Check 'package_directory' and 'entry_file', or run with --skip-fs".to_string(),
            ),
            CliError::Config(ConfigError::UnknownProfile { .. }) => {
                Some("Profiles are declared under [profiles.<name>]".to_string())
            }
            CliError::Matrix(tetrad_matrix::Error::MisconfiguredPackage { .. }) => Some(
                "Every package needs a non-empty entry_file, display_name and output_base_name"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!("{}\n\nHint: {}", err, hint),
        None => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrad_matrix::{Error as MatrixError, Misconfiguration};

    #[test]
    fn misconfigured_package_has_hint() {
        let err = CliError::from(MatrixError::MisconfiguredPackage {
            package: "ranger-core".into(),
            reason: Misconfiguration::EmptyEntryFile,
        });
        assert_eq!(
            err.to_string(),
            "Matrix error: misconfigured package 'ranger-core': entry file is empty"
        );
        assert!(err.hint().unwrap().contains("entry_file"));
    }

    #[test]
    fn report_includes_hint() {
        let report = cli_error_to_miette(tetrad_config::ConfigError::NotFound.into());
        assert!(report.to_string().contains("Hint: Create a tetrad.toml"));
    }

    #[test]
    fn io_error_has_no_hint() {
        let err = CliError::from(std::io::Error::other("disk full"));
        assert!(err.hint().is_none());
    }
}
