//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).
//! Per-package field checks (empty entry file, display name, output base name)
//! are not repeated here; the matrix generator reports those when it builds
//! the package's targets.

use std::collections::HashSet;
use std::path::Path;

use crate::config::ReleaseConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &ReleaseConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use tetrad_config::{ConfigValidator, PackageDeclaration, ReleaseConfig, SchemaValidator};
///
/// let mut config = ReleaseConfig::default();
/// config.organization = "Ranger Labs".into();
/// config.packages.push(PackageDeclaration::new(
///     "ranger-core",
///     "packages/ranger-core",
///     "RangerCore",
///     "ranger-core",
///     "src/index.jsx",
/// ));
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ReleaseConfig) -> Result<()> {
        if config.organization.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "organization cannot be empty".to_string(),
                hint: Some("Set 'organization' to the copyright holder".to_string()),
            });
        }

        if config.packages.is_empty() {
            return Err(ConfigError::NoPackages);
        }

        for (name, global) in config.peers.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "peer dependency names cannot be empty".to_string(),
                    hint: Some("Remove empty keys from the 'peers' table".to_string()),
                });
            }
            if global.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("peer dependency '{name}' has no global symbol"),
                    hint: Some(format!(
                        "Map '{name}' to the global variable UMD consumers read it from"
                    )),
                });
            }
        }

        let mut seen = HashSet::new();
        for package in &config.packages {
            if !seen.insert(package.name.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("package '{}' is declared more than once", package.name),
                    hint: Some("Package names must be unique within a release".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks every package's entry file exists
/// under the root directory.
///
/// # Example
///
/// ```no_run
/// use tetrad_config::{ConfigValidator, FsValidator, ReleaseConfig};
///
/// let config = ReleaseConfig::default();
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ReleaseConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for package in &config.packages {
            let path = self.root.join(package.entry_path());
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound {
                    package: package.name.clone(),
                    path,
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ReleaseConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &ReleaseConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
