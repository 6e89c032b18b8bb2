//! File-based config discovery for CLI use
//!
//! Handles finding and loading release configuration files from the filesystem.
//! Every source is layered through `figment`: built-in defaults, then the file,
//! then `TETRAD_`-prefixed environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format as _, Serialized, Toml};
use figment::Figment;
use serde_json::Value;

use crate::config::ReleaseConfig;
use crate::error::{ConfigError, Result};

/// Name of the dedicated configuration file.
pub const CONFIG_FILE: &str = "tetrad.toml";

/// Field read from `package.json` when no dedicated file exists.
pub const PACKAGE_JSON_FIELD: &str = "tetrad";

/// File-based configuration discovery
///
/// Searches for configuration files in conventional locations and loads them.
/// Library users should prefer `ReleaseConfig::from_value()`.
///
/// # Example
///
/// ```no_run
/// use tetrad_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: tetrad.toml
    /// 2. package.json (tetrad field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ReleaseConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<ReleaseConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path
    ///
    /// `package.json` is read through its `tetrad` field, `.toml` files
    /// directly. Anything else is rejected.
    pub fn load_from(&self, path: &Path) -> Result<ReleaseConfig> {
        tracing::debug!(path = %path.display(), "loading release configuration");

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                if !path.exists() {
                    return Err(ConfigError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("{} does not exist", path.display()),
                    )));
                }
                extract(base_figment().merge(Toml::file(path)))
            }
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ReleaseConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let field = parsed
            .get(PACKAGE_JSON_FIELD)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'tetrad' field to your package.json".to_string()),
            })?;

        if field.is_null() {
            return Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'tetrad' field cannot be null".to_string()),
            });
        }

        extract(base_figment().merge(Serialized::defaults(field.clone())))
    }
}

fn base_figment() -> Figment {
    Figment::new().merge(Serialized::defaults(ReleaseConfig::default()))
}

/// Environment overrides go last. Only `organization` and `settings.*` are
/// overridable: `TETRAD_ORGANIZATION`, `TETRAD_SETTINGS__PARALLEL`, ...
fn extract(figment: Figment) -> Result<ReleaseConfig> {
    let env = Env::prefixed("TETRAD_")
        .filter(|key| key == "organization" || key.starts_with("settings__"))
        .split("__");

    figment
        .merge(env)
        .extract()
        .map_err(|e| ConfigError::InvalidValue {
            field: if e.path.is_empty() {
                "config".to_string()
            } else {
                e.path.join(".")
            },
            hint: Some(e.to_string()),
        })
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use tetrad_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<ReleaseConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use tetrad_config::discover_with_profile;
///
/// let config = discover_with_profile("production").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<ReleaseConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
