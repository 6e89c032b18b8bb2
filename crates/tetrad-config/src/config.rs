//! High-level configuration structure for a release.
//!
//! This module provides the main `ReleaseConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::package::PackageDeclaration;
use crate::peers::PeerDependencySet;
use crate::settings::GlobalSettings;

/// Everything one generation run needs: the packages to build, the peer
/// dependencies they share, and the organization named in the banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Copyright holder printed in every banner.
    #[serde(default)]
    pub organization: String,

    #[serde(default)]
    pub peers: PeerDependencySet,

    #[serde(default)]
    pub packages: Vec<PackageDeclaration>,

    /// Named overrides, deep-merged onto the base config by `materialize_profile`.
    #[serde(default)]
    pub profiles: HashMap<String, Value>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl ReleaseConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use tetrad_config::ReleaseConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "organization": "Ranger Labs",
    ///     "peers": { "solid-js": "Solid" },
    ///     "packages": [{
    ///         "name": "ranger-core",
    ///         "package_directory": "packages/ranger-core",
    ///         "display_name": "RangerCore",
    ///         "output_base_name": "ranger-core",
    ///         "entry_file": "src/index.jsx"
    ///     }]
    /// });
    ///
    /// let config = ReleaseConfig::from_value(value).unwrap();
    /// assert_eq!(config.packages.len(), 1);
    /// assert!(config.peers.contains("solid-js"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Apply the named profile's overrides. `None` returns the config untouched.
    ///
    /// Objects merge key by key; arrays and scalars replace. A `packages`
    /// override therefore swaps the whole package list.
    pub fn materialize_profile(self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: name.to_string(),
            })?;

        if overrides.is_null() {
            return Ok(self);
        }

        tracing::debug!(profile = name, "applying configuration profile");

        let profiles = self.profiles.clone();
        let mut base =
            serde_json::to_value(&self).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut base, &overrides);

        let mut merged: ReleaseConfig =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.profiles = profiles;
        Ok(merged)
    }

    /// Make every relative `package_directory` relative to `root` instead.
    ///
    /// Declarations are written relative to the config file; descriptors must
    /// name paths the bundler can open from where it is invoked.
    pub fn rebase_packages(&mut self, root: &Path) {
        if root.as_os_str().is_empty() {
            return;
        }
        for package in &mut self.packages {
            if package.package_directory.is_relative() {
                package.package_directory = root.join(&package.package_directory);
            }
        }
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
