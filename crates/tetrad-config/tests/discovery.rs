//! Tests for config file discovery, profiles and environment overrides.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;
use tetrad_config::{ConfigDiscovery, ConfigError};

// Removes the variable even if the test panics.
struct EnvGuard(&'static str);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(self.0);
        }
    }
}

const RELEASE_TOML: &str = r#"
organization = "Ranger Labs"

[peers]
"solid-js" = "Solid"

[[packages]]
name = "ranger-core"
package_directory = "packages/ranger-core"
display_name = "RangerCore"
output_base_name = "ranger-core"
entry_file = "src/index.jsx"

[[packages]]
name = "ranger-ui"
package_directory = "packages/ranger-ui"
display_name = "RangerUI"
output_base_name = "ranger-ui"
entry_file = "src/index.tsx"

[profiles.ci.settings]
parallel = true
"#;

#[test]
#[serial]
fn discovers_tetrad_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tetrad.toml"), RELEASE_TOML).unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "tetrad.toml");

    let config = discovery.load().unwrap();
    assert_eq!(config.organization, "Ranger Labs");
    let names: Vec<_> = config.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["ranger-core", "ranger-ui"]);
    assert_eq!(
        config.packages[1].entry_file,
        PathBuf::from("src/index.tsx")
    );
}

#[test]
#[serial]
fn discovers_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "ranger",
  "tetrad": {
    "organization": "Ranger Labs",
    "peers": { "solid-js": "Solid" },
    "packages": [{
      "name": "ranger-core",
      "packageDirectory": "packages/ranger-core",
      "displayName": "RangerCore",
      "outputFile": "ranger-core",
      "entryFile": "src/index.jsx"
    }]
  }
}"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    assert_eq!(discovery.find().unwrap().file_name().unwrap(), "package.json");

    let config = discovery.load().unwrap();
    assert_eq!(config.packages[0].display_name, "RangerCore");
    assert!(config.peers.contains("solid-js"));
}

#[test]
#[serial]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tetrad.toml"), RELEASE_TOML).unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "tetrad": { "organization": "Someone Else" } }"#,
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.organization, "Ranger Labs");
}

#[test]
#[serial]
fn null_package_json_field_is_not_discovered() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "tetrad": null }"#).unwrap();

    let result = ConfigDiscovery::new(dir.path()).load();
    assert!(matches!(result, Err(ConfigError::NotFound)));
}

#[test]
#[serial]
fn profile_overrides_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tetrad.toml"), RELEASE_TOML).unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    assert!(!discovery.load().unwrap().settings.parallel);

    let config = discovery.load_with_profile("ci").unwrap();
    assert!(config.settings.parallel);
    assert_eq!(config.packages.len(), 2);
}

#[test]
#[serial]
fn environment_overrides_organization() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tetrad.toml"), RELEASE_TOML).unwrap();

    let _env = EnvGuard("TETRAD_ORGANIZATION");
    unsafe {
        std::env::set_var("TETRAD_ORGANIZATION", "Override Inc.");
    }

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.organization, "Override Inc.");
}

#[test]
#[serial]
fn malformed_toml_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tetrad.toml"), "organization = [").unwrap();

    let result = ConfigDiscovery::new(dir.path()).load();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
