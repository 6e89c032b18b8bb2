//! End-to-end tests for the `tetrad` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

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
"#;

fn tetrad() -> Command {
    let mut cmd = Command::cargo_bin("tetrad").unwrap();
    cmd.env_remove("TETRAD_ORGANIZATION")
        .env_remove("TETRAD_SETTINGS__PARALLEL")
        .env_remove("RUST_LOG");
    cmd
}

fn release(config: &str, entries: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tetrad.toml"), config).unwrap();
    for entry in entries {
        write_entry(dir.path(), entry);
    }
    dir
}

fn write_entry(root: &Path, entry: &str) {
    let path = root.join(entry);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "export const version = '1.0.0';\n").unwrap();
}

#[test]
fn generate_prints_matrix_to_stdout() {
    let dir = release(RELEASE_TOML, &[]);

    let output = tetrad()
        .arg("generate")
        .arg("--cwd")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let matrix: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = matrix.as_array().unwrap();
    assert_eq!(entries.len(), 8);

    let formats: Vec<_> = entries.iter().map(|e| e["format"].as_str().unwrap()).collect();
    assert_eq!(
        formats,
        vec!["esm", "cjs", "umd-dev", "umd-prod", "esm", "cjs", "umd-dev", "umd-prod"]
    );
    assert_eq!(entries[0]["package"], "ranger-core");
    assert_eq!(entries[4]["package"], "ranger-ui");
    assert_eq!(entries[2]["output"]["global_name"], "RangerCore");
    assert_eq!(entries[0]["external"]["globals"]["solid-js"], "Solid");
    assert!(
        entries[0]["banner"]
            .as_str()
            .unwrap()
            .contains("Ranger Labs")
    );
}

#[test]
fn generate_parallel_matches_sequential() {
    let dir = release(RELEASE_TOML, &[]);

    let run = |parallel: bool| {
        let mut cmd = tetrad();
        cmd.arg("generate").arg("--cwd").arg(dir.path());
        if parallel {
            cmd.arg("--parallel");
        }
        let output = cmd.output().unwrap();
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run(false), run(true));
}

#[test]
fn generate_writes_out_file() {
    let dir = release(RELEASE_TOML, &[]);

    tetrad()
        .args(["generate", "--pretty", "--out", "dist/matrix.json", "--cwd"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote 8 descriptors for 2 packages"));

    let written = fs::read_to_string(dir.path().join("dist/matrix.json")).unwrap();
    assert!(written.starts_with("[\n"));
    let matrix: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(matrix.as_array().unwrap().len(), 8);
}

#[test]
fn generate_with_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let release_dir = dir.path().join("release");
    fs::create_dir_all(&release_dir).unwrap();
    fs::write(release_dir.join("ranger.toml"), RELEASE_TOML).unwrap();
    write_entry(&release_dir, "packages/ranger-core/src/index.jsx");

    let output = tetrad()
        .current_dir(dir.path())
        .args(["generate", "--config", "release/ranger.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let matrix: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry_path = matrix[0]["entry_path"].as_str().unwrap();
    assert_eq!(
        Path::new(entry_path),
        Path::new("release/packages/ranger-core/src/index.jsx")
    );
    assert!(dir.path().join(entry_path).is_file());
    assert_eq!(
        matrix[0]["output"]["location"]["path"],
        "release/packages/ranger-core/build/esm"
    );
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    tetrad()
        .args(["generate", "--config", "nope.toml", "--cwd"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn no_config_found_has_hint() {
    let dir = TempDir::new().unwrap();

    tetrad()
        .arg("generate")
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tetrad.toml"));
}

#[test]
fn misconfigured_package_fails_generation() {
    let config = RELEASE_TOML.replace("display_name = \"RangerUI\"", "display_name = \"\"");
    let dir = release(&config, &[]);

    tetrad()
        .arg("generate")
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_passes_when_entries_exist() {
    let dir = release(
        RELEASE_TOML,
        &[
            "packages/ranger-core/src/index.jsx",
            "packages/ranger-ui/src/index.tsx",
        ],
    );

    tetrad()
        .arg("check")
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("2 packages, 1 peer dependencies"));
}

#[test]
fn check_reports_missing_entry() {
    let dir = release(RELEASE_TOML, &["packages/ranger-core/src/index.jsx"]);

    tetrad()
        .arg("check")
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ranger-ui"));
}

#[test]
fn check_skip_fs_ignores_missing_entries() {
    let dir = release(RELEASE_TOML, &[]);

    tetrad()
        .args(["check", "--skip-fs", "--cwd"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn unknown_profile_fails() {
    let dir = release(RELEASE_TOML, &[]);

    tetrad()
        .args(["generate", "--profile", "staging", "--cwd"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn targets_lists_formats_and_pipelines() {
    tetrad()
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("esm"))
        .stdout(predicate::str::contains("build/umd/index.production.js"))
        .stdout(predicate::str::contains(
            "transpile -> module-resolve -> environment-replace -> minify -> analyze -> analyze",
        ));
}
