//! Per-package declaration consumed by the matrix generator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A library package that ships as the four standard build targets.
///
/// Declarations are read once from configuration and never mutated. Field
/// names accept both `snake_case` (TOML) and `camelCase` (package.json)
/// spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    /// Human-readable package identifier, printed in the license banner.
    pub name: String,

    /// Base directory; every output path is rooted here.
    #[serde(alias = "packageDirectory", alias = "dir")]
    pub package_directory: PathBuf,

    /// Global symbol the UMD bundles assign to (e.g. `RangerCore`).
    #[serde(alias = "displayName")]
    pub display_name: String,

    /// File stem for the package's emitted files.
    #[serde(alias = "outputBaseName", alias = "outputFile", alias = "output_file")]
    pub output_base_name: String,

    /// Public entry module, relative to `package_directory`.
    #[serde(alias = "entryFile", alias = "entry")]
    pub entry_file: PathBuf,
}

impl PackageDeclaration {
    pub fn new(
        name: impl Into<String>,
        package_directory: impl Into<PathBuf>,
        display_name: impl Into<String>,
        output_base_name: impl Into<String>,
        entry_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            package_directory: package_directory.into(),
            display_name: display_name.into(),
            output_base_name: output_base_name.into(),
            entry_file: entry_file.into(),
        }
    }

    /// Entry module path joined onto the package directory.
    pub fn entry_path(&self) -> PathBuf {
        self.package_directory.join(&self.entry_file)
    }

    /// Root of every artifact emitted for this package.
    pub fn build_dir(&self) -> PathBuf {
        self.package_directory.join("build")
    }
}
