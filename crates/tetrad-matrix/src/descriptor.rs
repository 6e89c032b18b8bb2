//! The unit handed to the external bundler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::external::ExternalClassifier;
use crate::format::Format;
use crate::pipeline::{ReportKind, TransformStage};

/// Where a target's output lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum OutputLocation {
    /// A tree of files, one per source module.
    Directory(PathBuf),
    /// A single bundle file.
    File(PathBuf),
}

impl OutputLocation {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::File(path) => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

/// How the module's exports are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportsMode {
    /// Let the bundler pick from the entry's export shape.
    #[default]
    Auto,
    /// Always emit named exports, never default-only.
    Named,
}

/// A bundle-size report written next to the production bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifact {
    pub kind: ReportKind,
    pub path: PathBuf,
}

/// Output settings for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
    pub location: OutputLocation,
    /// Module syntax (`es`, `cjs`, `umd`).
    pub module_syntax: &'static str,
    /// Package's output file stem; names the bundle in reports.
    pub name: String,
    /// Keep one output file per source module.
    pub preserve_modules: bool,
    pub exports: ExportsMode,
    pub sourcemap: bool,
    /// Global symbol the UMD wrapper assigns to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<ReportArtifact>,
}

/// Everything the external bundler needs for one (package, format) pair.
///
/// Immutable once built. `external` and `banner` are shared with the other
/// three descriptors of the same package.
#[derive(Debug, Clone, Serialize)]
pub struct BuildDescriptor {
    /// Name of the package this descriptor belongs to.
    pub package: String,
    pub format: Format,
    pub entry_path: PathBuf,
    pub external: ExternalClassifier,
    pub output: OutputOptions,
    pub pipeline: Vec<TransformStage>,
    pub banner: Arc<str>,
}

impl BuildDescriptor {
    /// Whether `module_name` is referenced rather than bundled.
    pub fn is_external(&self, module_name: &str) -> bool {
        self.external.is_external(module_name)
    }

    pub fn global_name(&self) -> Option<&str> {
        self.output.global_name.as_deref()
    }

    pub fn has_stage(&self, name: &str) -> bool {
        self.pipeline.iter().any(|stage| stage.name() == name)
    }
}
