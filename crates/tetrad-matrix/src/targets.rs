//! Per-format descriptor builders.
//!
//! Each builder takes the same immutable [`TargetContext`] and nothing else,
//! so the four targets cannot disagree on entry, externals or banner.

use std::path::PathBuf;
use std::sync::Arc;

use tetrad_config::PackageDeclaration;

use crate::banner::license_banner;
use crate::descriptor::{BuildDescriptor, ExportsMode, OutputLocation, OutputOptions, ReportArtifact};
use crate::error::{Error, Misconfiguration, Result};
use crate::external::ExternalClassifier;
use crate::format::Format;
use crate::pipeline::{build_pipeline, ReportKind};

/// Inputs shared by all four targets of one package.
#[derive(Debug, Clone)]
pub struct TargetContext {
    pub package: String,
    pub entry_path: PathBuf,
    pub build_dir: PathBuf,
    pub global_name: String,
    pub output_name: String,
    pub external: ExternalClassifier,
    pub banner: Arc<str>,
}

impl TargetContext {
    /// Check the declaration and resolve everything the builders share.
    ///
    /// # Errors
    ///
    /// [`Error::MisconfiguredPackage`] when the entry file, display name or
    /// output base name is empty.
    pub fn new(
        package: &PackageDeclaration,
        external: &ExternalClassifier,
        organization: &str,
    ) -> Result<Self> {
        let reason = if package.entry_file.as_os_str().is_empty() {
            Some(Misconfiguration::EmptyEntryFile)
        } else if package.display_name.trim().is_empty() {
            Some(Misconfiguration::EmptyDisplayName)
        } else if package.output_base_name.trim().is_empty() {
            Some(Misconfiguration::EmptyOutputBaseName)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::MisconfiguredPackage {
                package: package.name.clone(),
                reason,
            });
        }

        Ok(Self {
            package: package.name.clone(),
            entry_path: package.entry_path(),
            build_dir: package.build_dir(),
            global_name: package.display_name.clone(),
            output_name: package.output_base_name.clone(),
            external: external.clone(),
            banner: Arc::from(license_banner(&package.name, organization)),
        })
    }

    fn descriptor(&self, format: Format, output: OutputOptions) -> BuildDescriptor {
        tracing::debug!(
            package = %self.package,
            format = %format,
            output = %output.location.path().display(),
            "built target descriptor"
        );

        BuildDescriptor {
            package: self.package.clone(),
            format,
            entry_path: self.entry_path.clone(),
            external: self.external.clone(),
            output,
            pipeline: build_pipeline(format),
            banner: Arc::clone(&self.banner),
        }
    }

    fn output(&self, format: Format, location: OutputLocation) -> OutputOptions {
        OutputOptions {
            location,
            module_syntax: format.module_syntax(),
            name: self.output_name.clone(),
            preserve_modules: false,
            exports: ExportsMode::Auto,
            sourcemap: true,
            global_name: None,
            reports: Vec::new(),
        }
    }
}

/// ES module tree under `build/esm`.
pub fn esm(ctx: &TargetContext) -> BuildDescriptor {
    let mut output = ctx.output(
        Format::Esm,
        OutputLocation::Directory(ctx.build_dir.join("esm")),
    );
    output.preserve_modules = true;
    ctx.descriptor(Format::Esm, output)
}

/// CommonJS tree under `build/cjs` with named exports.
pub fn cjs(ctx: &TargetContext) -> BuildDescriptor {
    let mut output = ctx.output(
        Format::Cjs,
        OutputLocation::Directory(ctx.build_dir.join("cjs")),
    );
    output.preserve_modules = true;
    output.exports = ExportsMode::Named;
    ctx.descriptor(Format::Cjs, output)
}

/// Unminified UMD bundle with development code paths.
pub fn umd_development(ctx: &TargetContext) -> BuildDescriptor {
    let mut output = ctx.output(
        Format::UmdDevelopment,
        OutputLocation::File(ctx.build_dir.join("umd").join("index.development.js")),
    );
    output.global_name = Some(ctx.global_name.clone());
    ctx.descriptor(Format::UmdDevelopment, output)
}

/// Minified UMD bundle plus HTML and JSON size reports.
pub fn umd_production(ctx: &TargetContext) -> BuildDescriptor {
    let mut output = ctx.output(
        Format::UmdProduction,
        OutputLocation::File(ctx.build_dir.join("umd").join("index.production.js")),
    );
    output.global_name = Some(ctx.global_name.clone());
    output.reports = [ReportKind::Html, ReportKind::Json]
        .into_iter()
        .map(|kind| ReportArtifact {
            kind,
            path: ctx.build_dir.join(kind.file_name()),
        })
        .collect();
    ctx.descriptor(Format::UmdProduction, output)
}

/// Build the four descriptors of `package` in matrix order.
///
/// Fails before producing anything if the declaration is misconfigured.
pub fn build_targets(
    package: &PackageDeclaration,
    external: &ExternalClassifier,
    organization: &str,
) -> Result<[BuildDescriptor; 4]> {
    let ctx = TargetContext::new(package, external, organization)?;
    Ok([
        esm(&ctx),
        cjs(&ctx),
        umd_development(&ctx),
        umd_production(&ctx),
    ])
}
