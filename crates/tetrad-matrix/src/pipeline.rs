//! Transform stage lists per target format.
//!
//! Stage order matters:
//!
//! 1. `Transpile` and `ModuleResolve` always come first.
//! 2. `EnvironmentReplace` runs on the lowered source and before `Minify`, so
//!    the minifier can remove the branch the substitution made unreachable.
//! 3. `Analyze` stages run last and measure the final emitted bytes.

use serde::{Deserialize, Serialize};

use crate::format::Format;
use crate::replace::{EnvironmentMode, EnvironmentReplace};

/// Identifier mangling and compression settings for the minifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyOptions {
    pub mangle: bool,
    pub compress: bool,
}

impl MinifyOptions {
    /// Mangle and compress.
    pub fn full() -> Self {
        Self {
            mangle: true,
            compress: true,
        }
    }
}

/// Bundle-size report flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Interactive treemap.
    Html,
    /// Raw data for tooling and size-regression checks.
    Json,
}

impl ReportKind {
    /// File name of the report, relative to the package's `build` directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Html => "stats-html.html",
            Self::Json => "stats-react.json",
        }
    }
}

/// Settings for one bundle-size analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    pub report: ReportKind,
    /// Also record gzipped sizes.
    pub gzip_size: bool,
}

/// One step of a target's transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum TransformStage {
    /// Lower modern syntax and JSX.
    Transpile,
    /// Locate imported modules on disk.
    ModuleResolve,
    /// Substitute `process.env.NODE_ENV` with the build mode.
    EnvironmentReplace(EnvironmentReplace),
    Minify(MinifyOptions),
    Analyze(AnalyzeOptions),
}

impl TransformStage {
    /// Stable stage identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transpile => "transpile",
            Self::ModuleResolve => "module-resolve",
            Self::EnvironmentReplace(_) => "environment-replace",
            Self::Minify(_) => "minify",
            Self::Analyze(_) => "analyze",
        }
    }

    /// Mode carried by an `EnvironmentReplace` stage.
    pub fn environment_mode(&self) -> Option<EnvironmentMode> {
        match self {
            Self::EnvironmentReplace(replace) => Some(replace.mode),
            _ => None,
        }
    }
}

/// Ordered transform stages for `format`. Deterministic.
pub fn build_pipeline(format: Format) -> Vec<TransformStage> {
    let mut stages = vec![TransformStage::Transpile, TransformStage::ModuleResolve];

    match format {
        Format::Esm | Format::Cjs => {}
        Format::UmdDevelopment => {
            stages.push(TransformStage::EnvironmentReplace(EnvironmentReplace::new(
                EnvironmentMode::Development,
            )));
        }
        Format::UmdProduction => {
            stages.extend([
                TransformStage::EnvironmentReplace(EnvironmentReplace::new(
                    EnvironmentMode::Production,
                )),
                TransformStage::Minify(MinifyOptions::full()),
                TransformStage::Analyze(AnalyzeOptions {
                    report: ReportKind::Html,
                    gzip_size: false,
                }),
                TransformStage::Analyze(AnalyzeOptions {
                    report: ReportKind::Json,
                    gzip_size: true,
                }),
            ]);
        }
    }

    stages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(format: Format) -> Vec<&'static str> {
        build_pipeline(format).iter().map(TransformStage::name).collect()
    }

    #[test]
    fn module_trees_only_transpile_and_resolve() {
        assert_eq!(names(Format::Esm), vec!["transpile", "module-resolve"]);
        assert_eq!(build_pipeline(Format::Esm), build_pipeline(Format::Cjs));
    }

    #[test]
    fn umd_development_replaces_with_development() {
        let stages = build_pipeline(Format::UmdDevelopment);
        assert_eq!(
            names(Format::UmdDevelopment),
            vec!["transpile", "module-resolve", "environment-replace"]
        );
        assert_eq!(
            stages[2].environment_mode(),
            Some(EnvironmentMode::Development)
        );
    }

    #[test]
    fn umd_production_has_full_pipeline() {
        let stages = build_pipeline(Format::UmdProduction);
        assert_eq!(
            names(Format::UmdProduction),
            vec![
                "transpile",
                "module-resolve",
                "environment-replace",
                "minify",
                "analyze",
                "analyze"
            ]
        );
        assert_eq!(stages[2].environment_mode(), Some(EnvironmentMode::Production));
        assert_eq!(stages[3], TransformStage::Minify(MinifyOptions::full()));
        assert_eq!(
            stages[5],
            TransformStage::Analyze(AnalyzeOptions {
                report: ReportKind::Json,
                gzip_size: true
            })
        );
    }

    #[test]
    fn stages_serialize_with_tag() {
        let value = serde_json::to_value(build_pipeline(Format::UmdProduction)).unwrap();
        assert_eq!(value[0], serde_json::json!({ "stage": "transpile" }));
        assert_eq!(value[2]["stage"], "environment-replace");
        assert_eq!(value[2]["mode"], "production");
        assert_eq!(value[2]["replacement"], "\"production\"");
        assert_eq!(value[3], serde_json::json!({ "stage": "minify", "mangle": true, "compress": true }));
        assert_eq!(value[5]["report"], "json");
    }
}
