//! Targets command implementation.

use tetrad_matrix::{build_pipeline, Format, TransformStage};

/// Print each format, its output layout and its transform stages.
pub fn execute() -> crate::Result<()> {
    for format in Format::ALL {
        let stages: Vec<_> = build_pipeline(format)
            .iter()
            .map(TransformStage::name)
            .collect();
        println!(
            "{:<9} {:<40} {}",
            format.as_str(),
            layout(format),
            stages.join(" -> ")
        );
    }
    Ok(())
}

fn layout(format: Format) -> &'static str {
    match format {
        Format::Esm => "build/esm/ (one file per module)",
        Format::Cjs => "build/cjs/ (one file per module)",
        Format::UmdDevelopment => "build/umd/index.development.js",
        Format::UmdProduction => "build/umd/index.production.js",
    }
}
