//! Check command implementation.
//!
//! Validates configuration and entry files without writing anything.

use tetrad_config::{ConfigValidator, FsValidator, SchemaValidator};
use tetrad_matrix::MatrixGenerator;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Schema validation always runs; entry files are checked unless
/// `--skip-fs`. Finally every package's targets are derived so declaration
/// errors surface here rather than at generation time.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let loaded = utils::load_config(&args.config)?;
    let config = &loaded.config;

    if args.skip_fs {
        SchemaValidator.validate(config)?;
    } else {
        FsValidator::new(&loaded.root).validate(config)?;
        ui::success("All entry files exist");
    }

    let generator = MatrixGenerator::from_config(config);
    for package in &config.packages {
        generator.build_targets(package)?;
    }

    if config.peers.is_empty() {
        ui::warning("No peer dependencies declared; every import will be bundled");
    }

    ui::success(&format!(
        "Configuration is valid: {} packages, {} peer dependencies",
        config.packages.len(),
        config.peers.len()
    ));
    Ok(())
}
