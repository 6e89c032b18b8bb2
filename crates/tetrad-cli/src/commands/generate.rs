//! Generate command implementation.

use std::fs;

use tetrad_config::validate_schema;
use tetrad_matrix::MatrixGenerator;

use crate::cli::GenerateArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the generate command.
///
/// 1. Load configuration and apply the profile
/// 2. Schema validation
/// 3. Rebase package directories onto the config file's directory
/// 4. Derive the matrix (parallel if requested by flag or settings)
/// 5. Write JSON to `--out` (relative to `--cwd`) or stdout
pub fn execute(args: GenerateArgs) -> Result<()> {
    let loaded = utils::load_config(&args.config)?;
    let mut config = loaded.config;
    validate_schema(&config)?;
    config.rebase_packages(&loaded.root);

    let generator = MatrixGenerator::from_config(&config);
    let matrix = if args.parallel || config.settings.parallel {
        generator.generate_parallel(&config.packages)?
    } else {
        generator.generate(&config.packages)?
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&matrix)?
    } else {
        serde_json::to_string(&matrix)?
    };

    match args.out {
        Some(path) => {
            let path = utils::resolve_path(&path, &loaded.cwd);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, format!("{json}\n"))?;
            ui::success(&format!(
                "Wrote {} descriptors for {} packages to {}",
                matrix.len(),
                config.packages.len(),
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
