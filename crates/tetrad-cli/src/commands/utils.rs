//! Shared helpers for commands.

use std::path::{Path, PathBuf};

use tetrad_config::{ConfigDiscovery, ReleaseConfig};

use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};

/// A loaded configuration plus the directories paths are resolved against.
pub(crate) struct LoadedConfig {
    pub config: ReleaseConfig,
    /// Directory the declared package paths are relative to.
    pub root: PathBuf,
    /// `--cwd`, or empty for the process working directory.
    pub cwd: PathBuf,
}

/// Load the release configuration named by `args`, applying the profile.
///
/// With `--config`, package paths are relative to that file's directory.
/// Otherwise discovery runs in `--cwd` (or the process working directory).
/// Relative arguments stay relative so emitted paths do too.
pub(crate) fn load_config(args: &ConfigArgs) -> Result<LoadedConfig> {
    let cwd = args.cwd.clone().unwrap_or_default();

    let (config, root) = match &args.config {
        Some(path) => {
            let path = resolve_path(path, &cwd);
            if !path.is_file() {
                return Err(CliError::FileNotFound(path));
            }
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            (ConfigDiscovery::new(&root).load_from(&path)?, root)
        }
        None => (ConfigDiscovery::new(&cwd).load()?, cwd.clone()),
    };

    let config = config.materialize_profile(args.profile.as_deref())?;
    tracing::debug!(
        root = %root.display(),
        packages = config.packages.len(),
        peers = config.peers.len(),
        "configuration loaded"
    );

    Ok(LoadedConfig { config, root, cwd })
}

/// Resolve `path` against `cwd` unless it is already absolute.
pub(crate) fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
