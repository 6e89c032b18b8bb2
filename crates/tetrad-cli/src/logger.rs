//! Logging setup for the tetrad CLI.
//!
//! The libraries only emit `tracing` events; this installs the subscriber.
//!
//! # Example
//!
//! ```rust,no_run
//! use tetrad_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("generating matrix");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "tetrad_cli=debug,tetrad_config=debug,tetrad_matrix=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "tetrad_cli=info,tetrad_config=info,tetrad_matrix=info";

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// The level is chosen in this order:
/// 1. `--verbose`: debug for tetrad crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for tetrad crates
///
/// Logs go to stderr so JSON written to stdout stays clean.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Whether stderr should receive ANSI colors.
///
/// `NO_COLOR` disables, `FORCE_COLOR` forces, otherwise terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
