//! Command-line interface definition.
//!
//! - `tetrad generate` - write the build matrix as JSON
//! - `tetrad check` - validate configuration and entry files
//! - `tetrad targets` - describe the four output targets

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, GenerateArgs};

/// tetrad - build-target matrix generator
#[derive(Parser, Debug)]
#[command(
    name = "tetrad",
    version,
    about = "Derive ESM, CJS and UMD build descriptors for a library release",
    long_about = "tetrad reads a release configuration and derives, for every package,\n\
                  the four build descriptors (ESM tree, CJS tree, UMD development and\n\
                  UMD production bundles) consumed by an external bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
