use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the build matrix
    ///
    /// Emits one descriptor per package and format, in declaration order,
    /// as a JSON array.
    Generate(GenerateArgs),

    /// Validate configuration and entry files
    ///
    /// Runs schema validation, checks that every entry file exists, and
    /// derives the matrix without writing it.
    Check(CheckArgs),

    /// Describe the four output targets and their pipelines
    Targets,
}

/// Where to find the release configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a config file (tetrad.toml or package.json)
    ///
    /// Defaults to discovery in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Configuration profile to apply
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Working directory for discovery and relative package paths
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write the matrix to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Build packages on a worker pool (output order is unchanged)
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Skip the entry file existence check
    #[arg(long)]
    pub skip_fs: bool,
}
