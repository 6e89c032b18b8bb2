//! tetrad CLI - derive a release's ESM, CJS and UMD build matrix.
//!
//! Parses arguments, installs logging and dispatches to a command.

use clap::Parser;
use miette::Result;
use tetrad_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Targets => commands::targets_execute(),
    };

    // Convert CLI errors to miette diagnostics for readable reports
    result.map_err(error::cli_error_to_miette)
}
