//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`]. They are long-only:
//! generator flags such as `-v` or `-ns=Game` are passed through to
//! `srcmake new` verbatim, so no single-letter option may exist here.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO, twice for DEBUG, three times for TRACE.
    #[arg(
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (repeat for more)",
        long_help = "Increase logging verbosity:
    (none)            - Only warnings and errors
    --verbose         - Info level (progress messages)
    --verbose x2      - Debug level (detailed diagnostics)
    --verbose x3      - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Settings file path.
    #[arg(
        long = "settings",
        global = true,
        env = "SRCMAKE_SETTINGS",
        value_name = "FILE",
        help = "User settings file (author, email, lineend)"
    )]
    pub settings: Option<PathBuf>,
}
