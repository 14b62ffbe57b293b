//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `srcmake-core` and
//! `srcmake-adapters` only emit spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)                    | Filter level |
//! |----------------------------|--------------|
//! | (none)                     | WARN         |
//! | `--verbose`                | INFO         |
//! | `--verbose --verbose`      | DEBUG        |
//! | `--verbose` x3 or more     | TRACE        |
//! | `--quiet`                  | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. Events go
/// to stderr so generated output on stdout stays clean.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Targets that emit events: the binary and both library crates.
const TARGETS: [&str; 3] = ["srcmake", "srcmake_core", "srcmake_adapters"];

/// One `target=level` directive per crate, comma separated.
fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_for(verbose: u8, quiet: bool) -> &'static str {
        derive_level(&GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            settings: None,
        })
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let cases = [
            (0, false, "warn"),
            (1, false, "info"),
            (2, false, "debug"),
            (3, false, "trace"),
            (10, false, "trace"),
            (0, true, "error"),
            (3, true, "error"),
        ];
        for (verbose, quiet, expected) in cases {
            assert_eq!(level_for(verbose, quiet), expected, "verbose={verbose} quiet={quiet}");
        }
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            directives("debug"),
            "srcmake=debug,srcmake_core=debug,srcmake_adapters=debug"
        );
    }
}
