//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, ValueEnum};
use srcmake_core::domain::{FileType, Language, SettingKey};

pub mod global;
pub use global::GlobalArgs;

const LANGUAGES_HELP: &str = "\
LANGUAGES:
  c              C
  cpp | c++      C++
  csharp | c#    C#
  rust | rs      Rust";

const FILE_TYPES_HELP: &str = "\
FILE TYPES:
  main              A main file (all languages)
  struct            A struct (all languages)
  header            A C/C++ header file
  source            A C/C++ source file
  class             A C++ header and source pair, or a C# class
  template          A C++ class template header and inline file
  singleton         A C++11 header and source pair, or a C# singleton
  singleton03       A pre-C++11 singleton header and source pair
  interface         A C# interface
  monobehaviour     A Unity MonoBehaviour script
  scriptableobject  A Unity ScriptableObject script
  lib               A Rust lib file
  trait             A Rust trait file
  Header and source halves such as classheader can also be named directly.";

const FLAGS_HELP: &str = "\
GENERATOR FLAGS (after NAME):
  All languages:
    -a=<v>    | -author=<v>     Author for just these files
    -e=<v>    | -email=<v>      Author email for just these files
    -l=<v>    | -lineend=<v>    Line endings for just these files (windows|unix)
  C, C++ and C#:
    -ns=<v>   | -namespace=<v>  Enclosing namespace
  C and C++:
    -i=<v>    | -include=<v>    Add an include (repeatable)
  C++:
    -v        | -virtual        Make the destructor virtual
    -pub=<v>  | -public=<v>     Add a public base class (repeatable)
    -prot=<v> | -protected=<v>  Add a protected base class (repeatable)
    -priv=<v> | -private=<v>    Add a private base class (repeatable)
  C#:
    -u=<v>    | -using=<v>      Add a using directive (repeatable)
    -ac=<v>   | -access=<v>     Access level (public|protected|private)
    -pr       | -partial        Make the class partial
    -ab       | -abstract       Make the class abstract
    -se       | -sealed         Make the class sealed
    -st       | -static         Make the class static
    -i=<v>    | -inherit=<v>    Add a base class or interface (repeatable)";

const SETTINGS_HELP: &str = "\
SETTINGS:
  author   Default author
  email    Default author contact email
  lineend  Default line endings (windows|unix)";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "srcmake",
    bin_name = "srcmake",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate boilerplate source files for C, C++, C# and Rust",
    long_about = "srcmake writes ready-to-edit source files from built-in templates, \
                  filling in names, header guards, namespaces, base classes and \
                  author details.",
    after_help = "EXAMPLES:\n\
        \x20 srcmake new cpp class Player -ns=Game -pub=Actor -v\n\
        \x20 srcmake new csharp singleton GameManager -ns=Core -se\n\
        \x20 srcmake set author \"Jane Doe\"\n\
        \x20 srcmake list cpp\n\
        \x20 srcmake completions bash > /usr/share/bash-completion/completions/srcmake",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate source files.
    #[command(
        visible_aliases = ["n", "gen"],
        about = "Generate source files",
        after_help = format!(
            "{LANGUAGES_HELP}\n\n{FILE_TYPES_HELP}\n\n{FLAGS_HELP}\n\n\
             EXAMPLES:\n\
             \x20 srcmake new c header vecMath -i=stddef.h\n\
             \x20 srcmake new cpp template Grid -ns=Math\n\
             \x20 srcmake new --out-dir src rust trait Shape"
        )
    )]
    New(NewArgs),

    /// Change a persisted setting.
    #[command(
        about = "Set a default setting",
        after_help = format!(
            "{SETTINGS_HELP}\n\n\
             EXAMPLES:\n\
             \x20 srcmake set author \"Jane Doe\"\n\
             \x20 srcmake set lineend unix"
        )
    )]
    Set(SetArgs),

    /// Restore a persisted setting to its default.
    #[command(about = "Reset a setting to its default", after_help = SETTINGS_HELP)]
    Reset(ResetArgs),

    /// Print the current settings.
    #[command(about = "Show current settings and where they are stored")]
    Settings,

    /// List what can be generated.
    #[command(
        visible_alias = "ls",
        about = "List file types per language",
        after_help = "EXAMPLES:\n\
            \x20 srcmake list\n\
            \x20 srcmake list csharp\n\
            \x20 srcmake list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 srcmake completions bash > ~/.local/share/bash-completion/completions/srcmake\n\
            \x20 srcmake completions zsh  > ~/.zfunc/_srcmake\n\
            \x20 srcmake completions fish > ~/.config/fish/completions/srcmake.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `srcmake new`.
///
/// Options must come before LANGUAGE; everything after NAME is handed to
/// the generator untouched.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory the files are written to.
    #[arg(
        long = "out-dir",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub out_dir: Option<PathBuf>,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Print the files instead of writing them")]
    pub dry_run: bool,

    /// Target language.
    #[arg(value_name = "LANGUAGE", value_parser = Language::from_str)]
    pub language: Language,

    /// Kind of file(s) to generate.
    #[arg(value_name = "TYPE", value_parser = FileType::from_str)]
    pub file_type: FileType,

    /// Type name, also used as the file name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Generator flags such as `-ns=Game` or `-v`.
    #[arg(
        value_name = "FLAGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub flags: Vec<String>,
}

// ── set / reset ───────────────────────────────────────────────────────────────

/// Arguments for `srcmake set`.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Setting name.
    #[arg(value_name = "SETTING", value_parser = SettingKey::from_str)]
    pub setting: SettingKey,

    /// New value. Quotes are stripped.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for `srcmake reset`.
#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Setting name.
    #[arg(value_name = "SETTING", value_parser = SettingKey::from_str)]
    pub setting: SettingKey,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `srcmake list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show this language.
    #[arg(value_name = "LANGUAGE", value_parser = Language::from_str)]
    pub language: Option<Language>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `language file-type` pair per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `srcmake completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
