use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Small utilities: Gregorian day ordinals and a C++ symbol filter.
#[derive(Parser)]
#[command(
    name = "toolbelt",
    version,
    about = "Gregorian day ordinals and C++ symbol demangling"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the day ordinal of a date.
    Ordinal(OrdinalArgs),
    /// Print the date of a day ordinal.
    Date(DateArgs),
    /// Demangle C++ symbols, stripping any `+offset` suffix.
    Demangle(DemangleArgs),
}

/// Arguments for the `ordinal` subcommand.
#[derive(clap::Args)]
pub struct OrdinalArgs {
    /// Year (astronomical numbering, 0 = 1 BC).
    #[arg(allow_negative_numbers = true)]
    pub year: i64,

    /// Month (1-12).
    #[arg(allow_negative_numbers = true)]
    pub month: i32,

    /// Day of month.
    #[arg(allow_negative_numbers = true)]
    pub day: i32,

    /// Reject dates that do not exist (e.g. April 31).
    #[arg(long)]
    pub strict: bool,

    /// Count days from 1970-01-01 instead of 0000-03-01.
    #[arg(long)]
    pub unix: bool,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Day ordinal.
    #[arg(allow_negative_numbers = true)]
    pub ordinal: i64,

    /// Interpret the ordinal as days from 1970-01-01.
    #[arg(long)]
    pub unix: bool,
}

/// Arguments for the `demangle` subcommand.
#[derive(clap::Args)]
pub struct DemangleArgs {
    /// Mangled symbols, optionally followed by `+offset`.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// External demangler program (default `c++filt`).
    #[arg(long, conflicts_with = "builtin")]
    pub demangler: Option<String>,

    /// Demangle in-process instead of running an external program.
    #[arg(long)]
    pub builtin: bool,
}
