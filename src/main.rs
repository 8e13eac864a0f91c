mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod demangle_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Ordinal(args) => calendar_cmd::run_ordinal(args, &config.calendar),
        Command::Date(args) => calendar_cmd::run_date(args, &config.calendar),
        Command::Demangle(args) => demangle_cmd::run(args, &config.demangle),
    }
}
