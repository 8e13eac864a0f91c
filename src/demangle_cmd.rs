//! Demangle command: strip offsets and forward symbols to a demangler.

use std::io;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::DemangleArgs;
use crate::config::DemangleToml;
use crate::convert;

/// Run the symbol filter.
pub fn run(args: DemangleArgs, config: &DemangleToml) -> Result<()> {
    let _cmd = info_span!("demangle").entered();
    let demangler = convert::build_demangler(config, &args);
    info!(n = args.symbols.len(), ?demangler, "demangling symbols");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demangler
        .demangle_all(&args.symbols, &mut out)
        .context("demangling failed")
}
