//! Offset stripping and demangler dispatch.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::SymbolError;

/// Default external demangler.
pub const DEFAULT_PROGRAM: &str = "c++filt";

/// Returns `symbol` up to, not including, the first `+`.
///
/// `backtrace_symbols(3)` style frames append `+0x<offset>` to the mangled
/// name, which external demanglers do not understand.
///
/// ```
/// use toolbelt_symbols::strip_offset;
///
/// assert_eq!(strip_offset("_ZN3foo3barEv+0x1a"), "_ZN3foo3barEv");
/// assert_eq!(strip_offset("main"), "main");
/// ```
pub fn strip_offset(symbol: &str) -> &str {
    symbol.split('+').next().unwrap_or(symbol)
}

/// How symbols get demangled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demangler {
    /// Run an external program once per symbol as `program args... symbol`.
    External {
        /// Program name or path.
        program: String,
        /// Arguments placed before the symbol.
        args: Vec<String>,
    },
    /// Demangle in-process (Itanium C++ ABI).
    Builtin,
}

impl Default for Demangler {
    fn default() -> Self {
        Self::external(DEFAULT_PROGRAM)
    }
}

impl Demangler {
    /// External demangler with no extra arguments.
    pub fn external(program: impl Into<String>) -> Self {
        Self::External {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Returns the command that demangles one symbol, with the offset
    /// already stripped. `None` for [`Demangler::Builtin`].
    pub fn command_for(&self, symbol: &str) -> Option<Command> {
        match self {
            Self::External { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args).arg(strip_offset(symbol));
                Some(cmd)
            }
            Self::Builtin => None,
        }
    }

    /// Demangles each symbol in order and writes the results to `out`.
    ///
    /// The external program's stdout is copied to `out`; its stderr is
    /// inherited. Its exit status is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::NoSymbols`] if `symbols` is empty,
    /// [`SymbolError::Spawn`] if the external program cannot be started,
    /// and [`SymbolError::Write`] if writing to `out` fails.
    pub fn demangle_all<S: AsRef<str>>(
        &self,
        symbols: &[S],
        out: &mut impl Write,
    ) -> Result<(), SymbolError> {
        if symbols.is_empty() {
            return Err(SymbolError::NoSymbols);
        }
        for symbol in symbols {
            let symbol = symbol.as_ref();
            match self.command_for(symbol) {
                Some(cmd) => run_external(cmd, out)?,
                None => writeln!(out, "{}", demangle_builtin(strip_offset(symbol)))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn run_external(mut cmd: Command, out: &mut impl Write) -> Result<(), SymbolError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    trace!(?cmd, "spawning demangler");
    let output = cmd
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| SymbolError::Spawn { program, source })?;
    debug!(status = %output.status, "demangler exited");
    out.write_all(&output.stdout)?;
    Ok(())
}

/// Demangles an Itanium C++ symbol, returning the input unchanged when it
/// does not parse.
pub fn demangle_builtin(symbol: &str) -> String {
    cpp_demangle::Symbol::new(symbol)
        .ok()
        .and_then(|sym| sym.demangle(&cpp_demangle::DemangleOptions::default()).ok())
        .unwrap_or_else(|| symbol.to_string())
}
