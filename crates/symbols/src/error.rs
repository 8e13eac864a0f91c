//! Error types for the toolbelt-symbols crate.

use std::io;

/// Error type for all fallible operations in the toolbelt-symbols crate.
#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    /// Returned when no symbols were given.
    #[error("no symbols to demangle")]
    NoSymbols,

    /// Returned when the external demangler could not be started.
    #[error("failed to run demangler {program:?}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Returned when demangled output could not be written.
    #[error("failed to write demangled output")]
    Write(#[from] io::Error),
}
