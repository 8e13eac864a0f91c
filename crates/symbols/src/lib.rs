//! # toolbelt-symbols
//!
//! Demangles C++ symbols taken from stack traces.
//!
//! Frames printed by `backtrace_symbols(3)` carry a `+0x<offset>` suffix.
//! Each symbol is cut at its first `+` and handed to a demangler, by default
//! an external `c++filt` run once per symbol.
//!
//! ```
//! use toolbelt_symbols::Demangler;
//!
//! let mut out = Vec::new();
//! Demangler::Builtin.demangle_all(&["_ZN3foo3barEv+0x1a"], &mut out).unwrap();
//! assert_eq!(out, b"foo::bar()\n");
//! ```

mod error;
mod filter;

pub use error::SymbolError;
pub use filter::{DEFAULT_PROGRAM, Demangler, demangle_builtin, strip_offset};
