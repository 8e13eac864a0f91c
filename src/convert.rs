//! Pure conversion functions: TOML config + CLI flags -> crate API types.

use toolbelt_symbols::Demangler;

use crate::cli::DemangleArgs;
use crate::config::DemangleToml;

/// Builds the demangler; CLI flags override the config file.
pub fn build_demangler(toml: &DemangleToml, args: &DemangleArgs) -> Demangler {
    if args.builtin {
        return Demangler::Builtin;
    }
    if let Some(ref program) = args.demangler {
        return Demangler::external(program.clone());
    }
    if toml.builtin {
        return Demangler::Builtin;
    }
    Demangler::External {
        program: toml.program.clone(),
        args: toml.args.clone(),
    }
}
