use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use toolbelt_symbols::DEFAULT_PROGRAM;

/// Top-level toolbelt configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolbeltConfig {
    /// Defaults for the `ordinal` and `date` subcommands.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Defaults for the `demangle` subcommand.
    #[serde(default)]
    pub demangle: DemangleToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub unix_epoch: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemangleToml {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub builtin: bool,
}

impl Default for DemangleToml {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            builtin: false,
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

/// Loads the config file, or defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<ToolbeltConfig> {
    let Some(path) = path else {
        return Ok(ToolbeltConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}
