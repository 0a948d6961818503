//! Deploy-time configuration.
//!
//! The preamble toggles are deliberately not runtime flags: the CLI surface
//! is fixed to the two positional paths. They live in an optional
//! `compact.toml` in the working directory instead, so a deployment can pin
//! them without rebuilding.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Configuration file consulted in the working directory, if present.
pub const CONFIG_FILE: &str = "compact.toml";

/// Toggles controlling the output preamble.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Suppress the fixed base-entries block.
    #[serde(default)]
    pub omit_base: bool,

    /// Suppress the leading timestamp comment.
    #[serde(default)]
    pub omit_timestamp: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Load `path` if it exists, falling back to the defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
