//! Run configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file passed with `--config`
//! 3. command-line flags
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! dest = "."         # "." writes t_<name> beside each source
//! size = 240         # short side of the thumbnail, in pixels
//! type = "markdown"  # markdown | hugo
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::markup::MarkupStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SIZE: u32 = 240;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Destination directory; `.` means beside each source with a `t_` prefix.
    pub dest: PathBuf,
    /// Target size of the thumbnail's short side.
    pub size: u32,
    /// Snippet flavour printed for each thumbnail.
    #[serde(rename = "type")]
    pub style: MarkupStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dest: PathBuf::from("."),
            size: DEFAULT_SIZE,
            style: MarkupStyle::default(),
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dest: Option<PathBuf>,
    pub size: Option<u32>,
    pub style: Option<MarkupStyle>,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Validation(
                "size must be a positive number of pixels".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line values on top of this config.
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            dest: overrides.dest.unwrap_or(self.dest),
            size: overrides.size.unwrap_or(self.size),
            style: overrides.style.unwrap_or(self.style),
        }
    }
}

/// Load config from `path`, or the defaults when no file is given.
///
/// A file that is named but missing is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the final settings: defaults, then file, then flags.
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Config, ConfigError> {
    let config = load_config(path)?.with_overrides(overrides);
    config.validate()?;
    Ok(config)
}
