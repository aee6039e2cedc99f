//! Configuration for the indc driver.
//!
//! Settings come from an optional TOML file, given with `-c` or found as
//! `indc.toml` in the working directory, and are then overridden by
//! command-line flags. Every field has a default, so a partial file is
//! valid.
//!
//! ```toml
//! color = "never"
//! format = "json"
//! keep_going = true
//! verbose = false
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use indc_lex::TraceFormat;
use indc_util::ColorConfig;
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "indc.toml";

/// When diagnostics are colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Only when stderr is a terminal
    #[default]
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

impl From<ColorChoice> for ColorConfig {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorConfig::Auto,
            ColorChoice::Always => ColorConfig::Always,
            ColorChoice::Never => ColorConfig::Never,
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Diagnostic coloring.
    #[serde(default)]
    pub color: ColorChoice,

    /// Token trace format.
    #[serde(default)]
    pub format: TraceFormat,

    /// Continue with the next file after a failure.
    #[serde(default)]
    pub keep_going: bool,

    /// Debug logging.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| DriverError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml(&text).map_err(|err| DriverError::Config {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    /// Load `indc.toml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }
}
