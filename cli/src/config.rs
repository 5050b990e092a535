//! Run configuration.
//!
//! Defaults can be kept in a TOML file passed with `--config`; command-line
//! flags take precedence over it. Each boolean has a `--no-` flag, so a value
//! the file turns on can be turned off for a single run.
//!
//! ```toml
//! [report]
//! format = "text"           # "text" | "json"
//! status_style = "distinct" # "distinct" | "legacy"
//!
//! [verify]
//! parallel = false
//! access_denied = false
//! strict = false
//! ```

use std::path::Path;

use serde::Deserialize;

use hashcheck_contracts::error::{HashcheckError, HashcheckResult};
use hashcheck_report::{OutputFormat, StatusStyle};

/// How results are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: OutputFormat,
    pub status_style: StatusStyle,
}

/// How records are verified and how the run is judged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Verify records on the rayon pool.
    pub parallel: bool,
    /// Report unreadable files as `ACCESS_DENIED` instead of `NOT_FOUND`.
    pub access_denied: bool,
    /// Exit with status 2 unless every record is `OK`.
    pub strict: bool,
}

/// The top-level structure deserialized from a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub report: ReportConfig,
    pub verify: VerifyConfig,
}

impl Config {
    /// Parse `s` as TOML.
    ///
    /// Returns `HashcheckError::ConfigError` if the TOML is malformed or has
    /// keys this version does not know.
    pub fn from_toml_str(s: &str) -> HashcheckResult<Self> {
        toml::from_str(s).map_err(|e| HashcheckError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> HashcheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HashcheckError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
