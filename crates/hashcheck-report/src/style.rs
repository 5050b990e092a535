//! Report rendering options.
//!
//! Both enums deserialize from lower-case strings so they can be set from a
//! TOML config file, and parse from the same strings on the command line.
//!
//! ```toml
//! format = "json"
//! status_style = "legacy"
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hashcheck_contracts::{error::HashcheckError, outcome::VerificationStatus};

/// How statuses are spelled in text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStyle {
    /// One token per status: `OK`, `FAIL`, `NOT_FOUND`,
    /// `UNSUPPORTED_ALGORITHM`, `ACCESS_DENIED`.
    #[default]
    Distinct,
    /// `OK`, `FAIL`, and `NOT FOUND` for everything else.
    Legacy,
}

impl StatusStyle {
    pub fn render(&self, status: VerificationStatus) -> &'static str {
        match self {
            StatusStyle::Distinct => status.as_str(),
            StatusStyle::Legacy => status.legacy_str(),
        }
    }
}

impl FromStr for StatusStyle {
    type Err = HashcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distinct" => Ok(StatusStyle::Distinct),
            "legacy" => Ok(StatusStyle::Legacy),
            other => Err(HashcheckError::ConfigError {
                reason: format!("unknown status style '{other}' (expected 'distinct' or 'legacy')"),
            }),
        }
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<filename> <status>` lines.
    #[default]
    Text,
    /// A single JSON document with outcomes and a summary.
    Json,
}

impl FromStr for OutputFormat {
    type Err = HashcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(HashcheckError::ConfigError {
                reason: format!("unknown output format '{other}' (expected 'text' or 'json')"),
            }),
        }
    }
}
