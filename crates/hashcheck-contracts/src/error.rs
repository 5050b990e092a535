//! Error types for the hashcheck pipeline.
//!
//! Only conditions that stop a run are errors. A missing file, an unknown
//! algorithm or a digest mismatch is a per-record `VerificationStatus`, never
//! a `HashcheckError`.

use thiserror::Error;

/// The unified error type for the hashcheck crates.
#[derive(Debug, Error)]
pub enum HashcheckError {
    /// A manifest line does not split into exactly three space-separated fields.
    ///
    /// Parsing is fail-fast: no record of the manifest is verified.
    #[error("malformed manifest line {line}: expected 3 space-separated fields, found {fields}: {content:?}")]
    ManifestFormat {
        line: usize,
        content: String,
        fields: usize,
    },

    /// The manifest file could not be read.
    #[error("failed to read manifest '{path}': {reason}")]
    ManifestRead { path: String, reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A result sink could not write the outcome list.
    #[error("report failed: {reason}")]
    ReportFailed { reason: String },
}

/// Convenience alias used throughout the hashcheck crates.
pub type HashcheckResult<T> = Result<T, HashcheckError>;
