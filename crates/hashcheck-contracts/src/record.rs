//! Manifest records.

use serde::{Deserialize, Serialize};

/// One manifest line: which file to check, with what, against what.
///
/// Constructed by the manifest parser and consumed once by the verifier.
/// `algorithm` stays raw text so an unrecognized name can be reported per
/// record instead of rejecting the whole manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Path of the target file, relative to the target directory.
    pub filename: String,
    /// Hash function name as written in the manifest (any case).
    pub algorithm: String,
    /// Expected lower-case hex digest.
    pub expected_digest: String,
    /// 1-based line number in the manifest. Zero when built by hand.
    #[serde(default)]
    pub line: usize,
}

impl VerificationRecord {
    pub fn new(
        filename: impl Into<String>,
        algorithm: impl Into<String>,
        expected_digest: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            algorithm: algorithm.into(),
            expected_digest: expected_digest.into(),
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}
