//! Per-record verification outcomes and run summaries.
//!
//! The verifier emits exactly one `VerificationOutcome` per record, in
//! manifest order. `VerificationSummary` is a derived view over that list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::NOT_FOUND_SENTINEL;

/// The verdict for a single manifest record.
///
/// Variants are listed in precedence order: a record is `NotFound` (or
/// `AccessDenied`) before its algorithm is even looked at, and
/// `UnsupportedAlgorithm` before any comparison happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    NotFound,
    AccessDenied,
    UnsupportedAlgorithm,
    Fail,
    Ok,
}

impl VerificationStatus {
    /// Distinct status token, one per variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Ok => "OK",
            VerificationStatus::Fail => "FAIL",
            VerificationStatus::NotFound => "NOT_FOUND",
            VerificationStatus::UnsupportedAlgorithm => "UNSUPPORTED_ALGORITHM",
            VerificationStatus::AccessDenied => "ACCESS_DENIED",
        }
    }

    /// Three-token rendering: every cause other than a match or a mismatch
    /// collapses into `NOT FOUND`.
    pub fn legacy_str(&self) -> &'static str {
        match self {
            VerificationStatus::Ok => "OK",
            VerificationStatus::Fail => "FAIL",
            VerificationStatus::NotFound
            | VerificationStatus::UnsupportedAlgorithm
            | VerificationStatus::AccessDenied => NOT_FOUND_SENTINEL,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, VerificationStatus::Ok)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result for one record, echoing its filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub filename: String,
    pub status: VerificationStatus,
}

impl VerificationOutcome {
    pub fn new(filename: impl Into<String>, status: VerificationStatus) -> Self {
        Self {
            filename: filename.into(),
            status,
        }
    }
}

/// Per-status counts over an outcome list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub ok: usize,
    pub fail: usize,
    pub not_found: usize,
    pub unsupported_algorithm: usize,
    pub access_denied: usize,
}

impl VerificationSummary {
    pub fn from_outcomes(outcomes: &[VerificationOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome.status {
                VerificationStatus::Ok => summary.ok += 1,
                VerificationStatus::Fail => summary.fail += 1,
                VerificationStatus::NotFound => summary.not_found += 1,
                VerificationStatus::UnsupportedAlgorithm => summary.unsupported_algorithm += 1,
                VerificationStatus::AccessDenied => summary.access_denied += 1,
            }
        }
        summary
    }

    /// True when every record verified. An empty run counts as all OK.
    pub fn all_ok(&self) -> bool {
        self.ok == self.total
    }
}
