//! The hashcheck verifier: resolves, digests and compares each record.
//!
//! For every record the verifier applies a fixed precedence:
//!
//!   Resolve → [missing? NOT_FOUND] → Digest → [unknown? UNSUPPORTED_ALGORITHM] → Compare
//!
//! The digest engine is never consulted for a file that was not found, so a
//! missing file can never be reported as an unsupported algorithm or a
//! mismatch. Outcomes come back in record order whether the run is
//! sequential or parallel.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use hashcheck_contracts::{
    algorithm::Digest,
    error::HashcheckResult,
    outcome::{VerificationOutcome, VerificationStatus, VerificationSummary},
    record::VerificationRecord,
    resolve::Resolution,
};

use crate::traits::{DigestEngine, FileResolver, ResultSink};

/// Compare a computed digest with the manifest's expectation.
///
/// Exact, case-sensitive equality: an upper-case expected digest does not
/// match the lower-case hex the engines produce.
pub fn compare_digests(computed: &str, expected: &str) -> VerificationStatus {
    if computed == expected {
        VerificationStatus::Ok
    } else {
        VerificationStatus::Fail
    }
}

/// Drives verification of a list of records against one target directory.
pub struct Verifier {
    digest: Box<dyn DigestEngine>,
    resolver: Box<dyn FileResolver>,
    parallel: bool,
}

impl Verifier {
    /// Create a sequential verifier over the given engine and resolver.
    pub fn new(digest: Box<dyn DigestEngine>, resolver: Box<dyn FileResolver>) -> Self {
        Self {
            digest,
            resolver,
            parallel: false,
        }
    }

    /// Spread records across the rayon pool. Output order is unchanged.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Verify a single record.
    pub fn verify_record(&self, base_dir: &Path, record: &VerificationRecord) -> VerificationOutcome {
        let status = self.status_for(base_dir, record);
        debug!(
            filename = %record.filename,
            algorithm = %record.algorithm,
            line = record.line,
            status = %status,
            "record verified"
        );
        VerificationOutcome::new(record.filename.clone(), status)
    }

    /// Verify every record, returning exactly one outcome per record in the
    /// same order.
    pub fn verify(&self, base_dir: &Path, records: &[VerificationRecord]) -> Vec<VerificationOutcome> {
        debug!(
            base_dir = %base_dir.display(),
            records = records.len(),
            parallel = self.parallel,
            "verification starting"
        );

        // Indexed parallel iterators collect in source order.
        let outcomes: Vec<VerificationOutcome> = if self.parallel {
            records
                .par_iter()
                .map(|record| self.verify_record(base_dir, record))
                .collect()
        } else {
            records
                .iter()
                .map(|record| self.verify_record(base_dir, record))
                .collect()
        };

        let summary = VerificationSummary::from_outcomes(&outcomes);
        info!(
            total = summary.total,
            ok = summary.ok,
            fail = summary.fail,
            not_found = summary.not_found,
            unsupported_algorithm = summary.unsupported_algorithm,
            access_denied = summary.access_denied,
            "verification complete"
        );

        outcomes
    }

    /// Verify `records` and hand the ordered outcomes to `sink`.
    ///
    /// Returns the run summary so callers can pick an exit status without
    /// re-walking the outcomes.
    pub fn verify_into(
        &self,
        base_dir: &Path,
        records: &[VerificationRecord],
        sink: &mut dyn ResultSink,
    ) -> HashcheckResult<VerificationSummary> {
        let outcomes = self.verify(base_dir, records);
        sink.report(&outcomes)?;
        Ok(VerificationSummary::from_outcomes(&outcomes))
    }

    fn status_for(&self, base_dir: &Path, record: &VerificationRecord) -> VerificationStatus {
        // ── Step 1: resolve ──────────────────────────────────────────────────
        let content = match self.resolver.resolve(base_dir, &record.filename) {
            Resolution::Found(content) => content,
            Resolution::NotFound => {
                warn!(filename = %record.filename, line = record.line, "target file not found");
                return VerificationStatus::NotFound;
            }
            Resolution::AccessDenied => {
                warn!(filename = %record.filename, line = record.line, "target file not readable");
                return VerificationStatus::AccessDenied;
            }
        };

        // ── Step 2: digest ───────────────────────────────────────────────────
        let computed = match self.digest.digest(&content, &record.algorithm) {
            Digest::Computed(hex) => hex,
            Digest::Unsupported => {
                warn!(
                    filename = %record.filename,
                    algorithm = %record.algorithm,
                    line = record.line,
                    "unsupported hash algorithm"
                );
                return VerificationStatus::UnsupportedAlgorithm;
            }
        };

        // ── Step 3: compare ──────────────────────────────────────────────────
        let status = compare_digests(&computed, &record.expected_digest);
        if status == VerificationStatus::Fail {
            debug!(
                filename = %record.filename,
                expected = %record.expected_digest,
                actual = %computed,
                "digest mismatch"
            );
        }
        status
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
