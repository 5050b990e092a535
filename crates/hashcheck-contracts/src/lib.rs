//! # hashcheck-contracts
//!
//! Shared types and error definitions for the hashcheck verification engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and their small accessors.

pub mod algorithm;
pub mod error;
pub mod outcome;
pub mod record;
pub mod resolve;

#[cfg(test)]
mod tests {
    use super::*;
    use algorithm::{Digest, HashAlgorithm, NOT_FOUND_SENTINEL};
    use error::HashcheckError;
    use outcome::{VerificationOutcome, VerificationStatus, VerificationSummary};
    use record::VerificationRecord;
    use resolve::Resolution;

    // ── HashAlgorithm ────────────────────────────────────────────────────────

    #[test]
    fn algorithm_names_match_case_insensitively() {
        assert_eq!(HashAlgorithm::from_name("md5"), Some(HashAlgorithm::Md5));
        assert_eq!(HashAlgorithm::from_name("MD5"), Some(HashAlgorithm::Md5));
        assert_eq!(HashAlgorithm::from_name("Sha1"), Some(HashAlgorithm::Sha1));
        assert_eq!(HashAlgorithm::from_name("SHA256"), Some(HashAlgorithm::Sha256));
    }

    #[test]
    fn unknown_algorithm_names_are_rejected() {
        assert_eq!(HashAlgorithm::from_name("crc32"), None);
        assert_eq!(HashAlgorithm::from_name("sha2567"), None);
        assert_eq!(HashAlgorithm::from_name("sha-256"), None);
        assert_eq!(HashAlgorithm::from_name(""), None);
    }

    #[test]
    fn algorithm_display_is_canonical_name() {
        for alg in HashAlgorithm::ALL {
            assert_eq!(alg.to_string(), alg.as_str());
            assert_eq!(HashAlgorithm::from_name(&alg.to_string()), Some(alg));
        }
    }

    // ── Digest / Resolution pair forms ───────────────────────────────────────

    #[test]
    fn unsupported_digest_uses_sentinel() {
        assert!(!Digest::Unsupported.is_supported());
        assert_eq!(Digest::Unsupported.as_str(), NOT_FOUND_SENTINEL);
        assert_eq!(
            Digest::Unsupported.into_pair(),
            (false, "NOT FOUND".to_string())
        );

        let computed = Digest::Computed("abc123".to_string());
        assert!(computed.is_supported());
        assert_eq!(computed.into_pair(), (true, "abc123".to_string()));
    }

    #[test]
    fn resolution_existence_is_decided_by_variant() {
        // A file whose content happens to equal the sentinel still exists.
        let found = Resolution::Found(b"NOT FOUND".to_vec());
        assert!(found.exists());
        assert_eq!(found.into_pair(), (true, b"NOT FOUND".to_vec()));

        assert!(!Resolution::NotFound.exists());
        assert!(!Resolution::AccessDenied.exists());
        assert!(!Resolution::NotFound.into_pair().0);
    }

    // ── VerificationStatus ───────────────────────────────────────────────────

    #[test]
    fn legacy_rendering_collapses_lookup_failures() {
        assert_eq!(VerificationStatus::Ok.legacy_str(), "OK");
        assert_eq!(VerificationStatus::Fail.legacy_str(), "FAIL");
        assert_eq!(VerificationStatus::NotFound.legacy_str(), "NOT FOUND");
        assert_eq!(VerificationStatus::UnsupportedAlgorithm.legacy_str(), "NOT FOUND");
        assert_eq!(VerificationStatus::AccessDenied.legacy_str(), "NOT FOUND");
    }

    #[test]
    fn distinct_rendering_keeps_causes_apart() {
        assert_eq!(VerificationStatus::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(
            VerificationStatus::UnsupportedAlgorithm.to_string(),
            "UNSUPPORTED_ALGORITHM"
        );
        assert_eq!(VerificationStatus::AccessDenied.to_string(), "ACCESS_DENIED");
    }

    #[test]
    fn status_serializes_as_distinct_token() {
        let json = serde_json::to_string(&VerificationStatus::UnsupportedAlgorithm).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_ALGORITHM\"");
        let decoded: VerificationStatus = serde_json::from_str("\"OK\"").unwrap();
        assert_eq!(decoded, VerificationStatus::Ok);
    }

    // ── VerificationSummary ──────────────────────────────────────────────────

    #[test]
    fn summary_counts_each_status() {
        let outcomes = vec![
            VerificationOutcome::new("a.txt", VerificationStatus::Ok),
            VerificationOutcome::new("b.txt", VerificationStatus::Fail),
            VerificationOutcome::new("c.txt", VerificationStatus::NotFound),
            VerificationOutcome::new("d.txt", VerificationStatus::UnsupportedAlgorithm),
            VerificationOutcome::new("a.txt", VerificationStatus::Ok),
        ];
        let summary = VerificationSummary::from_outcomes(&outcomes);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.ok, 2);
        assert_eq!(summary.fail, 1);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.unsupported_algorithm, 1);
        assert_eq!(summary.access_denied, 0);
        assert!(!summary.all_ok());
    }

    #[test]
    fn empty_summary_is_all_ok() {
        assert!(VerificationSummary::from_outcomes(&[]).all_ok());
    }

    // ── VerificationRecord ───────────────────────────────────────────────────

    #[test]
    fn record_builder_sets_line() {
        let record = VerificationRecord::new("a.txt", "md5", "00").at_line(7);
        assert_eq!(record.filename, "a.txt");
        assert_eq!(record.algorithm, "md5");
        assert_eq!(record.expected_digest, "00");
        assert_eq!(record.line, 7);
    }

    // ── HashcheckError display messages ──────────────────────────────────────

    #[test]
    fn error_manifest_format_display() {
        let err = HashcheckError::ManifestFormat {
            line: 3,
            content: "a.txt md5".to_string(),
            fields: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("found 2"));
        assert!(msg.contains("a.txt md5"));
    }

    #[test]
    fn error_manifest_read_display() {
        let err = HashcheckError::ManifestRead {
            path: "/tmp/manifest.txt".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/manifest.txt"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn error_config_display() {
        let err = HashcheckError::ConfigError {
            reason: "unknown format 'xml'".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn error_report_failed_display() {
        let err = HashcheckError::ReportFailed {
            reason: "broken pipe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("report failed"));
        assert!(msg.contains("broken pipe"));
    }
}
