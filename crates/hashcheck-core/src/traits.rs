//! Capability traits for the hashcheck pipeline.
//!
//! These three traits are the seams between the verifier and the outside
//! world:
//!
//! - `DigestEngine` computes a digest of bytes under a named algorithm
//! - `FileResolver` turns `(base_dir, filename)` into file content
//! - `ResultSink`   receives the ordered outcome list
//!
//! The `Verifier` only ever talks to these traits, so every step can be
//! swapped for a mock in tests.

use std::path::Path;

use hashcheck_contracts::{
    algorithm::Digest, error::HashcheckResult, outcome::VerificationOutcome, resolve::Resolution,
};

/// Computes digests of in-memory content.
///
/// Implementations must be pure: the same `(content, algorithm)` always
/// yields the same `Digest`, and no byte content can make this fail. An
/// unrecognized algorithm is a normal `Digest::Unsupported` return.
pub trait DigestEngine: Send + Sync {
    fn digest(&self, content: &[u8], algorithm: &str) -> Digest;
}

/// Locates and reads target files.
///
/// The verifier calls this once per record. Implementations decide what
/// counts as "present"; the contract is that only a readable regular file
/// yields `Resolution::Found`.
pub trait FileResolver: Send + Sync {
    fn resolve(&self, base_dir: &Path, filename: &str) -> Resolution;
}

/// Consumes the verifier's output.
///
/// `outcomes` is in manifest order; sinks must preserve that order.
pub trait ResultSink {
    fn report(&mut self, outcomes: &[VerificationOutcome]) -> HashcheckResult<()>;
}
