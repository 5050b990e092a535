//! Digest computation over in-memory content.
//!
//! Every supported algorithm goes through the same path: the RustCrypto
//! `Digest` implementation hashes the whole buffer, and the output is hex
//! encoded in lower case.

use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use tracing::trace;

use hashcheck_contracts::algorithm::{Digest, HashAlgorithm};
use hashcheck_core::traits::DigestEngine;

fn hex_digest<D: sha2::Digest>(content: &[u8]) -> String {
    hex::encode(D::digest(content))
}

/// Compute the lower-case hex digest of `content` under `algorithm`.
pub fn compute(algorithm: HashAlgorithm, content: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(content),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(content),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(content),
    }
}

/// Digest `content` under an algorithm given by name (any case).
///
/// Returns `Digest::Unsupported` when the name is not `md5`, `sha1` or
/// `sha256`.
pub fn digest(content: &[u8], algorithm: &str) -> Digest {
    match HashAlgorithm::from_name(algorithm) {
        Some(alg) => {
            trace!(algorithm = %alg, bytes = content.len(), "computing digest");
            Digest::Computed(compute(alg, content))
        }
        None => Digest::Unsupported,
    }
}

/// The default `DigestEngine`, backed by the RustCrypto hash crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDigestEngine;

impl DigestEngine for StandardDigestEngine {
    fn digest(&self, content: &[u8], algorithm: &str) -> Digest {
        digest(content, algorithm)
    }
}
