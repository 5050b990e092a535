//! Hash algorithm identifiers and digest results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel text returned in place of a digest or file content when the
/// lookup failed. Only meaningful next to the accompanying boolean flag.
pub const NOT_FOUND_SENTINEL: &str = "NOT FOUND";

/// The closed set of hash functions a manifest may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Every recognized algorithm, in manifest spelling order.
    pub const ALL: [HashAlgorithm; 3] = [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256];

    /// Look up an algorithm by name, ignoring ASCII case.
    ///
    /// Returns `None` for anything outside the recognized set; callers turn
    /// that into an `UNSUPPORTED_ALGORITHM` outcome rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical lower-case name, as written in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of digesting content under a named algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digest {
    /// Lower-case hex encoding of the digest.
    Computed(String),
    /// The algorithm name was not recognized.
    Unsupported,
}

impl Digest {
    pub fn is_supported(&self) -> bool {
        matches!(self, Digest::Computed(_))
    }

    /// The hex digest, or [`NOT_FOUND_SENTINEL`] when unsupported.
    pub fn as_str(&self) -> &str {
        match self {
            Digest::Computed(hex) => hex,
            Digest::Unsupported => NOT_FOUND_SENTINEL,
        }
    }

    /// The `(supported, result)` pair form.
    pub fn into_pair(self) -> (bool, String) {
        match self {
            Digest::Computed(hex) => (true, hex),
            Digest::Unsupported => (false, NOT_FOUND_SENTINEL.to_string()),
        }
    }
}
