//! # hashcheck-digest
//!
//! Lower-case hex digests of byte content for the three algorithms a
//! manifest may name: `md5`, `sha1` and `sha256`.
//!
//! [`StandardDigestEngine`] implements
//! [`DigestEngine`](hashcheck_core::traits::DigestEngine) for use with the
//! verifier; [`digest`] and [`compute`] are the same logic as free functions.

pub mod engine;

pub use engine::{compute, digest, StandardDigestEngine};

// ── Tests ─────────────────────────────────────────────────────────────────────
