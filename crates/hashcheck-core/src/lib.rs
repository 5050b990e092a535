//! # hashcheck-core
//!
//! The verification engine for hashcheck.
//!
//! This crate provides:
//! - The three capability traits (`DigestEngine`, `FileResolver`, `ResultSink`)
//! - The `Verifier` that applies them to each manifest record in a fixed order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hashcheck_core::Verifier;
//!
//! let verifier = Verifier::new(Box::new(StandardDigestEngine), Box::new(FsResolver::new()));
//! let outcomes = verifier.verify(Path::new("downloads"), &manifest.records);
//! ```

pub mod traits;
pub mod verifier;

pub use traits::{DigestEngine, FileResolver, ResultSink};
pub use verifier::{compare_digests, Verifier};
