//! # hashcheck-manifest
//!
//! Parser for checksum manifests.
//!
//! ## Format
//!
//! One record per line, three fields separated by a single space:
//!
//! ```text
//! <filename> <algorithm> <expected-hex-digest>
//! ```
//!
//! Empty lines are ignored, CRLF line endings are accepted, and trailing
//! spaces after the digest are dropped. There is no quoting, escaping or
//! comment syntax, so filenames and algorithm names cannot contain spaces.

pub mod parser;

pub use parser::{parse, parse_line, Manifest, FIELD_SEPARATOR};

// ── Tests ─────────────────────────────────────────────────────────────────────
