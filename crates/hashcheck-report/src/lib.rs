//! # hashcheck-report
//!
//! Result sinks for the hashcheck verifier.
//!
//! - [`TextReporter`]: `<filename> <status>` lines, in distinct or legacy
//!   status spelling
//! - [`JsonReporter`]: one JSON document with outcomes and a summary
//! - [`CollectingSink`]: keeps outcomes in memory

pub mod sink;
pub mod style;

pub use sink::{sink_for, CollectingSink, JsonReporter, TextReporter};
pub use style::{OutputFormat, StatusStyle};

// ── Tests ─────────────────────────────────────────────────────────────────────
