//! `ResultSink` implementations.
//!
//! Every sink writes outcomes in the order it receives them. Writer errors
//! become `HashcheckError::ReportFailed`.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use hashcheck_contracts::{
    error::{HashcheckError, HashcheckResult},
    outcome::{VerificationOutcome, VerificationSummary},
};
use hashcheck_core::traits::ResultSink;

use crate::style::{OutputFormat, StatusStyle};

fn write_failed(e: std::io::Error) -> HashcheckError {
    HashcheckError::ReportFailed {
        reason: e.to_string(),
    }
}

/// Writes one `<filename> <status>` line per outcome.
pub struct TextReporter<W: Write> {
    out: W,
    style: StatusStyle,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, style: StatusStyle) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for TextReporter<W> {
    fn report(&mut self, outcomes: &[VerificationOutcome]) -> HashcheckResult<()> {
        for outcome in outcomes {
            writeln!(self.out, "{} {}", outcome.filename, self.style.render(outcome.status))
                .map_err(write_failed)?;
        }
        self.out.flush().map_err(write_failed)?;
        debug!(lines = outcomes.len(), style = ?self.style, "text report written");
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    outcomes: &'a [VerificationOutcome],
    summary: VerificationSummary,
}

/// Writes a pretty-printed JSON document:
///
/// ```json
/// { "outcomes": [{ "filename": "a.txt", "status": "OK" }], "summary": { "total": 1, ... } }
/// ```
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for JsonReporter<W> {
    fn report(&mut self, outcomes: &[VerificationOutcome]) -> HashcheckResult<()> {
        let document = JsonDocument {
            outcomes,
            summary: VerificationSummary::from_outcomes(outcomes),
        };
        serde_json::to_writer_pretty(&mut self.out, &document).map_err(|e| {
            HashcheckError::ReportFailed {
                reason: format!("failed to serialize report: {e}"),
            }
        })?;
        writeln!(self.out).map_err(write_failed)?;
        self.out.flush().map_err(write_failed)?;
        debug!(outcomes = outcomes.len(), "json report written");
        Ok(())
    }
}

/// Keeps every reported outcome in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub outcomes: Vec<VerificationOutcome>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for CollectingSink {
    fn report(&mut self, outcomes: &[VerificationOutcome]) -> HashcheckResult<()> {
        self.outcomes.extend_from_slice(outcomes);
        Ok(())
    }
}

/// Build the sink for `format` over `out`.
pub fn sink_for<'w, W: Write + 'w>(
    format: OutputFormat,
    style: StatusStyle,
    out: W,
) -> Box<dyn ResultSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(out, style)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    }
}
