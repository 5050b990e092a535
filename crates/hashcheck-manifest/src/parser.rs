//! Manifest text parsing.
//!
//! Parsing algorithm:
//!
//! 1. Split the text on `'\n'`, numbering lines from 1, and drop one
//!    trailing `'\r'` from each line so CRLF manifests read the same.
//! 2. Skip lines that are empty (a final newline produces one).
//! 3. Split every other line on the single space character. Empty fields
//!    after the third (trailing spaces) are dropped; what remains must be
//!    exactly three fields: filename, algorithm, expected digest.
//! 4. Any other field count fails the whole parse with `ManifestFormat`.
//!
//! Field contents are not validated. An unknown algorithm or a non-hex digest
//! is the verifier's business, reported per record.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use hashcheck_contracts::{
    error::{HashcheckError, HashcheckResult},
    record::VerificationRecord,
};

/// Field separator within a manifest line.
pub const FIELD_SEPARATOR: char = ' ';

/// Parse one non-empty manifest line.
///
/// `line` is the 1-based line number, echoed in errors and on the record.
pub fn parse_line(line: usize, text: &str) -> HashcheckResult<VerificationRecord> {
    let mut fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    while fields.len() > 3 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    match fields.as_slice() {
        [filename, algorithm, expected_digest] => {
            Ok(VerificationRecord::new(*filename, *algorithm, *expected_digest).at_line(line))
        }
        _ => {
            warn!(line, fields = fields.len(), "malformed manifest line");
            Err(HashcheckError::ManifestFormat {
                line,
                content: text.to_string(),
                fields: fields.len(),
            })
        }
    }
}

/// Parse manifest text into records, in line order.
pub fn parse(text: &str) -> HashcheckResult<Vec<VerificationRecord>> {
    let records = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect::<HashcheckResult<Vec<_>>>()?;

    debug!(records = records.len(), "manifest parsed");
    Ok(records)
}

/// A parsed manifest: the ordered records it declares.
///
/// ```rust,ignore
/// use hashcheck_manifest::Manifest;
///
/// let manifest = Manifest::from_file(Path::new("SHASUMS.txt"))?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub records: Vec<VerificationRecord>,
}

impl Manifest {
    /// Parse `text` as a manifest.
    ///
    /// Returns `HashcheckError::ManifestFormat` for the first line that does
    /// not hold exactly three fields.
    pub fn parse(text: &str) -> HashcheckResult<Self> {
        Ok(Self {
            records: parse(text)?,
        })
    }

    /// Read the file at `path` and parse it as a manifest.
    ///
    /// Returns `HashcheckError::ManifestRead` if the file cannot be read as
    /// UTF-8 text.
    pub fn from_file(path: &Path) -> HashcheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HashcheckError::ManifestRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&contents)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
