//! File resolution results.

use crate::algorithm::NOT_FOUND_SENTINEL;

/// What a `FileResolver` found at `base_dir/filename`.
///
/// Only `Found` carries content. Callers must branch on the variant (or on
/// `exists()`), never on the bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A regular file; its full byte content.
    Found(Vec<u8>),
    /// Missing, not a regular file, or unreadable.
    NotFound,
    /// The path exists but could not be read due to permissions.
    ///
    /// Only produced by resolvers that opt in to distinguishing it; the
    /// default behavior folds permission errors into `NotFound`.
    AccessDenied,
}

impl Resolution {
    pub fn exists(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The `(exists, content)` pair form. Absent files yield the
    /// [`NOT_FOUND_SENTINEL`] bytes alongside `false`.
    pub fn into_pair(self) -> (bool, Vec<u8>) {
        match self {
            Resolution::Found(bytes) => (true, bytes),
            Resolution::NotFound | Resolution::AccessDenied => {
                (false, NOT_FOUND_SENTINEL.as_bytes().to_vec())
            }
        }
    }
}
