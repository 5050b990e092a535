//! In-memory implementation of `FileResolver`.
//!
//! Files are keyed by the joined path (`base_dir.join(filename)`), so the
//! same filename under two target directories are two different files, just
//! as on disk.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use hashcheck_contracts::resolve::Resolution;
use hashcheck_core::traits::FileResolver;

use crate::fs::target_path;

/// A `FileResolver` backed by a map of paths to contents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResolver {
    files: HashMap<PathBuf, Vec<u8>>,
    denied: HashSet<PathBuf>,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        self.denied.remove(&path);
        self.files.insert(path, content.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Mark a path as present but unreadable.
    pub fn deny(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.files.remove(&path);
        self.denied.insert(path);
    }

    pub fn remove(&mut self, path: &Path) -> Option<Vec<u8>> {
        self.denied.remove(path);
        self.files.remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileResolver for InMemoryResolver {
    fn resolve(&self, base_dir: &Path, filename: &str) -> Resolution {
        let path = target_path(base_dir, filename);
        if self.denied.contains(&path) {
            return Resolution::AccessDenied;
        }
        match self.files.get(&path) {
            Some(content) => Resolution::Found(content.clone()),
            None => Resolution::NotFound,
        }
    }
}
