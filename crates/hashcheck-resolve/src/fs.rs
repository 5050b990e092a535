//! Filesystem implementation of `FileResolver`.
//!
//! `FsResolver` joins the target directory and the manifest filename with
//! `Path::join` and reads the result if it is a regular file. Symlinks are
//! followed; a dangling one is simply absent.
//!
//! No containment check is made: `..` segments and absolute filenames are
//! resolved as the platform resolves them.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use hashcheck_contracts::resolve::Resolution;
use hashcheck_core::traits::FileResolver;

/// Reads target files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResolver {
    report_access_denied: bool,
}

impl FsResolver {
    /// A resolver that reports every unreadable path as `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report permission errors as `Resolution::AccessDenied` instead of
    /// folding them into `NotFound`.
    pub fn with_access_denied(mut self, enabled: bool) -> Self {
        self.report_access_denied = enabled;
        self
    }

    fn unreadable(&self, path: &Path, err: &io::Error) -> Resolution {
        if err.kind() == io::ErrorKind::PermissionDenied && self.report_access_denied {
            warn!(path = %path.display(), error = %err, "permission denied");
            return Resolution::AccessDenied;
        }
        if err.kind() != io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %err, "treating unreadable path as not found");
        }
        Resolution::NotFound
    }
}

/// The path `resolve` will look at for `filename` under `base_dir`.
pub fn target_path(base_dir: &Path, filename: &str) -> PathBuf {
    base_dir.join(filename)
}

impl FileResolver for FsResolver {
    fn resolve(&self, base_dir: &Path, filename: &str) -> Resolution {
        let path = target_path(base_dir, filename);

        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => return self.unreadable(&path, &e),
        };
        if !metadata.is_file() {
            debug!(path = %path.display(), "not a regular file");
            return Resolution::NotFound;
        }

        match std::fs::read(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "target file read");
                Resolution::Found(content)
            }
            Err(e) => self.unreadable(&path, &e),
        }
    }
}
