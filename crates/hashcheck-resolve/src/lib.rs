//! # hashcheck-resolve
//!
//! [`FileResolver`](hashcheck_core::traits::FileResolver) implementations.
//!
//! - [`FsResolver`] reads regular files from disk.
//! - [`InMemoryResolver`] serves contents from a map, for embedding and tests.

pub mod fs;
pub mod memory;

pub use fs::{target_path, FsResolver};
pub use memory::InMemoryResolver;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use hashcheck_contracts::resolve::Resolution;
    use hashcheck_core::traits::FileResolver;

    use super::{FsResolver, InMemoryResolver};

    // ── FsResolver ────────────────────────────────────────────────────────────

    #[test]
    fn test_existing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("testFile.txt"), "This is a test!").unwrap();

        let resolution = FsResolver::new().resolve(dir.path(), "testFile.txt");
        assert_eq!(resolution, Resolution::Found(b"This is a test!".to_vec()));
    }

    #[test]
    fn test_removed_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testFile.txt");
        std::fs::write(&path, "This is a test!").unwrap();
        std::fs::remove_file(&path).unwrap();

        let resolution = FsResolver::new().resolve(dir.path(), "testFile.txt");
        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(resolution.into_pair(), (false, b"NOT FOUND".to_vec()));
    }

    #[test]
    fn test_binary_content_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let content: Vec<u8> = vec![0x00, 0xff, 0x0d, 0x0a, 0x80, 0x7f];
        std::fs::write(dir.path().join("blob.bin"), &content).unwrap();

        let resolution = FsResolver::new().resolve(dir.path(), "blob.bin");
        assert_eq!(resolution, Resolution::Found(content));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        assert_eq!(FsResolver::new().resolve(dir.path(), "nested"), Resolution::NotFound);
    }

    #[test]
    fn test_nested_and_parent_segments_are_joined() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner");
        std::fs::create_dir(&inner).unwrap();
        std::fs::write(inner.join("a.txt"), "inside").unwrap();
        std::fs::write(dir.path().join("b.txt"), "outside").unwrap();

        let resolver = FsResolver::new();
        assert_eq!(
            resolver.resolve(dir.path(), "inner/a.txt"),
            Resolution::Found(b"inside".to_vec())
        );
        // `..` is not sandboxed.
        assert_eq!(
            resolver.resolve(&inner, "../b.txt"),
            Resolution::Found(b"outside".to_vec())
        );
    }

    #[test]
    fn test_missing_base_dir_is_not_found() {
        let resolution = FsResolver::new().resolve(Path::new("/definitely/not/here"), "a.txt");
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("link.txt"))
            .unwrap();

        assert_eq!(FsResolver::new().resolve(dir.path(), "link.txt"), Resolution::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_followed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("real.txt"), "target").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();

        assert_eq!(
            FsResolver::new().resolve(dir.path(), "link.txt"),
            Resolution::Found(b"target".to_vec())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_handling() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.txt");
        std::fs::write(&path, "hidden").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read regardless of mode bits; nothing to check.
        if std::fs::read(&path).is_ok() {
            return;
        }

        assert_eq!(FsResolver::new().resolve(dir.path(), "secret.txt"), Resolution::NotFound);
        assert_eq!(
            FsResolver::new()
                .with_access_denied(true)
                .resolve(dir.path(), "secret.txt"),
            Resolution::AccessDenied
        );
    }

    // ── InMemoryResolver ──────────────────────────────────────────────────────

    #[test]
    fn test_in_memory_lookup_uses_joined_path() {
        let resolver = InMemoryResolver::new().with_file("/data/a.txt", "i love pizza");

        assert_eq!(
            resolver.resolve(Path::new("/data"), "a.txt"),
            Resolution::Found(b"i love pizza".to_vec())
        );
        assert_eq!(resolver.resolve(Path::new("/other"), "a.txt"), Resolution::NotFound);
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn test_in_memory_deny_and_remove() {
        let mut resolver = InMemoryResolver::new().with_file("/data/a.txt", "x");
        resolver.deny("/data/a.txt");
        assert_eq!(resolver.resolve(Path::new("/data"), "a.txt"), Resolution::AccessDenied);
        assert!(resolver.is_empty());

        resolver.insert("/data/a.txt", "y");
        assert_eq!(
            resolver.resolve(Path::new("/data"), "a.txt"),
            Resolution::Found(b"y".to_vec())
        );

        assert_eq!(resolver.remove(Path::new("/data/a.txt")), Some(b"y".to_vec()));
        assert_eq!(resolver.resolve(Path::new("/data"), "a.txt"), Resolution::NotFound);
    }
}
