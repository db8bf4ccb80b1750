// SidSort - platform/fs.rs
//
// File placer primitives consumed by the sort pipeline: directory
// creation, destination existence check, byte copy.  The copy-only-if-
// absent policy lives in app::sort, not here.

use std::io;
use std::path::Path;

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Whether a regular file already exists at the destination.
///
/// Deliberately `is_file`, not `exists`: a directory squatting on the
/// destination name should not be mistaken for an already-filed copy.
pub fn destination_exists(path: &Path) -> bool {
    path.is_file()
}

/// Copy the file bytes from `src` to `dest`, returning the bytes copied.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    std::fs::copy(src, dest)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_ensure_dir_creates_nested_tree() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2021").join("2106").join("210607");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent on an existing tree.
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_destination_exists_distinguishes_files_from_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.dat");
        fs::write(&file, "data").unwrap();

        assert!(destination_exists(&file));
        assert!(!destination_exists(&dir.path().join("absent.dat")));
        assert!(!destination_exists(dir.path()), "a directory is not a copy");
    }

    #[test]
    fn test_copy_file_copies_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.dat");
        let dest = dir.path().join("dest.dat");
        fs::write(&src, "payload").unwrap();

        let n = copy_file(&src, &dest).unwrap();
        assert_eq!(n, 7);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
    }
}
