//! Filesystem path helpers.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `parent_dir` - parent directory, `.` for bare file names
//! - `is_writable_dir` - existing directory this process can create files in

use std::fs;
use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Directory containing `path`. A bare file name lives in `.`.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Whether this process can create files in the existing directory `path`.
///
/// Mode bits alone do not answer this: ownership, ACLs and read-only mounts
/// all apply. After the read-only bit, a throwaway file is created in `path`
/// and removed again.
pub fn is_writable_dir(path: &Path) -> bool {
    let usable = fs::metadata(path)
        .map(|meta| meta.is_dir() && !meta.permissions().readonly())
        .unwrap_or(false);

    usable
        && tempfile::Builder::new()
            .prefix(".assetify-")
            .tempfile_in(path)
            .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("public/app.js")), Path::new("public"));
        assert_eq!(parent_dir(Path::new("app.js")), Path::new("."));
    }

    #[test]
    fn test_is_writable_dir() {
        let dir = TempDir::new().unwrap();
        assert!(is_writable_dir(dir.path()));

        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();
        assert!(!is_writable_dir(&file));
        assert!(!is_writable_dir(&dir.path().join("missing")));

        let ro = dir.path().join("ro");
        fs::create_dir(&ro).unwrap();
        let mut perms = fs::metadata(&ro).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&ro, perms.clone()).unwrap();
        assert!(!is_writable_dir(&ro));

        perms.set_readonly(false);
        fs::set_permissions(&ro, perms).unwrap();

        // The check leaves nothing behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_is_writable_dir_respects_kernel() {
        // sysfs directories carry 0755 but refuse new files, even for root
        let sysfs = Path::new("/sys/class");
        let Ok(meta) = fs::metadata(sysfs) else {
            return;
        };
        if meta.permissions().readonly() {
            return;
        }
        assert!(!is_writable_dir(sysfs));
    }
}
