//! Source file entries.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single source file of a bundle.
///
/// `fs` is read when building the derived asset, `web` is what verbose
/// markup and deferred references point at.
///
/// ```toml
/// files = [{ fs = "src/js/app.js", web = "/js/app.js" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub fs: PathBuf,
    pub web: String,
}

impl SourceFile {
    pub fn new(fs: impl Into<PathBuf>, web: impl Into<String>) -> Self {
        Self {
            fs: fs.into(),
            web: web.into(),
        }
    }

    /// Resolve a relative `fs` path against `root`.
    pub fn normalize(&mut self, root: &Path) {
        if self.fs.is_relative() {
            self.fs = root.join(&self.fs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_relative() {
        let mut file = SourceFile::new("src/a.js", "/a.js");
        file.normalize(Path::new("/site"));
        assert_eq!(file.fs, PathBuf::from("/site/src/a.js"));
        assert_eq!(file.web, "/a.js");
    }

    #[test]
    fn test_normalize_absolute_untouched() {
        let mut file = SourceFile::new("/abs/a.js", "/a.js");
        file.normalize(Path::new("/site"));
        assert_eq!(file.fs, PathBuf::from("/abs/a.js"));
    }
}
