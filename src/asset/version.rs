//! Cache-busting names for derived assets.
//!
//! The token is derived from bundle content, so unchanged sources always map
//! to the same target path and any edit produces a new one.

/// Length of the hex token embedded in target names.
pub const TOKEN_LEN: usize = 8;

/// Incremental content hash for one bundle.
pub struct CacheBuster {
    hasher: blake3::Hasher,
}

impl CacheBuster {
    /// Start a token seeded with the filter id.
    pub fn new(filter_id: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(filter_id.as_bytes());
        hasher.update(&[0]);
        Self { hasher }
    }

    /// Feed one source's content.
    ///
    /// Each part is length-prefixed so moving bytes between adjacent files
    /// changes the token.
    pub fn update(&mut self, content: &[u8]) -> &mut Self {
        self.hasher.update(&(content.len() as u64).to_le_bytes());
        self.hasher.update(content);
        self
    }

    /// First [`TOKEN_LEN`] hex chars of the hash.
    pub fn token(&self) -> String {
        let hash = self.hasher.finalize();
        hex::encode(&hash.as_bytes()[..TOKEN_LEN / 2])
    }
}

/// Insert `token` before the extension of `name`.
///
/// `bundle.js` → `bundle-1a2b3c4d.js`, `bundle` → `bundle-1a2b3c4d`.
pub fn busted_name(name: &str, token: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{token}.{ext}"),
        _ => format!("{name}-{token}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_of(filter: &str, parts: &[&str]) -> String {
        let mut buster = CacheBuster::new(filter);
        for part in parts {
            buster.update(part.as_bytes());
        }
        buster.token()
    }

    #[test]
    fn test_token_is_stable() {
        let a = token_of("minify", &["var a;", "var b;"]);
        let b = token_of("minify", &["var a;", "var b;"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), TOKEN_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_token_changes_with_content() {
        let a = token_of("minify", &["var a;"]);
        assert_ne!(a, token_of("minify", &["var a = 1;"]));
        // Same bytes split differently across files
        assert_ne!(
            token_of("minify", &["ab", "c"]),
            token_of("minify", &["a", "bc"])
        );
    }

    #[test]
    fn test_token_changes_with_filter() {
        assert_ne!(token_of("minify", &["x"]), token_of("none", &["x"]));
    }

    #[test]
    fn test_busted_name() {
        assert_eq!(busted_name("bundle.js", "abc123"), "bundle-abc123.js");
        assert_eq!(busted_name("site.min.css", "abc123"), "site.min-abc123.css");
        assert_eq!(busted_name("bundle", "abc123"), "bundle-abc123");
        assert_eq!(busted_name(".hidden", "abc123"), ".hidden-abc123");
    }
}
