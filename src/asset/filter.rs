//! Filters applied to a combined bundle before it is written.
//!
//! The renderer never looks inside a filter; it hands it to the pipeline,
//! which applies it when the derived asset is written.
//!
//! | Name     | Behavior                                        |
//! |----------|-------------------------------------------------|
//! | `minify` | oxc (JavaScript) / lightningcss (CSS)           |
//! | `none`   | pass-through                                    |

use std::fmt;
use std::sync::Arc;

use super::{AssetError, AssetType, minify};

/// Transformation applied to the combined source of a bundle.
pub trait Filter: Send + Sync {
    /// Stable identifier, mixed into the cache-busting token so switching
    /// filters produces a new target path.
    fn id(&self) -> &str;

    /// Transform the combined source. Errors are reported as messages and
    /// wrapped by the pipeline.
    fn apply(&self, kind: AssetType, source: &[u8]) -> Result<Vec<u8>, String>;
}

/// Shared, type-erased filter handle.
pub type SharedFilter = Arc<dyn Filter>;

/// Minify with oxc or lightningcss depending on asset type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinifyFilter;

impl Filter for MinifyFilter {
    fn id(&self) -> &str {
        "minify"
    }

    /// Invalid UTF-8 is replaced before minifying.
    fn apply(&self, kind: AssetType, source: &[u8]) -> Result<Vec<u8>, String> {
        minify::minify(kind, &String::from_utf8_lossy(source)).map(String::into_bytes)
    }
}

/// Leave the combined source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFilter;

impl Filter for PassthroughFilter {
    fn id(&self) -> &str {
        "none"
    }

    fn apply(&self, _kind: AssetType, source: &[u8]) -> Result<Vec<u8>, String> {
        Ok(source.to_vec())
    }
}

/// Look up a built-in filter by its configuration name.
pub fn from_name(name: &str) -> Result<SharedFilter, AssetError> {
    match name {
        "minify" => Ok(Arc::new(MinifyFilter)),
        "none" => Ok(Arc::new(PassthroughFilter)),
        other => Err(AssetError::UnknownFilter(other.to_string())),
    }
}

impl fmt::Debug for dyn Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter({})", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("minify").unwrap().id(), "minify");
        assert_eq!(from_name("none").unwrap().id(), "none");

        let err = from_name("uglify").err().unwrap();
        assert!(err.is_config());
        assert_eq!(err.to_string(), "unknown filter [uglify]");
    }

    #[test]
    fn test_passthrough() {
        // Latin-1 bytes pass through untouched
        let source = b"a:after { content: \"\xe9\" }";
        let out = PassthroughFilter.apply(AssetType::Stylesheet, source).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_minify_filter_by_type() {
        let out = MinifyFilter
            .apply(AssetType::Stylesheet, b"p {\n  margin: 0;\n}\n")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "p{margin:0}");
    }
}
