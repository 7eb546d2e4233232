//! Config field path.

/// Dotted path of a config field, e.g. `bundle.type`.
///
/// Sections expose their paths as a `FIELDS` constant:
///
/// ```ignore
/// diag.error(DefaultsConfig::FIELDS.filter, "unknown filter [uglify]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
