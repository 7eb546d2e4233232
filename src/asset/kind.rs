//! Asset type definitions.

use std::fmt;
use std::str::FromStr;

use super::AssetError;

/// Type of asset a bundle produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    /// JavaScript, rendered as `<script>` tags.
    Script,
    /// CSS, rendered as `@import` rules or a `<link>` tag.
    Stylesheet,
}

impl AssetType {
    /// Configuration key for this type (`js` or `css`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Script => "js",
            Self::Stylesheet => "css",
        }
    }
}

impl FromStr for AssetType {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" => Ok(Self::Script),
            "css" => Ok(Self::Stylesheet),
            other => Err(AssetError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
