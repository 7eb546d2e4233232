//! `[defaults]` section configuration.
//!
//! Values applied to every bundle that does not set them itself.
//!
//! # Example
//!
//! ```toml
//! [defaults]
//! minify = false          # development: verbose tags everywhere
//! defer = false
//! filter = "minify"
//! asset_web_path = "assets"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::FieldPath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Combine and minify bundles.
    pub minify: bool,
    /// Return deferred references instead of markup.
    pub defer: bool,
    /// Filter name (`minify` or `none`).
    pub filter: String,
    /// Web base path for derived assets.
    pub asset_web_path: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            minify: true,
            defer: false,
            filter: "minify".into(),
            asset_web_path: String::new(),
        }
    }
}

/// Field paths for diagnostic messages.
pub struct DefaultsConfigFields {
    pub minify: FieldPath,
    pub defer: FieldPath,
    pub filter: FieldPath,
    pub asset_web_path: FieldPath,
}

impl DefaultsConfig {
    pub const FIELDS: DefaultsConfigFields = DefaultsConfigFields {
        minify: FieldPath::new("defaults.minify"),
        defer: FieldPath::new("defaults.defer"),
        filter: FieldPath::new("defaults.filter"),
        asset_web_path: FieldPath::new("defaults.asset_web_path"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: DefaultsConfig = toml::from_str("").unwrap();
        assert_eq!(config, DefaultsConfig::default());
        assert!(config.minify);
        assert!(!config.defer);
        assert_eq!(config.filter, "minify");
    }

    #[test]
    fn test_partial_override() {
        let config: DefaultsConfig = toml::from_str("minify = false").unwrap();
        assert!(!config.minify);
        assert_eq!(config.filter, "minify");
    }
}
