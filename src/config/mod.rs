//! Configuration management for `assetify.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── bundle     # [[bundle]]
//! │   └── defaults   # [defaults]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # AssetifyConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [defaults]
//! asset_web_path = "assets"
//!
//! [[bundle]]
//! type = "css"
//! asset = "public/assets/site.css"
//! files = [{ fs = "styles/base.css", web = "/styles/base.css" }]
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{BundleConfig, DefaultsConfig};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, RenderArgs},
    utils::fs::{normalize_path, parent_dir},
};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const BUNDLES_FIELD: FieldPath = FieldPath::new("bundle");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing assetify.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetifyConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Values shared by all bundles
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Bundles, in file order
    #[serde(default, rename = "bundle")]
    pub bundles: Vec<BundleConfig>,
}

impl AssetifyConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file; its directory becomes
    /// the root for relative paths.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let Some(config_path) = find_config_file(&cli.config, &cwd) else {
            bail!(ConfigError::Validation(format!(
                "config file `{}` not found",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        let root = parent_dir(&config.config_path).to_path_buf();
        config.finalize(&root);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let mut diag = ConfigDiagnostics::new();
            for field in ignored {
                diag.warn(format!("ignoring unknown field `{field}`"));
            }
            diag.print_warnings();
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Set the root and resolve relative paths against it.
    pub fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        for bundle in &mut self.bundles {
            bundle.normalize(root);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Render { args } => self.apply_render_args(args),
            Commands::Build { .. } | Commands::Check => {}
        }
    }

    /// CLI flags override both `[defaults]` and per-bundle settings.
    pub fn apply_render_args(&mut self, args: &RenderArgs) {
        Self::update_option(&mut self.defaults.minify, args.minify.as_ref());
        Self::update_option(&mut self.defaults.defer, args.defer.as_ref());
        for bundle in &mut self.bundles {
            if args.minify.is_some() {
                bundle.minify = args.minify;
            }
            if args.defer.is_some() {
                bundle.defer = args.defer;
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate field values of every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.bundles.is_empty() {
            diag.push(
                ConfigDiagnostic::new(BUNDLES_FIELD, "no bundles configured")
                    .hint("add a [[bundle]] section"),
            );
        }

        if let Err(e) = crate::asset::filter::from_name(&self.defaults.filter) {
            diag.error(DefaultsConfig::FIELDS.filter, e.to_string());
        }

        let mut seen: FxHashMap<String, usize> = FxHashMap::default();
        for (idx, bundle) in self.bundles.iter().enumerate() {
            bundle.validate(idx, &mut diag);

            let name = bundle.name();
            if let Some(prev) = seen.insert(name.clone(), idx) {
                diag.push(
                    ConfigDiagnostic::new(
                        BundleConfig::FIELDS.name,
                        format!("`{name}` is also the name of bundle[{prev}]"),
                    )
                    .in_bundle(idx)
                    .hint("set a distinct `name`"),
                );
            }
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Check every bundle against the filesystem.
    pub fn check_paths(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        for (idx, bundle) in self.bundles.iter().enumerate() {
            let minify = bundle.minify.unwrap_or(self.defaults.minify);
            bundle.check_paths(idx, minify, &mut diag);
        }
        diag
    }

    // ========================================================================
    // bundle lookup
    // ========================================================================

    /// Find a bundle by name.
    pub fn bundle(&self, name: &str) -> Option<&BundleConfig> {
        self.bundles.iter().find(|b| b.name() == name)
    }

    /// Bundles named in `names`, in the given order; all bundles if empty.
    pub fn select(&self, names: &[String]) -> Result<Vec<&BundleConfig>> {
        if names.is_empty() {
            return Ok(self.bundles.iter().collect());
        }

        names
            .iter()
            .map(|name| {
                self.bundle(name).with_context(|| {
                    let known: Vec<_> = self.bundles.iter().map(BundleConfig::name).collect();
                    format!("unknown bundle `{name}` (known: {})", known.join(", "))
                })
            })
            .collect()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [defaults]
        asset_web_path = "assets"

        [[bundle]]
        type = "js"
        asset = "public/assets/app.js"
        files = [
            { fs = "src/a.js", web = "/js/a.js" },
            { fs = "src/b.js", web = "/js/b.js" },
        ]

        [[bundle]]
        name = "styles"
        type = "css"
        asset = "public/assets/site.css"
        minify = false
        files = [{ fs = "css/site.css", web = "/css/site.css" }]
    "#;

    #[test]
    fn test_parse() {
        let config = AssetifyConfig::from_str(CONFIG).unwrap();
        assert_eq!(config.bundles.len(), 2);
        assert!(config.defaults.minify);
        assert_eq!(config.bundles[0].name(), "app");
        assert_eq!(config.bundles[1].name(), "styles");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_with_ignored() {
        let content = format!("{CONFIG}\n[extra]\nfoo = 1\n");
        let (config, ignored) = AssetifyConfig::parse_with_ignored(&content).unwrap();
        assert_eq!(config.bundles.len(), 2);
        assert_eq!(ignored, ["extra"]);
    }

    #[test]
    fn test_missing_type_is_parse_error() {
        let content = r#"
            [[bundle]]
            asset = "app.js"
        "#;
        assert!(AssetifyConfig::from_str(content).is_err());
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let mut config = AssetifyConfig::from_str(CONFIG).unwrap();
        config.finalize(Path::new("/site"));
        assert_eq!(config.root, Path::new("/site"));
        assert_eq!(
            config.bundles[0].asset,
            PathBuf::from("/site/public/assets/app.js")
        );
        assert_eq!(
            config.bundles[1].files[0].fs,
            PathBuf::from("/site/css/site.css")
        );
    }

    #[test]
    fn test_render_args_override() {
        let mut config = AssetifyConfig::from_str(CONFIG).unwrap();
        config.apply_render_args(&RenderArgs {
            names: vec![],
            minify: Some(true),
            defer: None,
        });
        assert!(config.bundles.iter().all(|b| b.minify == Some(true)));
        assert!(config.bundles.iter().all(|b| b.defer.is_none()));

        config.apply_render_args(&RenderArgs {
            names: vec![],
            minify: None,
            defer: Some(true),
        });
        assert!(config.defaults.defer);
        assert_eq!(config.bundles[1].minify, Some(true));
    }

    #[test]
    fn test_validate_collects_errors() {
        let content = r#"
            [defaults]
            filter = "uglify"

            [[bundle]]
            type = "ts"
            asset = "public/app.js"
            files = [{ fs = "a.ts", web = "/a.ts" }]

            [[bundle]]
            type = "js"
            asset = "other/app.js"
            files = [{ fs = "a.js", web = "/a.js" }]
        "#;
        let config = AssetifyConfig::from_str(content).unwrap();
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        // defaults.filter, bundle[0].type, duplicate name "app"
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_no_bundles() {
        let config = AssetifyConfig::from_str("").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_select() {
        let config = AssetifyConfig::from_str(CONFIG).unwrap();
        assert_eq!(config.select(&[]).unwrap().len(), 2);

        let picked = config.select(&["styles".into(), "app".into()]).unwrap();
        assert_eq!(picked[0].name(), "styles");
        assert_eq!(picked[1].name(), "app");

        let err = config.select(&["admin".into()]).unwrap_err();
        assert!(err.to_string().contains("unknown bundle `admin`"));
    }
}
