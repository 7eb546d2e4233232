//! `[[bundle]]` section configuration.
//!
//! Each bundle is one group of source files rendered together.
//!
//! # Example
//!
//! ```toml
//! [[bundle]]
//! name = "app"                          # optional, defaults to the asset stem
//! type = "js"                           # js | css
//! asset = "public/assets/app.js"        # derived assets land in public/assets/
//! asset_web_path = "assets"
//! filter = "minify"                     # minify | none
//! files = [
//!     { fs = "src/js/a.js", web = "/js/a.js" },
//!     { fs = "src/js/b.js", web = "/js/b.js" },
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DefaultsConfig;
use crate::asset::{AssetError, AssetType, SourceFile, filter};
use crate::config::{ConfigDiagnostic, ConfigDiagnostics, FieldPath};
use crate::render::{AssetConfig, AssetParams};
use crate::utils::fs::{is_writable_dir, parent_dir};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Name used to select the bundle on the command line.
    #[serde(default)]
    pub name: Option<String>,

    /// Asset type, `js` or `css`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Output asset path.
    pub asset: PathBuf,

    /// Source files, in inclusion order.
    #[serde(default)]
    pub files: Vec<SourceFile>,

    #[serde(default)]
    pub filter: Option<String>,

    #[serde(default)]
    pub asset_web_path: Option<String>,

    #[serde(default)]
    pub minify: Option<bool>,

    #[serde(default)]
    pub defer: Option<bool>,
}

/// Field paths for diagnostic messages.
pub struct BundleConfigFields {
    pub name: FieldPath,
    pub kind: FieldPath,
    pub asset: FieldPath,
    pub files: FieldPath,
    pub filter: FieldPath,
}

impl BundleConfig {
    pub const FIELDS: BundleConfigFields = BundleConfigFields {
        name: FieldPath::new("bundle.name"),
        kind: FieldPath::new("bundle.type"),
        asset: FieldPath::new("bundle.asset"),
        files: FieldPath::new("bundle.files"),
        filter: FieldPath::new("bundle.filter"),
    };

    /// Bundle name, falling back to the asset's file stem.
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.asset
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// Resolve relative `asset` and `files[].fs` against `root`.
    pub fn normalize(&mut self, root: &Path) {
        if self.asset.is_relative() {
            self.asset = root.join(&self.asset);
        }
        for file in &mut self.files {
            file.normalize(root);
        }
    }

    /// Merge with `defaults` into renderer parameters.
    pub fn to_params(&self, defaults: &DefaultsConfig) -> Result<AssetParams, AssetError> {
        let filter_name = self.filter.as_deref().unwrap_or(&defaults.filter);
        Ok(AssetParams {
            asset: self.asset.clone(),
            files: self.files.clone(),
            filter: filter::from_name(filter_name)?,
            asset_web_path: self
                .asset_web_path
                .clone()
                .unwrap_or_else(|| defaults.asset_web_path.clone()),
            kind: self.kind.clone(),
            minify: Some(self.minify.unwrap_or(defaults.minify)),
            defer: Some(self.defer.unwrap_or(defaults.defer)),
        })
    }

    /// Build the validated renderer configuration.
    pub fn to_asset_config(&self, defaults: &DefaultsConfig) -> Result<AssetConfig, AssetError> {
        AssetConfig::new(self.to_params(defaults)?)
    }

    /// Validate field values. `idx` is the bundle's position in the file.
    pub fn validate(&self, idx: usize, diag: &mut ConfigDiagnostics) {
        let problem = |field, message: String| ConfigDiagnostic::new(field, message).in_bundle(idx);

        if let Err(e) = self.kind.parse::<AssetType>() {
            diag.push(problem(Self::FIELDS.kind, e.to_string()).hint("expected `js` or `css`"));
        }

        if let Some(name) = &self.filter
            && let Err(e) = filter::from_name(name)
        {
            diag.push(problem(Self::FIELDS.filter, e.to_string()).hint("expected `minify` or `none`"));
        }

        if self.asset.file_name().is_none() {
            diag.push(problem(
                Self::FIELDS.asset,
                format!("`{}` has no file name", self.asset.display()),
            ));
        }

        if self.files.is_empty() {
            diag.push(problem(Self::FIELDS.files, "no source files".into()));
        }

        if self.name().is_empty() {
            diag.push(problem(Self::FIELDS.name, "bundle has no name".into()).hint("set `name`"));
        }
    }

    /// Check the filesystem: sources readable, output directory usable.
    ///
    /// Only meaningful after [`normalize`](Self::normalize).
    pub fn check_paths(&self, idx: usize, minify: bool, diag: &mut ConfigDiagnostics) {
        for file in &self.files {
            if !file.fs.is_file() {
                diag.push(
                    ConfigDiagnostic::new(
                        Self::FIELDS.files,
                        format!("source `{}` not found", file.fs.display()),
                    )
                    .in_bundle(idx),
                );
            }
        }

        if !minify {
            return;
        }

        let dir = parent_dir(&self.asset);
        if !is_writable_dir(dir) {
            diag.push(
                ConfigDiagnostic::new(
                    Self::FIELDS.asset,
                    format!("path `{}` is not writable", dir.display()),
                )
                .in_bundle(idx)
                .hint("create the directory or fix its permissions"),
            );
        }
    }
}
