//! Validated bundle configuration.

use std::path::{Path, PathBuf};

use crate::asset::{AssetError, AssetType, Result, SharedFilter, SourceFile};
use crate::utils::fs::parent_dir;

/// Raw bundle parameters, as read from configuration.
///
/// `kind` is kept as text so that an unknown value is rejected by
/// [`AssetConfig::new`] with the offending string.
#[derive(Debug, Clone)]
pub struct AssetParams {
    /// Output asset path; its parent is the output directory and its file
    /// name the base name of the derived asset.
    pub asset: PathBuf,
    pub files: Vec<SourceFile>,
    pub filter: SharedFilter,
    pub asset_web_path: String,
    pub kind: String,
    /// Defaults to `true`.
    pub minify: Option<bool>,
    /// Defaults to `false`.
    pub defer: Option<bool>,
}

/// Immutable, validated configuration of one bundle.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    output_dir: PathBuf,
    name: String,
    files: Vec<SourceFile>,
    filter: SharedFilter,
    web_path: String,
    kind: AssetType,
    minify: bool,
    defer: bool,
}

impl AssetConfig {
    /// Validate `params`.
    ///
    /// Fails when `kind` is not `js`/`css` or `asset` has no file name.
    pub fn new(params: AssetParams) -> Result<Self> {
        let kind = params.kind.parse::<AssetType>()?;

        let name = params
            .asset
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AssetError::InvalidAsset(params.asset.clone()))?;

        let output_dir = parent_dir(&params.asset).to_path_buf();

        Ok(Self {
            output_dir,
            name,
            files: params.files,
            filter: params.filter,
            web_path: normalize_web_path(&params.asset_web_path),
            kind,
            minify: params.minify.unwrap_or(true),
            defer: params.defer.unwrap_or(false),
        })
    }

    /// Directory derived assets are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Base name of the derived asset before cache busting.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn filter(&self) -> &SharedFilter {
        &self.filter
    }

    /// Web base path, always ending in exactly one `/`.
    pub fn web_path(&self) -> &str {
        &self.web_path
    }

    pub const fn kind(&self) -> AssetType {
        self.kind
    }

    pub const fn minify(&self) -> bool {
        self.minify
    }

    pub const fn defer(&self) -> bool {
        self.defer
    }
}

/// Trim surrounding `/` and append exactly one.
///
/// # Examples
/// ```ignore
/// normalize_web_path("foo/bar")   -> "foo/bar/"
/// normalize_web_path("/foo/bar/") -> "foo/bar/"
/// normalize_web_path("")          -> "/"
/// ```
pub fn normalize_web_path(path: &str) -> String {
    let mut path = path.trim_matches('/').to_string();
    path.push('/');
    path
}
