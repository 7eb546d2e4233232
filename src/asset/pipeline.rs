//! Derived asset creation and writing.
//!
//! [`AssetPipeline`] is the seam between the renderer and the work of
//! combining, filtering and naming a bundle. [`FsPipeline`] is the default
//! implementation backed by the local filesystem.
//!
//! Creation is cheap: sources are read and hashed but the filter is not run.
//! Filtering happens in [`AssetPipeline::write_asset`], which the renderer
//! only calls when the cache-busted target is missing on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::version::{CacheBuster, busted_name};
use super::{AssetError, AssetType, Result, SharedFilter};

/// Inputs for one derived asset.
pub struct AssetRequest<'a> {
    pub kind: AssetType,
    /// Source files in inclusion order.
    pub paths: Vec<&'a Path>,
    pub filter: &'a SharedFilter,
    /// Base name of the output, e.g. `bundle.js`.
    pub name: &'a str,
}

/// The single combined output of a bundle.
#[derive(Debug, Clone)]
pub struct DerivedAsset {
    target_path: String,
    kind: AssetType,
    /// Combined, unfiltered source bytes.
    source: Vec<u8>,
    filter: SharedFilter,
}

impl DerivedAsset {
    pub fn new(
        target_path: impl Into<String>,
        kind: AssetType,
        source: impl Into<Vec<u8>>,
        filter: SharedFilter,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            kind,
            source: source.into(),
            filter,
        }
    }

    /// Cache-busted path relative to the output directory.
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// Run the filter over the combined source.
    pub fn dump(&self) -> Result<Vec<u8>> {
        self.filter
            .apply(self.kind, &self.source)
            .map_err(|message| AssetError::Minify {
                name: self.target_path.clone(),
                message,
            })
    }
}

/// Builds and writes derived assets.
pub trait AssetPipeline {
    /// Combine the request's sources into a derived asset with a
    /// content-derived target path. Must not touch the output directory.
    fn create_asset(&self, request: AssetRequest<'_>) -> Result<DerivedAsset>;

    /// Write `asset` to `dir/asset.target_path()`.
    fn write_asset(&self, asset: &DerivedAsset, dir: &Path) -> Result<()>;
}

/// Filesystem-backed pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPipeline;

impl AssetPipeline for FsPipeline {
    fn create_asset(&self, request: AssetRequest<'_>) -> Result<DerivedAsset> {
        let mut buster = CacheBuster::new(request.filter.id());
        let mut parts = Vec::with_capacity(request.paths.len());

        // Raw bytes: sources in legacy encodings are combined as-is
        for path in &request.paths {
            let content = fs::read(path).map_err(|e| AssetError::Io(path.to_path_buf(), e))?;
            buster.update(&content);
            parts.push(content);
        }

        let target_path = busted_name(request.name, &buster.token());
        Ok(DerivedAsset::new(
            target_path,
            request.kind,
            parts.join(&b'\n'),
            request.filter.clone(),
        ))
    }

    fn write_asset(&self, asset: &DerivedAsset, dir: &Path) -> Result<()> {
        let target = dir.join(asset.target_path());
        let content = asset.dump()?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| AssetError::Io(parent.to_path_buf(), e))?;
        }

        // Write beside the target and rename so readers never see a partial file.
        let tmp = temp_sibling(&target);
        fs::write(&tmp, content).map_err(|e| AssetError::Io(tmp.clone(), e))?;
        fs::rename(&tmp, &target).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AssetError::Io(target.clone(), e)
        })
    }
}

fn temp_sibling(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
