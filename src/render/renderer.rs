//! The asset renderer.
//!
//! | defer | minify | output                                          |
//! |-------|--------|-------------------------------------------------|
//! | no    | no     | one tag per source file                         |
//! | no    | yes    | one tag for the derived asset                   |
//! | yes   | no     | deferred reference to the source files         |
//! | yes   | yes    | deferred reference to the derived asset         |
//!
//! The derived asset is written only when its cache-busted target does not
//! exist yet. That check is not a lock: two processes rendering the same new
//! bundle at once may both write it. [`FsPipeline`] renames complete files
//! into place, so the last identical write wins.
//!
//! Old derived files are never removed.

use std::fmt;
use std::path::Path;

use super::config::AssetConfig;
use super::defer::DeferredScript;
use super::markup::{link_tag, script_tag, style_imports};
use crate::asset::{
    AssetError, AssetPipeline, AssetRequest, AssetType, DerivedAsset, FsPipeline, Result,
};
use crate::debug;
use crate::utils::fs::is_writable_dir;

/// Output of [`AssetRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// HTML to place in the page.
    Markup(String),
    /// Paths for a deferred loader; no markup.
    Deferred(DeferredScript),
}

impl Rendered {
    pub fn as_markup(&self) -> Option<&str> {
        match self {
            Self::Markup(html) => Some(html),
            Self::Deferred(_) => None,
        }
    }

    pub fn as_deferred(&self) -> Option<&DeferredScript> {
        match self {
            Self::Markup(_) => None,
            Self::Deferred(deferred) => Some(deferred),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(html) => f.write_str(html),
            Self::Deferred(deferred) => f.write_str(&deferred.to_json()),
        }
    }
}

/// A derived asset together with whether this call wrote it.
#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    pub asset: DerivedAsset,
    pub written: bool,
}

impl ResolvedAsset {
    pub fn target_path(&self) -> &str {
        self.asset.target_path()
    }
}

/// Renders one bundle.
pub struct AssetRenderer<P = FsPipeline> {
    config: AssetConfig,
    pipeline: P,
}

impl AssetRenderer {
    /// Renderer backed by the filesystem pipeline.
    pub fn new(config: AssetConfig) -> Self {
        Self::with_pipeline(config, FsPipeline)
    }
}

impl<P: AssetPipeline> AssetRenderer<P> {
    pub fn with_pipeline(config: AssetConfig, pipeline: P) -> Self {
        Self { config, pipeline }
    }

    /// Render according to the bundle's `defer` and `minify` flags.
    pub fn render(&self) -> Result<Rendered> {
        let config = &self.config;
        match (config.defer(), config.minify()) {
            (false, false) => Ok(Rendered::Markup(self.verbose())),
            (false, true) => self.minified().map(Rendered::Markup),
            (true, false) => Ok(Rendered::Deferred(DeferredScript::from_sources(
                config.files(),
            ))),
            (true, true) => {
                let resolved = self.resolve_derived()?;
                Ok(Rendered::Deferred(DeferredScript::new([
                    self.web_url(resolved.target_path())
                ])))
            }
        }
    }

    /// One include per source file, in order. No side effects.
    pub fn verbose(&self) -> String {
        let files = self.config.files();
        match self.config.kind() {
            AssetType::Script => files.iter().map(|f| script_tag(&f.web)).collect(),
            AssetType::Stylesheet => style_imports(files.iter().map(|f| f.web.as_str())),
        }
    }

    /// A single tag for the derived asset, writing it first if needed.
    pub fn minified(&self) -> Result<String> {
        let resolved = self.resolve_derived()?;
        let url = self.web_url(resolved.target_path());
        Ok(match self.config.kind() {
            AssetType::Script => script_tag(&url),
            AssetType::Stylesheet => link_tag(&url),
        })
    }

    /// Create the derived asset and write it if its target is missing.
    ///
    /// Fails before touching the pipeline if the output directory is not
    /// writable.
    pub fn resolve_derived(&self) -> Result<ResolvedAsset> {
        let config = &self.config;
        let dir = config.output_dir();
        ensure_writable(dir)?;

        let asset = self.pipeline.create_asset(AssetRequest {
            kind: config.kind(),
            paths: config.files().iter().map(|f| f.fs.as_path()).collect(),
            filter: config.filter(),
            name: config.name(),
        })?;

        let target = dir.join(asset.target_path());
        let written = if target.exists() {
            debug!("asset"; "{} is up to date", asset.target_path());
            false
        } else {
            self.pipeline.write_asset(&asset, dir)?;
            debug!("asset"; "wrote {}", target.display());
            true
        };

        Ok(ResolvedAsset { asset, written })
    }

    fn web_url(&self, target_path: &str) -> String {
        format!("{}{}", self.config.web_path(), target_path)
    }
}

fn ensure_writable(dir: &Path) -> Result<()> {
    if is_writable_dir(dir) {
        Ok(())
    } else {
        Err(AssetError::NotWritable(dir.to_path_buf()))
    }
}
