//! Assetify - script and stylesheet bundle rendering.
//!
//! A bundle is an ordered list of source files plus an output asset path.
//! Rendering either emits one include tag per source file, or combines the
//! sources through a filter into one cache-busted derived asset and emits a
//! single tag for it. Deferred bundles return the paths instead of markup.
//!
//! ```ignore
//! let config = AssetConfig::new(params)?;
//! let html = AssetRenderer::new(config).render()?;
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod logger;
pub mod render;
pub mod utils;

pub use asset::{AssetError, AssetPipeline, AssetType, DerivedAsset, Filter, FsPipeline, SourceFile};
pub use render::{AssetConfig, AssetParams, AssetRenderer, DeferredScript, Rendered};
