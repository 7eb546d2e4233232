//! Bundle rendering: verbose tags, minified tags, or deferred references.

mod config;
mod defer;
pub mod markup;
mod renderer;

pub use config::{AssetConfig, AssetParams, normalize_web_path};
pub use defer::{DeferredEntry, DeferredScript};
pub use renderer::{AssetRenderer, Rendered, ResolvedAsset};
