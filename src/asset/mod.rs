//! Asset types, filters and derived asset production.

mod error;
pub mod filter;
mod kind;
pub mod minify;
pub mod pipeline;
mod source;
pub mod version;

// Types
pub use error::{AssetError, Result};
pub use kind::AssetType;
pub use source::SourceFile;

// Filters
pub use filter::{Filter, MinifyFilter, PassthroughFilter, SharedFilter};

// Pipeline (side effects)
pub use pipeline::{AssetPipeline, AssetRequest, DerivedAsset, FsPipeline};
