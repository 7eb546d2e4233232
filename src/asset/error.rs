//! Asset error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or rendering an asset bundle.
#[derive(Debug, Error)]
pub enum AssetError {
    /// `type` is neither `js` nor `css`.
    #[error("unknown type [{0}]")]
    UnknownType(String),

    /// `filter` does not name a known filter.
    #[error("unknown filter [{0}]")]
    UnknownFilter(String),

    /// `asset` has no file name to derive the output name from.
    #[error("asset path `{0}` has no file name")]
    InvalidAsset(PathBuf),

    /// Output directory missing or read-only.
    #[error("path `{0}` is not writable")]
    NotWritable(PathBuf),

    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to minify `{name}`: {message}")]
    Minify { name: String, message: String },
}

impl AssetError {
    /// Rejected while constructing a bundle configuration.
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UnknownType(_) | Self::UnknownFilter(_) | Self::InvalidAsset(_)
        )
    }

    /// Rejected before writing because the output directory is unusable.
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::NotWritable(_))
    }
}

pub type Result<T, E = AssetError> = std::result::Result<T, E>;
