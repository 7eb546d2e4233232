//! Deferred references.
//!
//! A deferred bundle renders no markup. Instead it hands back the web paths
//! a page loader should include later, in order.

use serde::{Deserialize, Serialize};

use crate::asset::SourceFile;

/// One entry of a deferred reference, shaped like a `files` entry without
/// its filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredEntry {
    pub web: String,
}

/// Ordered web paths to be included by a deferred loader.
///
/// Serializes as `[{"web": "..."}, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeferredScript(Vec<DeferredEntry>);

impl DeferredScript {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(|web| DeferredEntry { web: web.into() })
                .collect(),
        )
    }

    /// Reference the source files themselves.
    pub fn from_sources(files: &[SourceFile]) -> Self {
        Self::new(files.iter().map(|f| f.web.as_str()))
    }

    /// Web paths in inclusion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.web.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON form handed to the loader.
    pub fn to_json(&self) -> String {
        // Vec of plain string structs cannot fail to serialize
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}
