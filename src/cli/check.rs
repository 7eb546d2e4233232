//! `check` command: verify bundles against the filesystem.

use anyhow::Result;

use crate::config::{AssetifyConfig, ConfigError};
use crate::log;
use crate::utils::plural_count;

/// Check source files and output directories of every bundle.
pub fn check_config(config: &AssetifyConfig) -> Result<()> {
    let diag = config.check_paths();
    let count = config.bundles.len();

    match diag.into_result() {
        Ok(()) => {
            log!("check"; "{} ok", plural_count(count, "bundle"));
            Ok(())
        }
        Err(diag) => Err(ConfigError::Diagnostics(diag).into()),
    }
}
