//! `build` command: write derived assets ahead of page rendering.

use anyhow::{Context, Result};

use crate::config::AssetifyConfig;
use crate::log;
use crate::render::AssetRenderer;
use crate::utils::plural_count;

/// Outcome of building a set of bundles.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub written: usize,
    pub fresh: usize,
}

/// Resolve the derived asset of each selected bundle.
///
/// Bundles are built even when configured with `minify = false`, so a
/// deployment can switch to minified output without a cold first render.
pub fn build_bundles(config: &AssetifyConfig, names: &[String]) -> Result<BuildSummary> {
    let mut summary = BuildSummary::default();

    for bundle in config.select(names)? {
        let name = bundle.name();
        let asset_config = bundle
            .to_asset_config(&config.defaults)
            .with_context(|| format!("invalid bundle `{name}`"))?;
        let resolved = AssetRenderer::new(asset_config)
            .resolve_derived()
            .with_context(|| format!("failed to build bundle `{name}`"))?;

        if resolved.written {
            summary.written += 1;
            log!("build"; "{name}: wrote {}", resolved.target_path());
        } else {
            summary.fresh += 1;
            log!("build"; "{name}: {} is up to date", resolved.target_path());
        }
    }

    log!(
        "build";
        "{} written, {} up to date",
        plural_count(summary.written, "bundle"),
        summary.fresh
    );
    Ok(summary)
}
