//! `render` command: print each bundle's markup.
//!
//! Markup goes to stdout, one bundle per line, so the output can be piped
//! into templates. Deferred bundles print their JSON reference list.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::AssetifyConfig;
use crate::debug;
use crate::render::{AssetRenderer, Rendered};

/// Render the bundles named in `names` (all if empty) to stdout.
pub fn run_render(config: &AssetifyConfig, names: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_bundles(config, names, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Render into `out`. Stops at the first failing bundle.
pub fn render_bundles(
    config: &AssetifyConfig,
    names: &[String],
    out: &mut impl Write,
) -> Result<()> {
    for bundle in config.select(names)? {
        let name = bundle.name();
        let asset_config = bundle
            .to_asset_config(&config.defaults)
            .with_context(|| format!("invalid bundle `{name}`"))?;
        let rendered = AssetRenderer::new(asset_config)
            .render()
            .with_context(|| format!("failed to render bundle `{name}`"))?;

        match &rendered {
            Rendered::Markup(_) => debug!("render"; "{name}: markup"),
            Rendered::Deferred(deferred) => {
                debug!("render"; "{name}: deferred ({} paths)", deferred.len())
            }
        }
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn site(dir: &Path, extra: &str) -> AssetifyConfig {
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::create_dir_all(dir.join("public/assets")).unwrap();
        fs::write(dir.join("src/a.js"), "var a = 1;\n").unwrap();
        fs::write(dir.join("src/b.js"), "var b = 2;\n").unwrap();
        fs::write(dir.join("src/site.css"), "body {\n  margin: 0;\n}\n").unwrap();

        let content = format!(
            r#"
            [defaults]
            asset_web_path = "/assets/"
            {extra}

            [[bundle]]
            name = "app"
            type = "js"
            asset = "public/assets/app.js"
            files = [
                {{ fs = "src/a.js", web = "/src/a.js" }},
                {{ fs = "src/b.js", web = "/src/b.js" }},
            ]

            [[bundle]]
            name = "styles"
            type = "css"
            asset = "public/assets/site.css"
            files = [{{ fs = "src/site.css", web = "/src/site.css" }}]
            "#
        );
        let mut config = AssetifyConfig::from_str(&content).unwrap();
        config.finalize(dir);
        config.validate().unwrap();
        config
    }

    fn render_to_string(config: &AssetifyConfig, names: &[String]) -> String {
        let mut out = Vec::new();
        render_bundles(config, names, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_verbose() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "minify = false");

        let output = render_to_string(&config, &[]);
        let expected = concat!(
            r#"<script type="text/javascript" src="/src/a.js"></script>"#,
            r#"<script type="text/javascript" src="/src/b.js"></script>"#,
            "\n",
            "<style type=\"text/css\">\n@import url(\"/src/site.css\");\n</style>\n",
        );
        assert_eq!(output, expected);
        assert_eq!(fs::read_dir(dir.path().join("public/assets")).unwrap().count(), 0);
    }

    #[test]
    fn test_render_minified_writes_once() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "");

        let first = render_to_string(&config, &["app".into()]);
        assert!(first.starts_with(r#"<script type="text/javascript" src="assets/app-"#));
        let second = render_to_string(&config, &["app".into()]);
        assert_eq!(first, second);

        let written: Vec<_> = fs::read_dir(dir.path().join("public/assets"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(written.len(), 1);
        assert!(first.contains(&written[0]));

        let bundle = fs::read_to_string(dir.path().join("public/assets").join(&written[0])).unwrap();
        assert!(bundle.contains("a=1"), "got: {bundle}");
        assert!(bundle.contains("b=2"), "got: {bundle}");
    }

    #[test]
    fn test_render_deferred() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "minify = false\ndefer = true");

        let output = render_to_string(&config, &["app".into()]);
        assert_eq!(output, "[{\"web\":\"/src/a.js\"},{\"web\":\"/src/b.js\"}]\n");
    }

    #[test]
    fn test_render_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "");
        fs::remove_file(dir.path().join("src/b.js")).unwrap();

        let mut out = Vec::new();
        let err = render_bundles(&config, &["app".into()], &mut out).unwrap_err();
        assert!(err.to_string().contains("failed to render bundle `app`"));
        assert!(out.is_empty());
    }
}
