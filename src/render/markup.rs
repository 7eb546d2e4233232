//! HTML include tags.
//!
//! Paths are written verbatim; callers supply already-safe strings.

use std::fmt::Write;

/// `<script type="text/javascript" src="..."></script>`
pub fn script_tag(src: &str) -> String {
    format!(r#"<script type="text/javascript" src="{src}"></script>"#)
}

/// `<link rel="stylesheet" type="text/css" href="..." />`
pub fn link_tag(href: &str) -> String {
    format!(r#"<link rel="stylesheet" type="text/css" href="{href}" />"#)
}

/// A `<style>` block with one `@import` per line.
pub fn style_imports<'a>(urls: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("<style type=\"text/css\">\n");
    for url in urls {
        let _ = writeln!(out, r#"@import url("{url}");"#);
    }
    out.push_str("</style>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag() {
        assert_eq!(
            script_tag("assets/app.js"),
            r#"<script type="text/javascript" src="assets/app.js"></script>"#
        );
    }

    #[test]
    fn test_link_tag() {
        assert_eq!(
            link_tag("assets/site.css"),
            r#"<link rel="stylesheet" type="text/css" href="assets/site.css" />"#
        );
    }

    #[test]
    fn test_style_imports() {
        assert_eq!(
            style_imports(["a.css", "b.css"]),
            "<style type=\"text/css\">\n@import url(\"a.css\");\n@import url(\"b.css\");\n</style>"
        );
        assert_eq!(style_imports(Vec::<&str>::new()), "<style type=\"text/css\">\n</style>");
    }
}
