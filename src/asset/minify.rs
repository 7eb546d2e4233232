//! Minification for JS and CSS bundles.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use std::borrow::Cow;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, CompressOptionsUnused, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::AssetType;

/// Minify JavaScript source code.
///
/// Bundles are loaded through classic `<script>` tags and their top-level
/// declarations are globals other scripts may use. They are kept and never
/// renamed, even when the bundle itself does not reference them.
pub fn minify_js(source: &str) -> Result<String, String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::script()).parse();
    if let Some(err) = ret.errors.first() {
        return Err(err.to_string());
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions {
            top_level: Some(false),
            ..MangleOptions::default()
        }),
        compress: Some(CompressOptions {
            unused: CompressOptionsUnused::Keep,
            ..CompressOptions::smallest()
        }),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
///
/// `@import` rules found after other rules are moved to the front first.
pub fn minify_css(source: &str) -> Result<String, String> {
    let source = hoist_imports(source);
    let stylesheet =
        StyleSheet::parse(&source, ParserOptions::default()).map_err(|e| e.to_string())?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| e.to_string())?;
    Ok(result.code)
}

/// Move every top-level `@import` statement to the front, in order.
///
/// Comments, strings and nested blocks are skipped, so only real statements
/// move.
fn hoist_imports(source: &str) -> Cow<'_, str> {
    let bytes = source.as_bytes();
    let mut imports = String::new();
    let mut rest = String::with_capacity(source.len());
    let mut depth = 0usize;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = source[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 2);
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i = skip_string(bytes, i, quote);
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'@' if depth == 0 && source[i..].starts_with("@import") => {
                let end = statement_end(bytes, i);
                rest.push_str(&source[copied..i]);
                imports.push_str(&source[i..end]);
                imports.push('\n');
                copied = end;
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    if imports.is_empty() {
        return Cow::Borrowed(source);
    }
    rest.push_str(&source[copied..]);
    imports.push_str(&rest);
    Cow::Owned(imports)
}

/// Index just past the string opened at `open`.
fn skip_string(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index just past the `;` ending the statement at `start`.
fn statement_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b';' => return i + 1,
            quote @ (b'"' | b'\'') => i = skip_string(bytes, i, quote),
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Minify content according to the bundle's asset type.
pub fn minify(kind: AssetType, source: &str) -> Result<String, String> {
    match kind {
        AssetType::Script => minify_js(source),
        AssetType::Stylesheet => minify_css(source),
    }
}
