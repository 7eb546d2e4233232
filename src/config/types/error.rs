//! Configuration errors and collected diagnostics.
//!
//! Validation does not stop at the first problem: every finding is pushed
//! into [`ConfigDiagnostics`] and reported as one error.
//!
//! ```text
//! 2 problems in config:
//!   bundle[0].type: unknown type [ts]
//!     help: expected `js` or `css`
//!   bundle[1].name: `app` is also the name of bundle[0]
//! ```

use super::FieldPath;
use crate::utils::plural_count;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(String),

    // Displayed inline; a source() would repeat it in the error chain
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One problem found in the config.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    /// Position of the offending `[[bundle]]`, if any.
    pub bundle: Option<usize>,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            bundle: None,
            message: message.into(),
            hint: None,
        }
    }

    /// Attribute to the bundle at `idx`.
    pub fn in_bundle(mut self, idx: usize) -> Self {
        self.bundle = Some(idx);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// `bundle[2].type` for a bundle field, the plain path otherwise.
    pub fn location(&self) -> String {
        let path = self.field.as_str();
        match (self.bundle, path.split_once('.')) {
            (Some(idx), Some((section, key))) => format!("{section}[{idx}].{key}"),
            (Some(idx), None) => format!("{path}[{idx}]"),
            (None, _) => path.to_string(),
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.location();
        write!(
            f,
            "{}: {}",
            location.if_supports_color(Stream::Stderr, |s| s.cyan()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            let help = "help:".if_supports_color(Stream::Stderr, |s| s.yellow());
            write!(f, "\n  {help} {hint}")?;
        }
        Ok(())
    }
}

/// Errors and warnings collected over a whole config file.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<String>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: ConfigDiagnostic) {
        self.errors.push(diagnostic);
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(ConfigDiagnostic::new(field, message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn print_warnings(&self) {
        for warning in &self.warnings {
            crate::log!("warning"; "{}", warning);
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Err(self)` when any error was recorded. Warnings alone pass.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("{} in config:", plural_count(self.errors.len(), "problem"));
        write!(
            f,
            "{}",
            header.if_supports_color(Stream::Stderr, |s| s.style(Style::new().red().bold()))
        )?;
        for diagnostic in &self.errors {
            let text = diagnostic.to_string().replace('\n', "\n  ");
            write!(f, "\n  {text}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
