//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render script and stylesheet bundles
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assetify.toml)
    #[arg(short = 'C', long, default_value = "assetify.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the markup (or deferred references) of bundles
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Write the derived asset of bundles, regardless of their `minify` flag
    #[command(visible_alias = "b")]
    Build {
        /// Bundle names. If omitted, builds all bundles.
        #[arg(value_name = "NAME")]
        names: Vec<String>,
    },

    /// Check sources and output directories of all bundles
    #[command(visible_alias = "c")]
    Check,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Bundle names. If omitted, renders all bundles.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Override `minify` for every bundle
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override `defer` for every bundle
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub defer: Option<bool>,
}
