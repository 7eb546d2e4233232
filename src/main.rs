//! Assetify command-line entry point.

use anyhow::Result;
use assetify::cli::{self, Cli, Commands};
use assetify::config::AssetifyConfig;
use assetify::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = AssetifyConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(&config, &args.names),
        Commands::Build { names } => cli::build::build_bundles(&config, names).map(|_| ()),
        Commands::Check => cli::check::check_config(&config),
    }
}
