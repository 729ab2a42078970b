//! Assetline - serve stylesheets and scripts compiled on demand.

mod asset;
mod cli;
mod compiler;
mod config;
mod core;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // stdout carries the compiled asset
    logger::use_stderr(matches!(cli.command, Commands::Fetch { .. }));

    let config = AppConfig::load(&cli)?;
    match &config.config_path {
        Some(path) => debug!("config"; "loaded {}", path.display()),
        None => debug!("config"; "no {} found, using defaults", cli.config.display()),
    }
    let pipeline = config.pipeline();
    debug!("config"; "env {}, root {}", pipeline.env(), pipeline.root().display());

    match &cli.command {
        Commands::Serve { .. } => {
            let bound = cli::serve::bind_server(&config.serve)?;
            debug!("serve"; "listening on {}", bound.addr());
            bound.run(&pipeline)
        }
        Commands::Fetch { filename, .. } => {
            cli::fetch::fetch_asset(&pipeline, filename, &mut std::io::stdout().lock())
        }
        Commands::Check { .. } => cli::check::check_pipeline(&pipeline),
    }
}
