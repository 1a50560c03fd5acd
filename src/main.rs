//! energypool-seo - per-page SEO head tags for the Energy Pool website.

mod cli;
mod config;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { page, output } => cli::render::run_render(page, output, &config),
        Commands::Batch { args } => cli::batch::run_batch(args, &config),
        Commands::Schema { schema, pretty } => {
            cli::schema::run_schema(schema.as_deref(), *pretty, &config)
        }
        Commands::Check {
            manifest,
            warn_only,
        } => cli::check::run_check(manifest, *warn_only, &config),
    }
}
