//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::page::PageType;

/// Render SEO head tags and JSON-LD structured data for Energy Pool pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for seo.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

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
    /// Render the head tags of a single page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render every page of a manifest into head fragments
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },

    /// Print the structured data (JSON-LD) after applying overrides
    #[command(visible_alias = "s")]
    Schema {
        /// Top-level overrides as a JSON object
        #[arg(long, value_name = "JSON")]
        schema: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate every page of a manifest
    #[command(visible_alias = "c")]
    Check {
        /// Page manifest (.toml or .json)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        manifest: PathBuf,

        /// Treat validation failures as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },
}

/// Page metadata given on the command line.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Page title (suffixed with the site short name)
    #[arg(short, long)]
    pub title: String,

    /// Page description
    #[arg(short, long)]
    pub description: String,

    /// Comma-separated keywords (default: site keywords)
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Canonical URL (default: site URL)
    #[arg(short = 'u', long, value_hint = clap::ValueHint::Url)]
    pub canonical_url: Option<String>,

    /// Open Graph type: website | article | business
    #[arg(long = "type", value_name = "TYPE")]
    pub page_type: Option<PageType>,

    /// Top-level structured data overrides as a JSON object
    #[arg(long, value_name = "JSON")]
    pub schema: Option<String>,
}

/// Output format of rendered heads.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment, one tag per line
    #[default]
    Html,
    /// Head descriptor as JSON
    Json,
}

/// Shared output arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Page manifest (.toml or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub manifest: PathBuf,

    /// Output directory for head fragments
    #[arg(short, long, default_value = "head", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Clean output directory completely before rendering
    #[arg(short, long)]
    pub clean: bool,
}
