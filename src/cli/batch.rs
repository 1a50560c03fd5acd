//! `batch` command: render every manifest page into its own fragment.
//!
//! Pages are independent, so they are rendered and written in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::common::{format_head, write_file};
use super::{BatchArgs, OutputFormat};
use crate::config::SiteConfig;
use crate::page::{Manifest, PageEntry};
use crate::{debug, log, seo};

pub fn run_batch(args: &BatchArgs, config: &SiteConfig) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;

    if manifest.is_empty() {
        log!("batch"; "no pages in {}", args.manifest.display());
        return Ok(());
    }

    if args.clean && args.output.exists() {
        debug!("batch"; "cleaning {}", args.output.display());
        fs::remove_dir_all(&args.output)
            .with_context(|| format!("failed to clean {}", args.output.display()))?;
    }

    let written = render_pages(&manifest, config, &args.output, args.format, args.pretty)?;

    log!("batch"; "rendered {} page{} into {}",
        written.len(), if written.len() == 1 { "" } else { "s" }, args.output.display());
    Ok(())
}

/// Render all pages and return the written files in manifest order.
pub fn render_pages(
    manifest: &Manifest,
    config: &SiteConfig,
    output_dir: &Path,
    format: OutputFormat,
    pretty: bool,
) -> Result<Vec<PathBuf>> {
    manifest
        .pages
        .par_iter()
        .map(|entry| render_page(entry, config, output_dir, format, pretty))
        .collect()
}

fn render_page(
    entry: &PageEntry,
    config: &SiteConfig,
    output_dir: &Path,
    format: OutputFormat,
    pretty: bool,
) -> Result<PathBuf> {
    let mut path = output_dir.join(entry.fragment_path());
    if format == OutputFormat::Json {
        path.set_extension("json");
    }

    let head = seo::render(&entry.meta, config);
    let content = format_head(&head, format, pretty)?;
    write_file(&path, &content)?;

    debug!("batch"; "{} -> {}", entry.route, path.display());
    Ok(path)
}
