//! `check` command: validate every page of a manifest.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::page::Manifest;
use crate::log;
use crate::seo::{self, Issue};

/// Validation totals over a manifest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub pages: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Validate all pages, returning per-route issues and the totals.
pub fn check_manifest(
    manifest: &Manifest,
    config: &SiteConfig,
) -> (Vec<(String, Vec<Issue>)>, CheckSummary) {
    let mut summary = CheckSummary {
        pages: manifest.len(),
        ..CheckSummary::default()
    };

    let report = manifest
        .pages
        .iter()
        .map(|entry| {
            let issues = seo::validate(&entry.meta, config);
            for issue in &issues {
                if issue.is_error() {
                    summary.errors += 1;
                } else {
                    summary.warnings += 1;
                }
            }
            (entry.route.clone(), issues)
        })
        .filter(|(_, issues)| !issues.is_empty())
        .collect();

    (report, summary)
}

pub fn run_check(manifest_path: &Path, warn_only: bool, config: &SiteConfig) -> Result<()> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    let (report, summary) = check_manifest(&manifest, config);

    for (route, issues) in &report {
        log!("check"; "{}", route);
        for issue in issues {
            eprintln!("  {issue}");
        }
    }

    log!("check"; "{} page{}, {} error{}, {} warning{}",
        summary.pages, plural(summary.pages),
        summary.errors, plural(summary.errors),
        summary.warnings, plural(summary.warnings));

    if summary.errors > 0 && !warn_only {
        bail!("{} page error{} found", summary.errors, plural(summary.errors));
    }
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
