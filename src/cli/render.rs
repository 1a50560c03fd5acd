//! `render` command: one page from command-line flags.

use anyhow::Result;

use super::common::{format_head, parse_schema_arg, write_output};
use super::{OutputArgs, PageArgs};
use crate::config::SiteConfig;
use crate::page::PageMetadata;
use crate::seo::HeadDescriptor;
use crate::{debug, log, seo};

impl PageArgs {
    /// Build page metadata from the flags.
    pub fn to_metadata(&self) -> Result<PageMetadata> {
        let schema_overrides = self.schema.as_deref().map(parse_schema_arg).transpose()?;

        Ok(PageMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            canonical_url: self.canonical_url.clone(),
            page_type: self.page_type,
            schema_overrides,
        })
    }
}

pub fn run_render(page: &PageArgs, output: &OutputArgs, config: &SiteConfig) -> Result<()> {
    let meta = page.to_metadata()?;

    for issue in seo::validate(&meta, config) {
        debug!("render"; "{}", issue);
    }

    let head = seo::render(&meta, config);
    log_summary(&head);
    let content = format_head(&head, output.format, output.pretty)?;
    write_output(output.output.as_deref(), &content)?;

    if let Some(path) = &output.output {
        log!("render"; "wrote {}", path.display());
    }
    Ok(())
}

/// Resolved values of the rendered head, shown with `--verbose`.
fn log_summary(head: &HeadDescriptor) {
    debug!("render"; "title: {}", head.title().unwrap_or_default());
    debug!("render"; "keywords: {}", head.meta_name("keywords").unwrap_or_default());
    debug!("render"; "canonical: {}", head.canonical().unwrap_or_default());
    debug!("render"; "og:type: {}", head.meta_property("og:type").unwrap_or_default());
    debug!("render"; "structured data: {} bytes",
        head.structured_data().map_or(0, str::len));
}
