//! Per-page SEO head rendering.
//!
//! `render` is a pure function of the page metadata and the site config:
//!
//! ```text
//! PageMetadata ─┐
//!               ├─ resolve defaults ─ merge schema ─> HeadDescriptor
//! SiteConfig  ──┘
//! ```
//!
//! Tag order: title, description, keywords, canonical, Open Graph,
//! Twitter, JSON-LD script.

pub mod head;
pub mod og;
pub mod schema;
pub mod validate;

pub use head::{HeadDescriptor, HeadTag};
pub use validate::{Issue, validate};

use crate::config::SiteConfig;
use crate::page::{JsonMap, PageMetadata, PageType};
use og::{OgTags, TwitterTags};

/// Page values after default substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub full_title: String,
    pub description: &'a str,
    pub keywords: &'a str,
    pub canonical_url: &'a str,
    pub page_type: PageType,
    pub structured_data: JsonMap,
}

impl<'a> Resolved<'a> {
    /// Apply site defaults to `meta`.
    ///
    /// `canonical_url` and `page_type` default only when absent. `keywords`
    /// also falls back when empty.
    pub fn new(meta: &'a PageMetadata, config: &'a SiteConfig) -> Self {
        let keywords = match meta.keywords.as_deref() {
            Some(keywords) if !keywords.is_empty() => keywords,
            _ => config.site.keywords.as_str(),
        };

        Self {
            full_title: full_title(&meta.title, &config.site.short_name),
            description: &meta.description,
            keywords,
            canonical_url: meta.canonical_url.as_deref().unwrap_or(&config.site.url),
            page_type: meta.page_type.unwrap_or_default(),
            structured_data: schema::merge(&config.schema, meta.schema_overrides.as_ref()),
        }
    }
}

/// `<title> | <short name>`
pub fn full_title(title: &str, short_name: &str) -> String {
    format!("{title} | {short_name}")
}

/// Render the head descriptor for one page.
pub fn render(meta: &PageMetadata, config: &SiteConfig) -> HeadDescriptor {
    let page = Resolved::new(meta, config);

    let mut tags = Vec::with_capacity(15);
    tags.push(HeadTag::title(&page.full_title));
    tags.push(HeadTag::name("description", page.description));
    tags.push(HeadTag::name("keywords", page.keywords));
    tags.push(HeadTag::link("canonical", page.canonical_url));

    let og = OgTags::new(
        config,
        page.page_type,
        &page.full_title,
        page.description,
        page.canonical_url,
    );
    tags.extend(og.tags());

    let twitter = TwitterTags::new(config, &page.full_title, page.description);
    tags.extend(twitter.tags());

    tags.push(HeadTag::json_ld(schema::to_json(&page.structured_data)));

    HeadDescriptor::new(tags)
}

/// Render against the built-in Energy Pool site config.
#[cfg(test)]
pub fn render_default(meta: &PageMetadata) -> HeadDescriptor {
    render(meta, &SiteConfig::default())
}
