//! Open Graph and Twitter Card meta tags data.
//!
//! Pure data built from the resolved page values and the site config.
//! Turning it into head tags is done by `seo::render`.

use super::head::HeadTag;
use crate::config::SiteConfig;
use crate::page::PageType;

/// Open Graph tags for one page.
pub struct OgTags<'a> {
    pub og_type: PageType,
    pub title: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub site_name: &'a str,
    pub image: &'a str,
}

impl<'a> OgTags<'a> {
    pub fn new(
        config: &'a SiteConfig,
        og_type: PageType,
        title: &'a str,
        description: &'a str,
        url: &'a str,
    ) -> Self {
        Self {
            og_type,
            title,
            description,
            url,
            site_name: &config.site.name,
            image: &config.site.image,
        }
    }

    /// `og:*` property tags in emission order.
    pub fn tags(&self) -> [HeadTag; 6] {
        [
            HeadTag::property("og:type", self.og_type.as_str()),
            HeadTag::property("og:title", self.title),
            HeadTag::property("og:description", self.description),
            HeadTag::property("og:url", self.url),
            HeadTag::property("og:site_name", self.site_name),
            HeadTag::property("og:image", self.image),
        ]
    }
}

/// Twitter Card tags for one page.
pub struct TwitterTags<'a> {
    pub card: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
}

impl<'a> TwitterTags<'a> {
    pub fn new(config: &'a SiteConfig, title: &'a str, description: &'a str) -> Self {
        Self {
            card: &config.site.twitter_card,
            title,
            description,
            image: &config.site.image,
        }
    }

    /// `twitter:*` name tags in emission order.
    pub fn tags(&self) -> [HeadTag; 4] {
        [
            HeadTag::name("twitter:card", self.card),
            HeadTag::name("twitter:title", self.title),
            HeadTag::name("twitter:description", self.description),
            HeadTag::name("twitter:image", self.image),
        ]
    }
}
