//! Per-page metadata supplied by the caller.

use super::JsonMap;
use crate::seo::schema::deserialize_overrides;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Open Graph object type of a page (`og:type`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Website,
    Article,
    Business,
}

impl PageType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website" => Ok(Self::Website),
            "article" => Ok(Self::Article),
            "business" => Ok(Self::Business),
            other => Err(format!(
                "unknown page type '{other}', expected website | article | business"
            )),
        }
    }
}

/// Inputs for rendering one page's head.
///
/// Only `title` and `description` are required. Every other field falls
/// back to a site default at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page-specific title fragment, suffixed with the site short name.
    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(
        default,
        alias = "canonicalUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub canonical_url: Option<String>,

    #[serde(
        default,
        rename = "type",
        alias = "pageType",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_type: Option<PageType>,

    /// Top-level keys replacing those of the site's structured data.
    #[serde(
        default,
        rename = "schema",
        alias = "schemaOverrides",
        deserialize_with = "deserialize_overrides",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_overrides: Option<JsonMap>,
}

#[cfg(test)]
impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn with_page_type(mut self, page_type: PageType) -> Self {
        self.page_type = Some(page_type);
        self
    }

    pub fn with_schema(mut self, overrides: JsonMap) -> Self {
        self.schema_overrides = Some(overrides);
        self
    }
}
