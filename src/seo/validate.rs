//! Page metadata validation.
//!
//! Validation is advisory: `render` never consults it and always produces
//! output. The `check` command uses it to flag pages before they ship.

use super::full_title;
use crate::config::SiteConfig;
use crate::config::section::check_http_url;
use crate::page::PageMetadata;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::fmt;

/// Search results truncate titles beyond this many characters.
pub const MAX_TITLE_LEN: usize = 60;
/// Search results truncate descriptions beyond this many characters.
pub const MAX_DESCRIPTION_LEN: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Warning,
    Error,
}

/// A single finding about one page field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub level: Level,
    pub field: &'static str,
    pub message: String,
}

impl Issue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            field,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = format!("[{}]", self.field);
        match self.level {
            Level::Error => write!(f, "{} {} {}", "error".red().bold(), field.cyan(), self.message),
            Level::Warning => write!(
                f,
                "{} {} {}",
                "warning".yellow().bold(),
                field.cyan(),
                self.message
            ),
        }
    }
}

/// Validate one page against the site config.
pub fn validate(meta: &PageMetadata, config: &SiteConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if meta.title.trim().is_empty() {
        issues.push(Issue::error("title", "title is empty"));
    } else {
        let len = full_title(&meta.title, &config.site.short_name).chars().count();
        if len > MAX_TITLE_LEN {
            issues.push(Issue::warning(
                "title",
                format!("full title is {len} characters, search results show about {MAX_TITLE_LEN}"),
            ));
        }
    }

    if meta.description.trim().is_empty() {
        issues.push(Issue::error("description", "description is empty"));
    } else {
        let len = meta.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            issues.push(Issue::warning(
                "description",
                format!("description is {len} characters, search results show about {MAX_DESCRIPTION_LEN}"),
            ));
        }
    }

    if meta.keywords.as_deref() == Some("") {
        issues.push(Issue::warning(
            "keywords",
            "keywords is empty, site default keywords will be used",
        ));
    }

    if let Some(url) = &meta.canonical_url
        && let Err(message) = check_http_url(url)
    {
        issues.push(Issue::error("canonical_url", message));
    }

    if let Some(overrides) = &meta.schema_overrides {
        if overrides.contains_key("@context") {
            issues.push(Issue::warning(
                "schema",
                "override replaces `@context` of the structured data",
            ));
        }
        if let Some(ty) = overrides.get("@type")
            && !is_schema_type(ty)
        {
            issues.push(Issue::warning(
                "schema",
                "`@type` should be a string or an array of strings",
            ));
        }
    }

    issues
}

fn is_schema_type(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty() && items.iter().all(Value::is_string),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::JsonMap;
    use serde_json::json;

    fn check(meta: &PageMetadata) -> Vec<Issue> {
        validate(meta, &SiteConfig::default())
    }

    fn object(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn valid_page_has_no_issues() {
        let meta = PageMetadata::new("Roofing", "We fix roofs.")
            .with_canonical_url("https://energypool.co.zw/roofing")
            .with_schema(object(json!({"name": "Energy Pool Roofing"})));
        assert!(check(&meta).is_empty());
    }

    #[test]
    fn empty_required_fields() {
        let issues = check(&PageMetadata::new("  ", ""));
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(Issue::is_error));
        assert_eq!(issues[0].field, "title");
        assert_eq!(issues[1].field, "description");
    }

    #[test]
    fn long_title_and_description() {
        let meta = PageMetadata::new("x".repeat(50), "y".repeat(161));
        let issues = check(&meta);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.level == Level::Warning));
    }

    #[test]
    fn title_length_counts_suffix() {
        // 46 + " | Energy Pool" (14) = 60
        let issues = check(&PageMetadata::new("t".repeat(46), "ok"));
        assert!(issues.is_empty());
        let issues = check(&PageMetadata::new("t".repeat(47), "ok"));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn bad_canonical_url() {
        let issues = check(&PageMetadata::new("A", "B").with_canonical_url("/roofing"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "canonical_url");
        assert!(issues[0].is_error());
    }

    #[test]
    fn empty_keywords_warns() {
        let issues = check(&PageMetadata::new("A", "B").with_keywords(""));
        assert_eq!(issues[0].field, "keywords");
        assert_eq!(issues[0].level, Level::Warning);
    }

    #[test]
    fn schema_override_warnings() {
        let meta = PageMetadata::new("A", "B")
            .with_schema(object(json!({"@context": "https://example.org", "@type": 3})));
        let issues = check(&meta);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.field == "schema" && !i.is_error()));

        let meta = PageMetadata::new("A", "B")
            .with_schema(object(json!({"@type": ["GeneralContractor", "RoofingContractor"]})));
        assert!(check(&meta).is_empty());
    }

    #[test]
    fn display_mentions_field() {
        let text = Issue::error("title", "title is empty").to_string();
        assert!(text.contains("[title]"));
        assert!(text.ends_with("title is empty"));
    }
}
