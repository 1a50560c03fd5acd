//! `[site]` configuration.
//!
//! Site-wide values every rendered head falls back to. The defaults are the
//! Energy Pool production values, so an absent `seo.toml` renders exactly the
//! live site's tags.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_NAME: &str = "Energy Pool Investments";
pub const DEFAULT_SHORT_NAME: &str = "Energy Pool";
pub const DEFAULT_URL: &str = "https://energypool.co.zw";
pub const DEFAULT_IMAGE: &str = "https://picsum.photos/seed/roof_waterproof/1200/630";
pub const DEFAULT_KEYWORDS: &str = "Construction Zimbabwe, Waterproofing Harare, Epoxy Flooring, Roof Repairs, Building Maintenance, Civil Engineering Zimbabwe, Torch-on Waterproofing";
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// Twitter card types accepted by `twitter:card`.
const TWITTER_CARDS: [&str; 4] = ["summary", "summary_large_image", "app", "player"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Full business name (`og:site_name`).
    pub name: String,

    /// Suffix appended to every page title: `<title> | <short_name>`.
    pub short_name: String,

    /// Canonical URL used when a page does not set its own.
    pub url: String,

    /// Share image (`og:image`, `twitter:image`).
    pub image: String,

    /// Keywords used when a page does not set its own.
    pub keywords: String,

    pub twitter_card: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.into(),
            short_name: DEFAULT_SHORT_NAME.into(),
            url: DEFAULT_URL.into(),
            image: DEFAULT_IMAGE.into(),
            keywords: DEFAULT_KEYWORDS.into(),
            twitter_card: DEFAULT_TWITTER_CARD.into(),
        }
    }
}

impl SiteInfoConfig {
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const SHORT_NAME: FieldPath = FieldPath::new("site.short_name");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const IMAGE: FieldPath = FieldPath::new("site.image");
    pub const KEYWORDS: FieldPath = FieldPath::new("site.keywords");
    pub const TWITTER_CARD: FieldPath = FieldPath::new("site.twitter_card");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` and `short_name` must not be empty
    /// - `url` and `image` must be absolute http(s) URLs with a host
    /// - `twitter_card` must be a known card type
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::NAME, "site name must not be empty");
        }
        if self.short_name.trim().is_empty() {
            diag.error_with_hint(
                Self::SHORT_NAME,
                "short name must not be empty",
                format!("it is appended to every title, e.g.: \"{DEFAULT_SHORT_NAME}\""),
            );
        }

        for (field, value) in [(Self::URL, &self.url), (Self::IMAGE, &self.image)] {
            if let Err(message) = check_http_url(value) {
                diag.error_with_hint(field, message, "use format like https://example.com");
            }
        }

        if self.keywords.trim().is_empty() {
            diag.warn(Self::KEYWORDS, "empty default keywords");
        }

        if !TWITTER_CARDS.contains(&self.twitter_card.as_str()) {
            diag.error_with_hint(
                Self::TWITTER_CARD,
                format!("unknown twitter card '{}'", self.twitter_card),
                format!("use one of: {}", TWITTER_CARDS.join(", ")),
            );
        }
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
///
/// Uses the `url` crate for strict parsing.
pub fn check_http_url(value: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("invalid URL '{value}': {e}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".into());
    }
    Ok(())
}
