//! Site configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                             |
//! |------------|-----------------------------------------------------|
//! | `[site]`   | Site name, title suffix, default URL/image/keywords |
//! | `[schema]` | Base JSON-LD structured data (replaces the default) |
//!
//! The file is optional. Without it, the built-in Energy Pool values apply.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::SiteInfoConfig;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    debug, log,
    page::JsonMap,
    seo::schema::{default_schema, deserialize_map},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when `--config` is not given.
pub const CONFIG_FILE: &str = "seo.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path of the loaded config file, empty for built-in defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Base structured data every page's overrides are merged into
    #[serde(default = "default_schema", deserialize_with = "deserialize_map")]
    pub schema: JsonMap,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            site: SiteInfoConfig::default(),
            schema: default_schema(),
        }
    }
}

impl SiteConfig {
    pub const SCHEMA: FieldPath = FieldPath::new("schema");

    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist. Otherwise `seo.toml` is searched
    /// upward from cwd, and built-in defaults are used when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match &cli.config {
            Some(explicit) => {
                let path = cwd.join(explicit);
                if !path.exists() {
                    bail!(ConfigError::Validation(format!(
                        "config file `{}` not found",
                        explicit.display()
                    )));
                }
                Some(path)
            }
            None => find_config_file(Path::new(CONFIG_FILE), &cwd),
        };

        let Some(path) = path else {
            debug!("config"; "no {} found, using built-in defaults", CONFIG_FILE);
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = path;
        config.validate()?;
        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.validate_schema(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// A base schema without `@context`/`@type` is still rendered, but
    /// search engines will ignore it.
    fn validate_schema(&self, diag: &mut ConfigDiagnostics) {
        for key in ["@context", "@type"] {
            if !self.schema.contains_key(key) {
                diag.warn(Self::SCHEMA, format!("structured data has no `{key}` key"));
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use section::site::{DEFAULT_SITE_NAME, DEFAULT_URL};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nname = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.name, DEFAULT_SITE_NAME);
        assert_eq!(config.site.url, DEFAULT_URL);
        assert_eq!(config.schema, default_schema());
    }

    #[test]
    fn test_partial_site_section() {
        let config = SiteConfig::from_str("[site]\nshort_name = \"EP\"").unwrap();
        assert_eq!(config.site.short_name, "EP");
        assert_eq!(config.site.name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn test_schema_section_replaces_default() {
        let config = SiteConfig::from_str(
            r#"
[schema]
"@context" = "https://schema.org"
"@type" = "LocalBusiness"
name = "Energy Pool Bulawayo"
"#,
        )
        .unwrap();
        assert_eq!(config.schema.len(), 3);
        assert_eq!(config.schema["@type"], json!("LocalBusiness"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_schema_datetime_is_a_string() {
        let content = r#"
[schema]
"@context" = "https://schema.org"
"@type" = "GeneralContractor"
foundingDate = 2010-03-01
"#;
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.schema["foundingDate"], json!("2010-03-01"));

        let keys: Vec<&str> = config.schema.keys().map(String::as_str).collect();
        assert_eq!(keys, ["@context", "@type", "foundingDate"]);
    }

    #[test]
    fn test_invalid_site_url_fails_validation() {
        let config = SiteConfig::from_str("[site]\nurl = \"not a url\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nname = \"Test\"\n[schema]\nanything = 1";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\nimage = \"https://energypool.co.zw/og.png\"").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.image, "https://energypool.co.zw/og.png");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }
}
