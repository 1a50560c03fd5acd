//! `schema` command: print the merged structured data.

use anyhow::Result;

use super::common::{parse_schema_arg, write_output};
use crate::config::SiteConfig;
use crate::page::JsonMap;
use crate::seo::schema;

/// Merge the optional `--schema` overrides into the site structured data.
pub fn merged_schema(overrides: Option<&str>, config: &SiteConfig) -> Result<JsonMap> {
    let overrides = overrides.map(parse_schema_arg).transpose()?;
    Ok(schema::merge(&config.schema, overrides.as_ref()))
}

pub fn run_schema(overrides: Option<&str>, pretty: bool, config: &SiteConfig) -> Result<()> {
    let data = merged_schema(overrides, config)?;
    let mut json = if pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        schema::to_json(&data)
    };
    json.push('\n');
    write_output(None, &json)
}
