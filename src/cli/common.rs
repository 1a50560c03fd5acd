//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::OutputFormat;
use crate::page::JsonMap;
use crate::seo::HeadDescriptor;

/// Parse a `--schema` argument into a JSON object.
pub fn parse_schema_arg(raw: &str) -> Result<JsonMap> {
    let value: Value = serde_json::from_str(raw).context("--schema is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!(
            "--schema must be a JSON object, got {}",
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Serialize a rendered head in the requested format.
pub fn format_head(head: &HeadDescriptor, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(head.to_html()),
        OutputFormat::Json => {
            let mut json = head.to_json(pretty)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write `content` to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => write_file(path, content),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
