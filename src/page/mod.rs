//! Page inputs: per-page metadata and the manifest listing every page.

mod manifest;
mod meta;

pub use manifest::{Manifest, PageEntry};
pub use meta::{PageMetadata, PageType};

/// A JSON object map for structured data and its overrides.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
