//! Page manifest loading.
//!
//! A manifest lists every page of the site with its route and metadata:
//!
//! ```toml
//! [[page]]
//! route = "/services/roofing"
//! title = "Roofing"
//! description = "We fix roofs."
//! type = "business"
//!
//! [page.schema]
//! name = "Energy Pool Roofing"
//! ```
//!
//! JSON manifests use the same shape (`{"page": [...]}`).

use super::PageMetadata;
use crate::utils::path::route_to_fragment_path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("failed to parse `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("unsupported manifest format `{0}`, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    #[error("routes `{0}` and `{1}` both write `{2}`")]
    DuplicateRoute(String, String, PathBuf),
}

/// One page of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Site-relative route, e.g. `/services/roofing`.
    pub route: String,

    #[serde(flatten)]
    pub meta: PageMetadata,
}

impl PageEntry {
    /// Relative path of the fragment this page renders to.
    pub fn fragment_path(&self) -> PathBuf {
        route_to_fragment_path(&self.route)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "page")]
    pub pages: Vec<PageEntry>,
}

impl Manifest {
    /// Load a manifest, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            fs::read_to_string(path).map_err(|err| ManifestError::Io(path.to_path_buf(), err))?;

        let manifest = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content)
                .map_err(|err| ManifestError::Toml(path.to_path_buf(), err))?,
            Some("json") => Self::from_json(&content)
                .map_err(|err| ManifestError::Json(path.to_path_buf(), err))?,
            _ => return Err(ManifestError::UnsupportedFormat(path.to_path_buf())),
        };

        manifest.check_routes()?;
        Ok(manifest)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Reject manifests where two routes map onto the same fragment file.
    pub fn check_routes(&self) -> Result<(), ManifestError> {
        let mut seen: HashMap<PathBuf, &str> = HashMap::with_capacity(self.pages.len());
        for page in &self.pages {
            let path = page.fragment_path();
            if let Some(first) = seen.insert(path.clone(), &page.route) {
                return Err(ManifestError::DuplicateRoute(
                    first.to_string(),
                    page.route.clone(),
                    path,
                ));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
