//! Configuration section definitions.

pub mod site;

pub use site::{SiteInfoConfig, check_http_url};
